use super::Cuda;
use crate::{
    dtypes::Unit,
    shapes::*,
    tensor::{storage_traits::*, Cpu, Error, Tensor},
};
use rand::distributions::Distribution;
use std::vec::Vec;

impl<E: Unit> TensorFromVec<E> for Cuda {
    fn try_tensor_from_vec<S: Into<Shape>>(
        &self,
        src: Vec<E>,
        shape: S,
    ) -> Result<Tensor<E, Self>, Error> {
        let shape = shape.into();
        if src.len() != shape.num_elements() {
            return Err(Error::WrongNumElements);
        }
        let data = self.dev.htod_copy(src)?;
        Ok(Tensor::from_parts(self.clone(), shape, data))
    }
}

impl<E: Unit> SampleTensor<E> for Cuda {
    fn try_sample_like<S: HasShape, D: Distribution<E>>(
        &self,
        src: &S,
        distr: D,
    ) -> Result<Tensor<E, Self>, Error> {
        let t_cpu: Tensor<E, Cpu> = self.cpu.try_sample_like(src, distr)?;
        self.try_tensor_from_vec(t_cpu.as_vec(), src.shape().clone())
    }
}
