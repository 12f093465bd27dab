use super::Cpu;
use crate::{
    dtypes::Unit,
    shapes::*,
    tensor::{storage_traits::*, Error, Tensor},
};
use rand::distributions::Distribution;
use std::vec::Vec;

impl<E: Unit> TensorFromVec<E> for Cpu {
    fn try_tensor_from_vec<S: Into<Shape>>(
        &self,
        src: Vec<E>,
        shape: S,
    ) -> Result<Tensor<E, Self>, Error> {
        let shape = shape.into();
        if src.len() != shape.num_elements() {
            return Err(Error::WrongNumElements);
        }
        Ok(Tensor::from_parts(self.clone(), shape, src))
    }
}

impl<E: Unit> SampleTensor<E> for Cpu {
    fn try_sample_like<S: HasShape, D: Distribution<E>>(
        &self,
        src: &S,
        distr: D,
    ) -> Result<Tensor<E, Self>, Error> {
        let shape = src.shape().clone();
        let mut data = <Self as Storage<E>>::try_alloc_len(self, shape.num_elements())?;
        {
            let mut rng = self.rng.lock().unwrap();
            for x in data.iter_mut() {
                *x = distr.sample(&mut *rng);
            }
        }
        Ok(Tensor::from_parts(self.clone(), shape, data))
    }
}
