use rand::distributions::Distribution;
use rand_distr::StandardNormal;
use std::vec::Vec;

use crate::shapes::*;

use super::{Error, Tensor};

/// Something that can store nd arrays of element type `E`.
pub trait Storage<E>: 'static + std::fmt::Debug + Default + Clone + Send + Sync {
    /// Generic Storage type
    type Vec: 'static + std::fmt::Debug + Clone + Send + Sync;

    /// Allocates a gradient for the given nd array
    fn try_alloc_grad(&self, storage: &Self::Vec) -> Result<Self::Vec, Error> {
        self.try_alloc_len(self.len(storage))
    }

    /// Allocates `len` elements, all zero.
    fn try_alloc_len(&self, len: usize) -> Result<Self::Vec, Error>;

    fn tensor_to_vec(&self, tensor: &Tensor<E, Self>) -> Vec<E>;

    fn len(&self, v: &Self::Vec) -> usize;
}

/// Internal trait - Represents something that can allocate its own gradient.
pub trait AllocGrad {
    type Gradient: 'static;
    fn try_alloc_grad(&self) -> Result<Self::Gradient, Error>;
}

impl<E, D: Storage<E>> AllocGrad for Tensor<E, D> {
    type Gradient = D::Vec;
    fn try_alloc_grad(&self) -> Result<Self::Gradient, Error> {
        self.device.try_alloc_grad(self.data.as_ref())
    }
}

/// Construct tensors filled with zeros.
pub trait ZerosTensor<E>: Storage<E> {
    /// Build the tensor with a shape given by something else.
    ///
    /// Given a shape directly:
    /// ```rust
    /// # use catsplit_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let a: Tensor<f32, _> = dev.zeros_like(&Shape::from([5, 3]));
    /// ```
    ///
    /// Given another tensor:
    /// ```rust
    /// # use catsplit_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let a: Tensor<f32, _> = dev.zeros_like(&Shape::from([2, 3]));
    /// let b: Tensor<f32, _> = dev.zeros_like(&a);
    /// ```
    fn zeros_like<S: HasShape>(&self, src: &S) -> Tensor<E, Self> {
        self.try_zeros_like(src).unwrap()
    }

    /// Fallible version of [ZerosTensor::zeros_like]
    fn try_zeros_like<S: HasShape>(&self, src: &S) -> Result<Tensor<E, Self>, Error> {
        let shape = src.shape().clone();
        let data = self.try_alloc_len(shape.num_elements())?;
        Ok(Tensor::from_parts(self.clone(), shape, data))
    }
}

impl<E, D: Storage<E>> ZerosTensor<E> for D {}

/// Construct tensors from rust vectors.
pub trait TensorFromVec<E>: Storage<E> {
    /// Builds a tensor from row-major data. **Panics** if `src` has the
    /// wrong number of elements for `shape`.
    ///
    /// ```rust
    /// # use catsplit_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let t: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], [2, 3]);
    /// assert_eq!(t.shape().dims(), &[2, 3]);
    /// ```
    fn tensor_from_vec<S: Into<Shape>>(&self, src: Vec<E>, shape: S) -> Tensor<E, Self> {
        self.try_tensor_from_vec::<S>(src, shape).unwrap()
    }

    /// Fallible version of [TensorFromVec::tensor_from_vec]
    fn try_tensor_from_vec<S: Into<Shape>>(
        &self,
        src: Vec<E>,
        shape: S,
    ) -> Result<Tensor<E, Self>, Error>;
}

/// Constructs tensors filled with random values from a given distribution.
pub trait SampleTensor<E>: Storage<E> {
    /// Samples a tensor of the given shape from a standard normal distribution.
    ///
    /// ```rust
    /// # use catsplit_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let a: Tensor<f32, _> = dev.sample_normal_like(&Shape::from([2, 3]));
    /// assert_eq!(a.as_vec().len(), 6);
    /// ```
    fn sample_normal_like<S: HasShape>(&self, src: &S) -> Tensor<E, Self>
    where
        StandardNormal: Distribution<E>,
    {
        self.try_sample_like(src, StandardNormal).unwrap()
    }

    /// Fallible version of [SampleTensor::sample_normal_like]
    fn try_sample_normal_like<S: HasShape>(&self, src: &S) -> Result<Tensor<E, Self>, Error>
    where
        StandardNormal: Distribution<E>,
    {
        self.try_sample_like(src, StandardNormal)
    }

    /// Samples a tensor with a given shape from a given distribution.
    fn sample_like<S: HasShape, D: Distribution<E>>(&self, src: &S, distr: D) -> Tensor<E, Self> {
        self.try_sample_like(src, distr).unwrap()
    }

    /// Fallibly samples a tensor with a given shape from a given distribution.
    fn try_sample_like<S: HasShape, D: Distribution<E>>(
        &self,
        src: &S,
        distr: D,
    ) -> Result<Tensor<E, Self>, Error>;
}
