//! The [Tensor] struct, [Cpu] & [Cuda] devices, and
//! traits like [ZerosTensor] and [TensorFromVec].
//!
//! At a high level a tensor is made up of:
//! 1. The element type `E` (see [crate::dtypes])
//! 2. The [crate::shapes::Shape], known at run time
//! 3. The device it is stored on (see [Storage])
//!
//! # Creating tensors with Devices
//!
//! Devices allocate tensors and run kernels on them:
//!
//! ```rust
//! # use catsplit_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let z: Tensor<f32, _> = dev.zeros_like(&Shape::from([2, 3]));
//! let t: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0, 3.0], [3]);
//! let r: Tensor<f32, _> = dev.sample_normal_like(&Shape::from([4, 5]));
//! ```
//!
//! # Reading data back
//!
//! ```rust
//! # use catsplit_core::prelude::*;
//! # let dev: Cpu = Default::default();
//! let t: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0, 3.0, 4.0], [2, 2]);
//! assert_eq!(t.as_vec(), [1.0, 2.0, 3.0, 4.0]);
//! ```
//!
//! # Ghosts
//!
//! [Tensor::ghost] keeps the id & shape of a tensor without its data,
//! which is all the backward pass of concatenation needs.

pub(crate) mod cpu;
#[cfg(feature = "cuda")]
pub(crate) mod cuda;
mod error;
mod ghost;
pub(crate) mod storage_traits;
mod tensor_impl;

pub use error::Error;
pub use ghost::GhostTensor;
pub use storage_traits::{AllocGrad, SampleTensor, Storage, TensorFromVec, ZerosTensor};
pub use tensor_impl::{HasUniqueId, Tensor, UniqueId};

pub use cpu::Cpu;
#[cfg(feature = "cuda")]
pub use cuda::Cuda;
