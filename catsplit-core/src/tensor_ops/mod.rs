//! Operations on tensors like [TryConcatTensorAlong::concat_tensor_along] and
//! [TrySplitTensorAlong::split_tensor_along].
//!
//! # Fallibility
//!
//! All tensor methods in this module have a fallible version prefixed with
//! `try_`, which returns an [Error](crate::tensor::Error) instead of panicking.
//! Every precondition is checked before anything is allocated or copied.
//!
//! # Axes
//!
//! Axes are `isize`, negative values count from the last dimension:
//!
//! ```rust
//! # use catsplit_core::prelude::*;
//! # let dev: Cpu = Default::default();
//! let a: Tensor<f32, _> = dev.zeros_like(&Shape::from([2, 3]));
//! let b: Tensor<f32, _> = dev.zeros_like(&Shape::from([2, 4]));
//! let c = [a, b].concat_tensor_along(-1);
//! assert_eq!(c.shape().dims(), &[2, 7]);
//! ```
//!
//! # Concat & split are inverses
//!
//! Splitting a concatenation at the extents of its inputs gives the inputs
//! back exactly, which is what the backward pass relies on:
//!
//! ```rust
//! # use catsplit_core::prelude::*;
//! # let dev: Cpu = Default::default();
//! let a: Tensor<f32, _> = dev.sample_normal_like(&Shape::from([2, 3]));
//! let b: Tensor<f32, _> = dev.sample_normal_like(&Shape::from([2, 5]));
//! let ab = [a.clone(), b.clone()].concat_tensor_along(1);
//! let parts = ab.split_tensor_along(1, &[3, 5]);
//! assert_eq!(parts[0].as_vec(), a.as_vec());
//! assert_eq!(parts[1].as_vec(), b.as_vec());
//! ```

mod concat_shape_along;
pub(crate) mod concat_tensor_along;
mod split_shape_along;
mod split_tensor_along;
pub(crate) mod utilities;

pub use concat_shape_along::TryConcatShapeAlong;
pub use concat_tensor_along::{ConcatAlongKernel, TryConcatTensorAlong};
pub use split_shape_along::TrySplitShapeAlong;
pub use split_tensor_along::TrySplitTensorAlong;
pub use utilities::{AxisLayout, Segment};
