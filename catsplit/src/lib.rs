//! # catsplit
//!
//! Concatenate tensors along any axis, and route gradients back through the
//! concatenation by splitting them at the input boundaries.
//!
//! Everything lives in `catsplit-core` and is re-exported here. See
//! [feature_flags] for the available features.
//!
//! # Forward
//!
//! All inputs must have the same rank and agree on every dim except the
//! concat axis. The output's size along that axis is the sum of the inputs'.
//!
//! ```rust
//! # use catsplit::prelude::*;
//! let dev: Cpu = Default::default();
//! let a: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0, 3.0, 4.0], [2, 2]);
//! let b: Tensor<f32, _> = dev.tensor_from_vec(vec![5.0, 6.0], [2, 1]);
//! let ab = [&a, &b].concat_tensor_along(-1);
//! assert_eq!(ab.shape().dims(), &[2, 3]);
//! assert_eq!(ab.as_vec(), [1.0, 2.0, 5.0, 3.0, 4.0, 6.0]);
//! ```
//!
//! # Backward
//!
//! An autodiff host drives [diff_fns::ConcatAlong] through
//! [diff_fns::DifferentiableOp]. The gradient of each input is the slice of
//! the output gradient that input was copied into.
//!
//! ```rust
//! # use catsplit::prelude::*;
//! let dev: Cpu = Default::default();
//! let a: Tensor<f32, _> = dev.zeros_like(&Shape::from([2, 2]));
//! let b: Tensor<f32, _> = dev.zeros_like(&Shape::from([2, 1]));
//! let op = ConcatAlong::new(1);
//!
//! let grad_out: Tensor<f32, _> =
//!     dev.tensor_from_vec(vec![1.0, 2.0, 5.0, 3.0, 4.0, 6.0], [2, 3]);
//! let grads = op.try_backward(&[a.ghost(), b.ghost()], &grad_out).unwrap();
//! assert_eq!(grads[0].as_vec(), [1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(grads[1].as_vec(), [5.0, 6.0]);
//! ```
//!
//! Hosts that already own gradient buffers can add into them instead with
//! [diff_fns::DifferentiableOp::try_accumulate_grads].

pub use catsplit_core::*;

pub mod prelude {
    pub use catsplit_core::prelude::*;
}
