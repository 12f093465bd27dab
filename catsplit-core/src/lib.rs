//! # catsplit
//!
//! catsplit joins tensors along an axis and splits gradients back apart,
//! packaged as a differentiable op that an autodiff host can call into.
//!
//! See [feature_flags] for details on feature flags.
//!
//! # Shapes & Tensors
//!
//! *See [dtypes], [shapes], and [tensor] for more information.*
//!
//! A [`tensor::Tensor`] is a dense, row-major nd-array. Its [`shapes::Shape`]
//! is known at run time, so tensors of any rank can be joined together as long
//! as they agree on every dimension except the one being concatenated.
//!
//! ```rust
//! # use catsplit_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let a: Tensor<f32, _> = dev.zeros_like(&Shape::from([2, 3]));
//! assert_eq!(a.shape().dims(), &[2, 3]);
//! ```
//!
//! # Concatenating & splitting
//!
//! *See [tensor_ops] for more information*
//!
//! | Operation | catsplit | numpy | pytorch |
//! | --- | --- | --- | --- |
//! | Concat | [tensor_ops::TryConcatTensorAlong] | `np.concatenate` | `torch.cat` |
//! | Split | [tensor_ops::TrySplitTensorAlong] | `np.split` | `torch.split` |
//!
//! ```rust
//! # use catsplit_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let a: Tensor<f32, _> = dev.zeros_like(&Shape::from([2, 3]));
//! let b: Tensor<f32, _> = dev.zeros_like(&Shape::from([2, 5]));
//! let ab = [a, b].concat_tensor_along(1);
//! assert_eq!(ab.shape().dims(), &[2, 8]);
//!
//! let parts = ab.split_tensor_along(1, &[3, 5]);
//! assert_eq!(parts[0].shape().dims(), &[2, 3]);
//! assert_eq!(parts[1].shape().dims(), &[2, 5]);
//! ```
//!
//! # Plugging into an autodiff host
//!
//! *See [diff_fns] for more information*
//!
//! [diff_fns::ConcatAlong] implements [diff_fns::DifferentiableOp], which is
//! the pair of calls a computation graph makes when evaluating the node and
//! when propagating gradients through it.

pub mod diff_fns;
pub mod dtypes;
pub mod feature_flags;
pub mod shapes;
pub mod tensor;
pub mod tensor_ops;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::diff_fns::*;
    pub use crate::dtypes::*;
    pub use crate::shapes::*;
    pub use crate::tensor::*;
    pub use crate::tensor_ops::*;
}

#[cfg(test)]
pub(crate) mod tests {
    pub use num_traits::FromPrimitive;

    use crate::{shapes::Shape, tensor::*};

    #[cfg(not(feature = "cuda"))]
    pub type TestDevice = crate::tensor::Cpu;

    #[cfg(feature = "cuda")]
    pub type TestDevice = crate::tensor::Cuda;

    #[cfg(not(feature = "test-f64"))]
    pub type TestDtype = f32;

    #[cfg(feature = "test-f64")]
    pub type TestDtype = f64;

    /// A tensor holding `start, start + 1, ...` in row-major order, so every
    /// element is distinguishable after being moved around.
    pub fn arange<S: Into<Shape>>(
        dev: &TestDevice,
        shape: S,
        start: usize,
    ) -> Tensor<TestDtype, TestDevice> {
        let shape = shape.into();
        let data = (start..start + shape.num_elements())
            .map(|i| TestDtype::from_usize(i).unwrap())
            .collect();
        dev.tensor_from_vec(data, shape)
    }

    pub trait AssertClose {
        type Elem: std::fmt::Display + std::fmt::Debug + Copy;
        const DEFAULT_TOLERANCE: Self::Elem;
        fn get_default_tol(&self) -> Self::Elem {
            Self::DEFAULT_TOLERANCE
        }
        fn get_far_pair(
            &self,
            rhs: &Self,
            tolerance: Self::Elem,
        ) -> Option<(Self::Elem, Self::Elem)>;
    }

    impl AssertClose for f32 {
        type Elem = f32;
        const DEFAULT_TOLERANCE: Self::Elem = 1e-6;
        fn get_far_pair(&self, rhs: &Self, tolerance: f32) -> Option<(f32, f32)> {
            if (self - rhs).abs() > tolerance {
                Some((*self, *rhs))
            } else {
                None
            }
        }
    }

    impl AssertClose for f64 {
        type Elem = f64;
        const DEFAULT_TOLERANCE: Self::Elem = 1e-6;
        fn get_far_pair(&self, rhs: &Self, tolerance: f64) -> Option<(f64, f64)> {
            if (self - rhs).abs() > tolerance {
                Some((*self, *rhs))
            } else {
                None
            }
        }
    }

    impl<T: AssertClose> AssertClose for Vec<T> {
        type Elem = T::Elem;
        const DEFAULT_TOLERANCE: Self::Elem = T::DEFAULT_TOLERANCE;
        fn get_far_pair(
            &self,
            rhs: &Self,
            tolerance: Self::Elem,
        ) -> Option<(Self::Elem, Self::Elem)> {
            assert_eq!(self.len(), rhs.len(), "lengths differ");
            for (l, r) in self.iter().zip(rhs.iter()) {
                if let Some(pair) = l.get_far_pair(r, tolerance) {
                    return Some(pair);
                }
            }
            None
        }
    }

    macro_rules! assert_close {
        ($Lhs:expr, $Rhs:expr) => {
            let lhs = $Lhs;
            let tol = AssertClose::get_default_tol(&lhs);
            let far_pair = AssertClose::get_far_pair(&lhs, &$Rhs, tol);
            if let Some((l, r)) = far_pair {
                panic!("lhs != rhs | {l} != {r}");
            }
        };
        ($Lhs:expr, $Rhs:expr, $Tolerance:expr) => {{
            let far_pair = $Lhs.get_far_pair(
                &$Rhs,
                num_traits::FromPrimitive::from_f64($Tolerance).unwrap(),
            );
            if let Some((l, r)) = far_pair {
                panic!("lhs != rhs | {l} != {r}");
            }
        }};
    }

    pub(crate) use assert_close;
}
