//! Shapes known at run time, and the axis bookkeeping built on them.
//!
//! A [Shape] is an ordered list of dimension sizes. Every tensor is stored
//! densely in row-major order, so the shape alone determines its
//! [Shape::strides].
//!
//! ```rust
//! # use catsplit_core::prelude::*;
//! let s = Shape::from([2, 3, 4]);
//! assert_eq!(s.num_dims(), 3);
//! assert_eq!(s.num_elements(), 24);
//! assert_eq!(s.strides(), vec![12, 4, 1]);
//! ```
//!
//! Axes are `isize` so they can count from the back like numpy:
//! ```rust
//! # use catsplit_core::prelude::*;
//! let s = Shape::from([2, 3, 4]);
//! assert_eq!(s.try_axis(-1).unwrap(), 2);
//! assert!(s.try_axis(3).is_err());
//! ```

use crate::tensor::Error;

/// The dimension sizes of a dense nd array.
///
/// A shape with no dims is a scalar and holds one element. A shape with
/// a zero-sized dim holds no elements.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// The rank 0 shape.
    pub fn scalar() -> Self {
        Self::default()
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    #[inline]
    pub fn num_dims(&self) -> usize {
        self.dims.len()
    }

    #[inline]
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// Row-major strides.
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1; self.dims.len()];
        for i in (0..self.dims.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * self.dims[i + 1];
        }
        strides
    }

    /// Resolves `ax` against this shape's rank. Negative axes count from
    /// the last dimension, so the valid range is `-num_dims..num_dims`.
    pub fn try_axis(&self, ax: isize) -> Result<usize, Error> {
        let num_dims = self.num_dims();
        let resolved = if ax < 0 {
            ax.checked_add(num_dims as isize)
        } else {
            Some(ax)
        };
        match resolved {
            Some(i) if i >= 0 && (i as usize) < num_dims => Ok(i as usize),
            _ => Err(Error::InvalidAxis { axis: ax, num_dims }),
        }
    }

    /// Product of the dims before `ax`.
    pub fn outer_size(&self, ax: usize) -> usize {
        self.dims[..ax].iter().product()
    }

    /// Product of the dims after `ax`.
    pub fn inner_size(&self, ax: usize) -> usize {
        self.dims[ax + 1..].iter().product()
    }

    /// A copy of this shape with dim `ax` replaced by `size`.
    pub fn with_dim(&self, ax: usize, size: usize) -> Self {
        let mut dims = self.dims.clone();
        dims[ax] = size;
        Self { dims }
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{d}")?;
        }
        if self.dims.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

impl std::ops::Index<usize> for Shape {
    type Output = usize;
    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.dims[index]
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self { dims }
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self {
            dims: dims.to_vec(),
        }
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self {
            dims: dims.to_vec(),
        }
    }
}

/// Represents something that has a [Shape].
pub trait HasShape {
    fn shape(&self) -> &Shape;
}

impl HasShape for Shape {
    fn shape(&self) -> &Shape {
        self
    }
}

impl<T: HasShape + ?Sized> HasShape for &T {
    fn shape(&self) -> &Shape {
        (**self).shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides() {
        assert_eq!(Shape::scalar().strides(), Vec::<usize>::new());
        assert_eq!(Shape::from([5]).strides(), vec![1]);
        assert_eq!(Shape::from([2, 3, 4]).strides(), vec![12, 4, 1]);
        assert_eq!(Shape::from([2, 0, 4]).strides(), vec![0, 4, 1]);
    }

    #[test]
    fn test_num_elements() {
        assert_eq!(Shape::scalar().num_elements(), 1);
        assert_eq!(Shape::from([2, 3]).num_elements(), 6);
        assert_eq!(Shape::from([2, 0, 3]).num_elements(), 0);
    }

    #[test]
    fn test_try_axis() {
        let s = Shape::from([2, 3, 4]);
        assert_eq!(s.try_axis(0).unwrap(), 0);
        assert_eq!(s.try_axis(2).unwrap(), 2);
        assert_eq!(s.try_axis(-1).unwrap(), 2);
        assert_eq!(s.try_axis(-3).unwrap(), 0);
        assert!(matches!(
            s.try_axis(3),
            Err(Error::InvalidAxis {
                axis: 3,
                num_dims: 3
            })
        ));
        assert!(matches!(
            s.try_axis(-4),
            Err(Error::InvalidAxis { axis: -4, .. })
        ));
        assert!(Shape::scalar().try_axis(0).is_err());
        assert!(s.try_axis(isize::MIN).is_err());
    }

    #[test]
    fn test_outer_inner() {
        let s = Shape::from([2, 3, 4, 5]);
        assert_eq!(s.outer_size(0), 1);
        assert_eq!(s.inner_size(0), 60);
        assert_eq!(s.outer_size(2), 6);
        assert_eq!(s.inner_size(2), 5);
        assert_eq!(s.inner_size(3), 1);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Shape::scalar()), "()");
        assert_eq!(format!("{:?}", Shape::from([3])), "(3,)");
        assert_eq!(format!("{:?}", Shape::from([2, 8])), "(2, 8)");
    }
}
