use crate::{shapes::*, tensor::Error};

/// Split a shape into pieces along a given axis.
///
/// This is the reverse of [super::TryConcatShapeAlong::concat_shape_along].
///
/// ```rust
/// # use catsplit_core::prelude::*;
/// let parts = Shape::from([2, 8]).split_shape_along(1, &[3, 5]);
/// assert_eq!(parts, [Shape::from([2, 3]), Shape::from([2, 5])]);
/// ```
pub trait TrySplitShapeAlong {
    /// Splits self along the given axis.
    fn split_shape_along(&self, ax: isize, extents: &[usize]) -> Vec<Shape> {
        self.try_split_shape_along(ax, extents).unwrap()
    }
    /// Fallibly splits self along the given axis.
    fn try_split_shape_along(&self, ax: isize, extents: &[usize]) -> Result<Vec<Shape>, Error>;
}

impl TrySplitShapeAlong for Shape {
    fn try_split_shape_along(&self, ax: isize, extents: &[usize]) -> Result<Vec<Shape>, Error> {
        if extents.is_empty() {
            return Err(Error::EmptyInput);
        }
        let ax = self.try_axis(ax)?;
        let total = extents
            .iter()
            .try_fold(0usize, |acc, &e| acc.checked_add(e));
        match total {
            Some(total) if total == self[ax] => {}
            // past usize::MAX is reported saturated
            _ => {
                return Err(Error::ShapeMismatch {
                    axis: ax,
                    expected: self.clone(),
                    found: self.with_dim(ax, total.unwrap_or(usize::MAX)),
                })
            }
        }
        Ok(extents.iter().map(|&e| self.with_dim(ax, e)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_shape() {
        let s = Shape::from([2, 8]);
        assert_eq!(
            s.split_shape_along(1, &[3, 5]),
            [Shape::from([2, 3]), Shape::from([2, 5])]
        );
        assert_eq!(
            s.split_shape_along(-2, &[1, 0, 1]),
            [Shape::from([1, 8]), Shape::from([0, 8]), Shape::from([1, 8])]
        );
        assert_eq!(s.split_shape_along(0, &[2]), [s.clone()]);
    }

    #[test]
    fn test_split_shape_sum_mismatch() {
        let s = Shape::from([2, 8]);
        match s.try_split_shape_along(1, &[3, 4]) {
            Err(Error::ShapeMismatch {
                axis,
                expected,
                found,
            }) => {
                assert_eq!(axis, 1);
                assert_eq!(expected, s);
                assert_eq!(found, Shape::from([2, 7]));
            }
            r => panic!("unexpected {r:?}"),
        }
    }

    #[test]
    fn test_split_shape_extents_overflow() {
        let s = Shape::from([1, 2]);
        match s.try_split_shape_along(0, &[usize::MAX, 2]) {
            Err(Error::ShapeMismatch {
                axis,
                expected,
                found,
            }) => {
                assert_eq!(axis, 0);
                assert_eq!(expected, s);
                assert_eq!(found, Shape::from([usize::MAX, 2]));
            }
            r => panic!("unexpected {r:?}"),
        }
        assert!(matches!(
            s.try_split_shape_along(1, &[usize::MAX, usize::MAX, 4]),
            Err(Error::ShapeMismatch { axis: 1, .. })
        ));

        // a dim of usize::MAX is not matched by an overflowing sum
        let wide = Shape::from([usize::MAX, 0]);
        assert!(matches!(
            wide.try_split_shape_along(0, &[usize::MAX, 2]),
            Err(Error::ShapeMismatch { axis: 0, .. })
        ));
        assert_eq!(
            wide.split_shape_along(0, &[usize::MAX - 1, 1]),
            [Shape::from([usize::MAX - 1, 0]), Shape::from([1, 0])]
        );
    }

    #[test]
    fn test_split_shape_errors() {
        let s = Shape::from([2, 8]);
        assert!(matches!(
            s.try_split_shape_along(1, &[]),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            s.try_split_shape_along(2, &[8]),
            Err(Error::InvalidAxis { .. })
        ));
    }
}
