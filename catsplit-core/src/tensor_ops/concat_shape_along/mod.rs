use crate::{shapes::*, tensor::Error};

/// Concatenate shapes along a given axis.
///
/// Every shape must have the same rank and agree on every dimension
/// except `ax`. The result has the sum of the `ax` dims.
///
/// ```rust
/// # use catsplit_core::prelude::*;
/// let shapes = [Shape::from([2, 3]), Shape::from([2, 5])];
/// assert_eq!(shapes.concat_shape_along(1), Shape::from([2, 8]));
/// assert_eq!(shapes[..1].concat_shape_along(-1), Shape::from([2, 3]));
/// ```
pub trait TryConcatShapeAlong {
    /// Concatenates self along the given axis.
    fn concat_shape_along(&self, ax: isize) -> Shape {
        self.try_concat_shape_along(ax).unwrap()
    }
    /// Fallibly concatenates self along the given axis.
    fn try_concat_shape_along(&self, ax: isize) -> Result<Shape, Error>;
}

impl<S: HasShape> TryConcatShapeAlong for [S] {
    fn try_concat_shape_along(&self, ax: isize) -> Result<Shape, Error> {
        let first = self.first().ok_or(Error::EmptyInput)?.shape();
        let ax = first.try_axis(ax)?;

        let mut extent: usize = 0;
        for s in self.iter().map(|s| s.shape()) {
            let agrees = s.num_dims() == first.num_dims()
                && s.dims()
                    .iter()
                    .zip(first.dims())
                    .enumerate()
                    .all(|(i, (a, b))| i == ax || a == b);
            // the joined extent has to fit in usize too
            match agrees.then(|| extent.checked_add(s[ax])).flatten() {
                Some(e) => extent = e,
                None => {
                    return Err(Error::ShapeMismatch {
                        axis: ax,
                        expected: first.clone(),
                        found: s.clone(),
                    })
                }
            }
        }

        Ok(first.with_dim(ax, extent))
    }
}
