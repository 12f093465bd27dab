use super::{
    concat_tensor_along::ConcatAlongKernel, split_shape_along::TrySplitShapeAlong,
    utilities::AxisLayout,
};
use crate::{dtypes::Dtype, shapes::*, tensor::*};

/// Split a tensor into pieces along a given axis.
///
/// This is the reverse of [super::TryConcatTensorAlong::concat_tensor_along],
/// and is how the gradient of a concatenation is routed back to its inputs:
/// piece `i` has extent `extents[i]` along `ax`, taken from the cumulative
/// offset of the extents before it.
///
/// ```rust
/// # use catsplit_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let ab: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], [2, 3]);
/// let parts = ab.split_tensor_along(1, &[1, 2]);
/// assert_eq!(parts[0].as_vec(), [1.0, 4.0]);
/// assert_eq!(parts[1].as_vec(), [2.0, 3.0, 5.0, 6.0]);
/// ```
///
/// The extents have to add up to the size of the axis:
/// ```rust
/// # use catsplit_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let ab: Tensor<f32, _> = dev.zeros_like(&Shape::from([2, 3]));
/// assert!(matches!(
///     ab.try_split_tensor_along(1, &[1, 1]),
///     Err(Error::ShapeMismatch { .. })
/// ));
/// ```
pub trait TrySplitTensorAlong {
    type Output;

    /// Splits self along the given axis.
    fn split_tensor_along(&self, ax: isize, extents: &[usize]) -> Self::Output {
        self.try_split_tensor_along(ax, extents).unwrap()
    }
    /// Fallibly splits self along the given axis.
    fn try_split_tensor_along(&self, ax: isize, extents: &[usize]) -> Result<Self::Output, Error>;
}

impl<E: Dtype, D: ConcatAlongKernel<E>> TrySplitTensorAlong for Tensor<E, D> {
    type Output = Vec<Tensor<E, D>>;

    fn try_split_tensor_along(&self, ax: isize, extents: &[usize]) -> Result<Self::Output, Error> {
        let shapes = self.shape().try_split_shape_along(ax, extents)?;
        let ax = self.shape().try_axis(ax)?;
        let layout = AxisLayout::new(self.shape(), ax, extents.iter().copied());
        log::trace!(
            "split {:?} along axis {ax} into {} pieces",
            self.shape(),
            extents.len()
        );

        let mut pieces = shapes
            .iter()
            .map(|s| self.device.try_alloc_len(s.num_elements()))
            .collect::<Result<Vec<_>, _>>()?;
        {
            let mut grads: Vec<&mut D::Vec> = pieces.iter_mut().collect();
            self.device.backward(&layout, &mut grads, self.data.as_ref())?;
        }

        Ok(shapes
            .into_iter()
            .zip(pieces)
            .map(|(shape, data)| Tensor::from_parts(self.device.clone(), shape, data))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tensor_ops::*, tests::*};

    #[test]
    fn test_split_ax_0() {
        let dev: TestDevice = Default::default();
        let ab = arange(&dev, [5, 2], 0);
        let parts = ab.split_tensor_along(0, &[2, 3]);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].shape().dims(), &[2, 2]);
        assert_eq!(parts[1].shape().dims(), &[3, 2]);
        assert_eq!(parts[0].as_vec(), [0.0, 1.0, 2.0, 3.0]);
        assert_eq!(parts[1].as_vec(), [4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_split_ax_1() {
        let dev: TestDevice = Default::default();
        let ab = arange(&dev, [2, 5, 2], 0);
        let parts = ab.split_tensor_along(1, &[2, 3]);
        assert_eq!(parts[0].shape().dims(), &[2, 2, 2]);
        assert_eq!(parts[1].shape().dims(), &[2, 3, 2]);
        assert_eq!(
            parts[0].as_vec(),
            [0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 13.0]
        );
        assert_eq!(
            parts[1].as_vec(),
            [4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0]
        );
    }

    #[test]
    fn test_split_last_axis_negative() {
        let dev: TestDevice = Default::default();
        let ab = arange(&dev, [2, 3], 0);
        let parts = ab.split_tensor_along(-1, &[2, 0, 1]);
        assert_eq!(parts[0].as_vec(), [0.0, 1.0, 3.0, 4.0]);
        assert_eq!(parts[1].shape().dims(), &[2, 0]);
        assert!(parts[1].as_vec().is_empty());
        assert_eq!(parts[2].as_vec(), [2.0, 5.0]);
    }

    #[test]
    fn test_concat_then_split_recovers_inputs() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype, _> = dev.sample_normal_like(&Shape::from([2, 3]));
        let b: Tensor<TestDtype, _> = dev.sample_normal_like(&Shape::from([2, 5]));
        let ab = [&a, &b].concat_tensor_along(1);
        assert_eq!(ab.shape().dims(), &[2, 8]);

        let parts = ab.split_tensor_along(1, &[3, 5]);
        assert_eq!(parts[0].shape().dims(), &[2, 3]);
        assert_eq!(parts[1].shape().dims(), &[2, 5]);
        assert_eq!(parts[0].as_vec(), a.as_vec());
        assert_eq!(parts[1].as_vec(), b.as_vec());
    }

    #[test]
    fn test_split_then_concat_recovers_tensor() {
        let dev: TestDevice = Default::default();
        let ab: Tensor<TestDtype, _> = dev.sample_normal_like(&Shape::from([3, 4, 6]));
        for ax in 0..3 {
            let n = ab.shape()[ax as usize];
            let parts = ab.split_tensor_along(ax, &[1, n - 1]);
            let joined = parts.concat_tensor_along(ax);
            assert_eq!(joined.shape(), ab.shape());
            assert_eq!(joined.as_vec(), ab.as_vec());
        }
    }

    #[test]
    fn test_split_errors() {
        let dev: TestDevice = Default::default();
        let ab: Tensor<TestDtype, _> = dev.zeros_like(&Shape::from([2, 8]));
        assert!(matches!(
            ab.try_split_tensor_along(1, &[3, 4]),
            Err(Error::ShapeMismatch { axis: 1, .. })
        ));
        assert!(matches!(
            ab.try_split_tensor_along(2, &[8]),
            Err(Error::InvalidAxis { .. })
        ));
        assert!(matches!(
            ab.try_split_tensor_along(0, &[]),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_split_extents_past_usize_max() {
        let dev: TestDevice = Default::default();
        let ab = arange(&dev, [1, 2], 0);
        assert!(matches!(
            ab.try_split_tensor_along(0, &[usize::MAX, 2]),
            Err(Error::ShapeMismatch { axis: 0, .. })
        ));
        assert!(matches!(
            ab.try_split_tensor_along(-1, &[1, usize::MAX]),
            Err(Error::ShapeMismatch { axis: 1, .. })
        ));
    }
}
