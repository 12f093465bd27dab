use super::{concat_shape_along::TryConcatShapeAlong, utilities::AxisLayout};
use crate::{dtypes::Dtype, shapes::*, tensor::*};

mod cpu_kernel;
#[cfg(feature = "cuda")]
mod cuda_kernel;

/// Concatenate tensors along a given axis.
///
/// Every input must have the same rank and agree on every dimension except
/// `ax`. The output holds the inputs one after another along `ax`, in the
/// order they were given.
///
/// Works on arrays, slices, vecs, and pairs of tensors:
/// ```rust
/// # use catsplit_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let a: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0, 3.0, 4.0], [2, 2]);
/// let b: Tensor<f32, _> = dev.tensor_from_vec(vec![5.0, 6.0], [2, 1]);
/// let c = (a.clone(), b.clone()).concat_tensor_along(1);
/// assert_eq!(c.as_vec(), [1.0, 2.0, 5.0, 3.0, 4.0, 6.0]);
///
/// let c = vec![a, b.clone(), b].concat_tensor_along(-1);
/// assert_eq!(c.shape().dims(), &[2, 4]);
/// ```
///
/// Mismatched shapes are an error, never a partial result:
/// ```rust
/// # use catsplit_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let a: Tensor<f32, _> = dev.zeros_like(&Shape::from([2, 3]));
/// let b: Tensor<f32, _> = dev.zeros_like(&Shape::from([3, 3]));
/// assert!(matches!(
///     [a, b].try_concat_tensor_along(1),
///     Err(Error::ShapeMismatch { .. })
/// ));
/// ```
pub trait TryConcatTensorAlong: Sized {
    type Output;

    /// Concatenates self along the given axis.
    fn concat_tensor_along(self, ax: isize) -> Self::Output {
        self.try_concat_tensor_along(ax).unwrap()
    }
    /// Fallibly concatenates self along the given axis.
    fn try_concat_tensor_along(self, ax: isize) -> Result<Self::Output, Error>;
}

/// The copy at the heart of concatenation, implemented once per device.
///
/// Both directions are driven by an [AxisLayout] computed from the shapes,
/// so the Cpu and Cuda versions share their indexing.
pub trait ConcatAlongKernel<E: Dtype>: Storage<E> {
    /// Copies each input into its segment of `out`, which holds
    /// `layout.outer * layout.row_len()` elements.
    fn forward(
        &self,
        layout: &AxisLayout,
        inputs: &[&Tensor<E, Self>],
        out: &mut Self::Vec,
    ) -> Result<(), Error>;

    /// Adds each segment of `grad_out` into the matching buffer in `grads`.
    fn backward(
        &self,
        layout: &AxisLayout,
        grads: &mut [&mut Self::Vec],
        grad_out: &Self::Vec,
    ) -> Result<(), Error>;
}

pub(crate) fn try_concat_tensors<E: Dtype, D: ConcatAlongKernel<E>>(
    inputs: &[&Tensor<E, D>],
    ax: isize,
) -> Result<Tensor<E, D>, Error> {
    let out_shape = inputs.try_concat_shape_along(ax)?;
    let ax = out_shape.try_axis(ax)?;
    let layout = AxisLayout::new(&out_shape, ax, inputs.iter().map(|t| t.shape()[ax]));
    log::trace!(
        "concat {} tensors along axis {ax} into {out_shape:?}",
        inputs.len()
    );

    let device = inputs[0].device.clone();
    let mut data = device.try_alloc_len(out_shape.num_elements())?;
    device.forward(&layout, inputs, &mut data)?;
    Ok(Tensor::from_parts(device, out_shape, data))
}

impl<'a, 'b, E: Dtype, D: ConcatAlongKernel<E>> TryConcatTensorAlong for &'a [&'b Tensor<E, D>] {
    type Output = Tensor<E, D>;
    fn try_concat_tensor_along(self, ax: isize) -> Result<Self::Output, Error> {
        try_concat_tensors(self, ax)
    }
}

impl<'a, E: Dtype, D: ConcatAlongKernel<E>> TryConcatTensorAlong for &'a [Tensor<E, D>] {
    type Output = Tensor<E, D>;
    fn try_concat_tensor_along(self, ax: isize) -> Result<Self::Output, Error> {
        let inputs: Vec<&Tensor<E, D>> = self.iter().collect();
        try_concat_tensors(&inputs, ax)
    }
}

impl<E: Dtype, D: ConcatAlongKernel<E>> TryConcatTensorAlong for Vec<Tensor<E, D>> {
    type Output = Tensor<E, D>;
    fn try_concat_tensor_along(self, ax: isize) -> Result<Self::Output, Error> {
        self.as_slice().try_concat_tensor_along(ax)
    }
}

impl<E: Dtype, D: ConcatAlongKernel<E>, const N: usize> TryConcatTensorAlong
    for [Tensor<E, D>; N]
{
    type Output = Tensor<E, D>;
    fn try_concat_tensor_along(self, ax: isize) -> Result<Self::Output, Error> {
        self.as_slice().try_concat_tensor_along(ax)
    }
}

impl<'a, E: Dtype, D: ConcatAlongKernel<E>, const N: usize> TryConcatTensorAlong
    for [&'a Tensor<E, D>; N]
{
    type Output = Tensor<E, D>;
    fn try_concat_tensor_along(self, ax: isize) -> Result<Self::Output, Error> {
        try_concat_tensors(&self, ax)
    }
}

impl<E: Dtype, D: ConcatAlongKernel<E>> TryConcatTensorAlong for (Tensor<E, D>, Tensor<E, D>) {
    type Output = Tensor<E, D>;
    fn try_concat_tensor_along(self, ax: isize) -> Result<Self::Output, Error> {
        let (lhs, rhs) = self;
        try_concat_tensors(&[&lhs, &rhs], ax)
    }
}
