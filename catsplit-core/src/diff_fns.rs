//! Differentiable operations an autodiff host can place in its graph.
//!
//! The host owns the graph and the tape. It calls
//! [DifferentiableOp::try_forward] while evaluating a node, keeps
//! [GhostTensor]s of the inputs around, and later calls
//! [DifferentiableOp::try_backward] (or
//! [DifferentiableOp::try_accumulate_grads] when it already holds gradient
//! buffers) with the gradient of the node's output.
//!
//! ```rust
//! # use catsplit_core::prelude::*;
//! # let dev: Cpu = Default::default();
//! let x: Tensor<f32, _> = dev.sample_normal_like(&Shape::from([4, 2, 5]));
//! let h: Tensor<f32, _> = dev.sample_normal_like(&Shape::from([4, 3, 5]));
//!
//! let op = ConcatAlong::default(); // axis 1
//! let y = op.try_forward(&[&x, &h]).unwrap();
//! assert_eq!(y.shape().dims(), &[4, 5, 5]);
//!
//! let grad_y: Tensor<f32, _> = dev.sample_normal_like(&y);
//! let grads = op.try_backward(&[x.ghost(), h.ghost()], &grad_y).unwrap();
//! assert_eq!(grads[0].shape(), x.shape());
//! assert_eq!(grads[1].shape(), h.shape());
//! ```

use crate::{
    dtypes::Dtype,
    shapes::*,
    tensor::*,
    tensor_ops::{
        concat_tensor_along::try_concat_tensors, AxisLayout, ConcatAlongKernel,
        TryConcatShapeAlong, TrySplitTensorAlong,
    },
};

/// An operation with a forward pass and the matching gradient pass.
///
/// Every call is independent: nothing computed in `try_forward` is kept for
/// `try_backward`, which gets everything it needs from its arguments.
pub trait DifferentiableOp<E: Dtype, D: Storage<E>> {
    /// Evaluates the op.
    fn try_forward(&self, inputs: &[&Tensor<E, D>]) -> Result<Tensor<E, D>, Error>;

    /// Returns one fresh gradient per input, shaped like that input.
    fn try_backward(
        &self,
        inputs: &[GhostTensor<E, D>],
        grad_out: &Tensor<E, D>,
    ) -> Result<Vec<Tensor<E, D>>, Error>;

    /// Adds the gradient of each input into `grads`, which line up with
    /// `inputs` and hold as many elements as the input they belong to.
    fn try_accumulate_grads(
        &self,
        inputs: &[GhostTensor<E, D>],
        grads: &mut [&mut D::Vec],
        grad_out: &Tensor<E, D>,
    ) -> Result<(), Error>;
}

/// Concatenation along [ConcatAlong::axis] as a graph node.
///
/// Forward joins the inputs in order, backward splits the output gradient
/// at the input boundaries.
///
/// The [Default] axis is `1`, the channel dim of `(batch, channel, ...)`
/// tensors. Nothing else about the op depends on that layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcatAlong {
    pub axis: isize,
}

impl Default for ConcatAlong {
    fn default() -> Self {
        Self { axis: 1 }
    }
}

impl ConcatAlong {
    pub fn new(axis: isize) -> Self {
        Self { axis }
    }

    /// Checks `grad_out` has the shape `forward` would have produced for
    /// `inputs`, and returns the resolved axis.
    fn check_grad_shape<E, D: Storage<E>>(
        &self,
        inputs: &[GhostTensor<E, D>],
        grad_out: &Tensor<E, D>,
    ) -> Result<usize, Error> {
        let out_shape = inputs.try_concat_shape_along(self.axis)?;
        let ax = out_shape.try_axis(self.axis)?;
        if &out_shape != grad_out.shape() {
            return Err(Error::ShapeMismatch {
                axis: ax,
                expected: out_shape,
                found: grad_out.shape().clone(),
            });
        }
        Ok(ax)
    }
}

impl<E: Dtype, D: ConcatAlongKernel<E>> DifferentiableOp<E, D> for ConcatAlong {
    fn try_forward(&self, inputs: &[&Tensor<E, D>]) -> Result<Tensor<E, D>, Error> {
        try_concat_tensors(inputs, self.axis)
    }

    fn try_backward(
        &self,
        inputs: &[GhostTensor<E, D>],
        grad_out: &Tensor<E, D>,
    ) -> Result<Vec<Tensor<E, D>>, Error> {
        let ax = self.check_grad_shape(inputs, grad_out)?;
        let extents: Vec<usize> = inputs.iter().map(|g| g.shape()[ax]).collect();
        grad_out.try_split_tensor_along(self.axis, &extents)
    }

    fn try_accumulate_grads(
        &self,
        inputs: &[GhostTensor<E, D>],
        grads: &mut [&mut D::Vec],
        grad_out: &Tensor<E, D>,
    ) -> Result<(), Error> {
        let ax = self.check_grad_shape(inputs, grad_out)?;
        if grads.len() != inputs.len() {
            return Err(Error::WrongNumElements);
        }
        for (g, inp) in grads.iter().zip(inputs) {
            if grad_out.device.len(g) != inp.len {
                return Err(Error::WrongNumElements);
            }
        }
        let layout = AxisLayout::new(grad_out.shape(), ax, inputs.iter().map(|g| g.shape()[ax]));
        grad_out
            .device
            .backward(&layout, grads, grad_out.data.as_ref())
    }
}
