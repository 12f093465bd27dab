use crate::{
    dtypes::{Dtype, Unit},
    tensor::{Cpu, Error, Tensor},
    tensor_ops::utilities::{AxisLayout, Segment},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl<E: Dtype> super::ConcatAlongKernel<E> for Cpu {
    fn forward(
        &self,
        layout: &AxisLayout,
        inputs: &[&Tensor<E, Self>],
        out: &mut Vec<E>,
    ) -> Result<(), Error> {
        let row_len = layout.row_len();
        if row_len == 0 {
            return Ok(());
        }

        #[cfg(not(feature = "parallel"))]
        out.chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(o, row)| fill_row(layout, inputs, o, row));

        #[cfg(feature = "parallel")]
        out.par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(o, row)| fill_row(layout, inputs, o, row));

        Ok(())
    }

    fn backward(
        &self,
        layout: &AxisLayout,
        grads: &mut [&mut Vec<E>],
        grad_out: &Vec<E>,
    ) -> Result<(), Error> {
        #[cfg(not(feature = "parallel"))]
        layout
            .segments
            .iter()
            .zip(grads.iter_mut())
            .for_each(|(seg, grad)| add_segment(layout, seg, grad.as_mut_slice(), grad_out));

        #[cfg(feature = "parallel")]
        layout
            .segments
            .par_iter()
            .zip(grads.par_iter_mut())
            .for_each(|(seg, grad)| add_segment(layout, seg, grad.as_mut_slice(), grad_out));

        Ok(())
    }
}

/// Writes row `o` of the joined tensor, one contiguous run per input.
fn fill_row<E: Unit>(layout: &AxisLayout, inputs: &[&Tensor<E, Cpu>], o: usize, row: &mut [E]) {
    for (seg, inp) in layout.segments.iter().zip(inputs.iter()) {
        let n = layout.segment_len(seg);
        let start = seg.offset * layout.inner;
        row[start..start + n].copy_from_slice(&inp.data[o * n..(o + 1) * n]);
    }
}

fn add_segment<E: Dtype>(layout: &AxisLayout, seg: &Segment, grad: &mut [E], grad_out: &[E]) {
    let n = layout.segment_len(seg);
    if n == 0 {
        return;
    }
    let row_len = layout.row_len();
    let start = seg.offset * layout.inner;
    for (o, g) in grad.chunks_exact_mut(n).enumerate() {
        let src = &grad_out[o * row_len + start..][..n];
        for (g, &s) in g.iter_mut().zip(src) {
            *g += s;
        }
    }
}
