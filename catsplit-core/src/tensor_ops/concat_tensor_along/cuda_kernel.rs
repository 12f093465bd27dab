use crate::{
    dtypes::Dtype,
    tensor::{cuda::launch_cfg, Cuda, Error, Tensor},
    tensor_ops::utilities::AxisLayout,
};
use cudarc::{
    driver::{CudaSlice, LaunchAsync},
    nvrtc::compile_ptx,
    types::CudaTypeName,
};

const FWD: &str = "concat_fwd";
const BWD: &str = "concat_bwd";

impl Cuda {
    /// Compiles & loads the kernels for `E` unless a previous call already did.
    fn load_concat_module<E: CudaTypeName>(&self) -> Result<String, Error> {
        let module_name = std::format!("concat_along_{}", E::NAME);
        if !self.dev.has_func(&module_name, FWD) {
            log::debug!("compiling cuda module {module_name}");
            let mut src = KERNEL.replace("$Ty", E::NAME);
            if E::NAME == "__half" {
                src.insert_str(0, "#include \"cuda_fp16.h\"\n");
            }
            let ptx = compile_ptx(src)?;
            self.dev.load_ptx(ptx, &module_name, &[FWD, BWD])?;
        }
        Ok(module_name)
    }
}

impl<E: Dtype + CudaTypeName> super::ConcatAlongKernel<E> for Cuda {
    fn forward(
        &self,
        layout: &AxisLayout,
        inputs: &[&Tensor<E, Self>],
        out: &mut CudaSlice<E>,
    ) -> Result<(), Error> {
        let module_name = self.load_concat_module::<E>()?;
        for (seg, inp) in layout.segments.iter().zip(inputs.iter()) {
            let numel = layout.segment_numel(seg);
            if numel == 0 {
                continue;
            }
            let fwd = self.dev.get_func(&module_name, FWD).unwrap();
            let cfg = launch_cfg::<128>(numel);
            let params = (
                numel,
                seg.extent,
                layout.out_extent,
                layout.inner,
                seg.offset,
                inp.data.as_ref(),
                &mut *out,
            );
            unsafe { fwd.launch(cfg, params) }?;
        }
        Ok(())
    }

    fn backward(
        &self,
        layout: &AxisLayout,
        grads: &mut [&mut CudaSlice<E>],
        grad_out: &CudaSlice<E>,
    ) -> Result<(), Error> {
        let module_name = self.load_concat_module::<E>()?;
        for (seg, grad) in layout.segments.iter().zip(grads.iter_mut()) {
            let numel = layout.segment_numel(seg);
            if numel == 0 {
                continue;
            }
            let bwd = self.dev.get_func(&module_name, BWD).unwrap();
            let cfg = launch_cfg::<128>(numel);
            let params = (
                numel,
                seg.extent,
                layout.out_extent,
                layout.inner,
                seg.offset,
                &mut **grad,
                grad_out,
            );
            unsafe { bwd.launch(cfg, params) }?;
        }
        Ok(())
    }
}

const KERNEL: &str = "
// element i of one input is (l, c, r) = (outer, along-axis, inner) and lands
// at (l, c + offset, r) of the joined tensor
__device__ size_t joined_index(
    const size_t i,
    const size_t extent,
    const size_t out_extent,
    const size_t inner,
    const size_t offset
) {
    size_t l = i / (inner * extent);
    size_t c = i / inner % extent + offset;
    size_t r = i % inner;
    return r + inner * (c + out_extent * l);
}

extern \"C\" __global__ void concat_fwd(
    const size_t numel,
    const size_t extent,
    const size_t out_extent,
    const size_t inner,
    const size_t offset,
    const $Ty *inp,
    $Ty *out
) {
    for (size_t i = blockIdx.x * blockDim.x + threadIdx.x; i < numel; i += blockDim.x * gridDim.x) {
        out[joined_index(i, extent, out_extent, inner, offset)] = inp[i];
    }
}

extern \"C\" __global__ void concat_bwd(
    const size_t numel,
    const size_t extent,
    const size_t out_extent,
    const size_t inner,
    const size_t offset,
    $Ty *grad_inp,
    const $Ty *grad_out
) {
    for (size_t i = blockIdx.x * blockDim.x + threadIdx.x; i < numel; i += blockDim.x * gridDim.x) {
        grad_inp[i] += grad_out[joined_index(i, extent, out_extent, inner, offset)];
    }
}
";
