mod allocate;
mod device;

pub use device::Cuda;

/// Enough blocks to give each of `n` elements a thread. Past `u32::MAX`
/// elements the grid is capped and the kernels' grid-stride loops cover
/// the rest.
pub(crate) fn launch_cfg<const NUM_THREADS: u32>(n: usize) -> cudarc::driver::LaunchConfig {
    let n = u32::try_from(n).unwrap_or(u32::MAX);
    let num_blocks = n.div_ceil(NUM_THREADS);
    cudarc::driver::LaunchConfig {
        grid_dim: (num_blocks, 1, 1),
        block_dim: (NUM_THREADS, 1, 1),
        shared_mem_bytes: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{shapes::*, tensor::*};

    #[test]
    fn test_launch_cfg_covers_all_elements() {
        let cfg = launch_cfg::<128>(300);
        assert_eq!(cfg.grid_dim, (3, 1, 1));
        assert_eq!(cfg.block_dim, (128, 1, 1));
    }

    #[test]
    fn test_launch_cfg_caps_huge_counts() {
        let cfg = launch_cfg::<128>(u32::MAX as usize);
        assert_eq!(cfg.grid_dim, (u32::MAX / 128 + 1, 1, 1));
        let cfg = launch_cfg::<128>(usize::MAX);
        assert_eq!(cfg.grid_dim, (u32::MAX / 128 + 1, 1, 1));
        assert_eq!(launch_cfg::<128>(0).grid_dim, (0, 1, 1));
    }

    #[test]
    fn test_roundtrip_through_device() {
        let dev: Cuda = Default::default();
        let t: Tensor<f32, _> = dev.tensor_from_vec(vec![1.0, 2.0, 3.0, 4.0], [2, 2]);
        assert_eq!(t.as_vec(), [1.0, 2.0, 3.0, 4.0]);
        let z: Tensor<f32, _> = dev.zeros_like(&Shape::from([3]));
        assert_eq!(z.as_vec(), [0.0; 3]);
    }
}
