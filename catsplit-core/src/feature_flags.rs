//! Information about the available feature flags
//!
//! # "std"
//!
//! **Enabled by default**
//!
//! Turns on the `std` features of `num-traits`, `rand` and `rand_distr`, and
//! implements [std::error::Error] for [crate::tensor::Error].
//!
//! # "parallel"
//!
//! Splits the [crate::tensor::Cpu] concat and split kernels across threads
//! with `rayon`. Rows of the output are filled in parallel on the way
//! forward, and gradient segments are accumulated in parallel on the way
//! back. Results are identical to the single threaded kernels.
//!
//! Example:
//! ```toml
//! catsplit = { version = "...", features = ["parallel"] }
//! ```
//!
//! # "cuda"
//!
//! Enables the [crate::tensor::Cuda] device, backed by `cudarc`. The kernels
//! are compiled with NVRTC the first time a dtype is used on a device.
//!
//! Example:
//! ```toml
//! catsplit = { version = "...", features = ["cuda"] }
//! ```
//!
//! # "f16"
//!
//! Adds `half::f16` as a [crate::dtypes::Dtype]. On the cuda device this
//! needs NVRTC to find `cuda_fp16.h`.
//!
//! # "test-f64"
//!
//! Runs the unit tests with `f64` instead of `f32`.

#[cfg(not(feature = "cuda"))]
/// The device tests and benchmarks run on. Configure with crate features.
pub const DEFAULT_DEVICE: &str = "cpu";

#[cfg(feature = "cuda")]
/// The device tests and benchmarks run on. Configure with crate features.
pub const DEFAULT_DEVICE: &str = "cuda";

#[cfg(not(feature = "parallel"))]
/// Whether the cpu kernels use multiple threads. Configure with crate features.
pub const CPU_THREADING: &str = "single";

#[cfg(feature = "parallel")]
/// Whether the cpu kernels use multiple threads. Configure with crate features.
pub const CPU_THREADING: &str = "rayon";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::TestDevice;

    #[test]
    fn test_default_device_is_the_test_device() {
        let name = std::any::type_name::<TestDevice>().to_lowercase();
        assert!(name.ends_with(DEFAULT_DEVICE), "{name}");
    }

    #[test]
    fn test_cpu_threading() {
        let expected = if cfg!(feature = "parallel") {
            "rayon"
        } else {
            "single"
        };
        assert_eq!(CPU_THREADING, expected);
    }
}
