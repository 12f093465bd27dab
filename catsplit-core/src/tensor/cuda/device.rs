use crate::dtypes::Unit;
use crate::tensor::cpu::Cpu;
use crate::tensor::{Error, Storage, Tensor};

use cudarc::driver::{CudaDevice, CudaSlice, DeviceSlice, DriverError};
use cudarc::nvrtc::CompileError;

use std::{sync::Arc, vec::Vec};

/// A Cuda device that enables constructing tensors on GPUs
/// & running GPU kernels.
///
/// Kernels are compiled with NVRTC the first time they are used and stay
/// loaded on the underlying [CudaDevice], so every clone of a [Cuda]
/// shares them.
#[derive(Clone, Debug)]
pub struct Cuda {
    pub(crate) cpu: Cpu,
    pub(crate) dev: Arc<CudaDevice>,
}

impl From<DriverError> for Error {
    fn from(value: DriverError) -> Self {
        Self::CudaDriverError(value)
    }
}

impl From<CompileError> for Error {
    fn from(value: CompileError) -> Self {
        Self::CudaCompileError(value)
    }
}

impl Default for Cuda {
    fn default() -> Self {
        Self::seed_from_u64(0)
    }
}

impl Cuda {
    /// Constructs rng with the given seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::try_seed_from_u64(seed).unwrap()
    }

    /// Constructs rng with the given seed.
    pub fn try_seed_from_u64(seed: u64) -> Result<Self, Error> {
        Self::try_build(0, seed)
    }

    /// Constructs with the given seed & device ordinal
    pub fn try_build(ordinal: usize, seed: u64) -> Result<Self, Error> {
        let cpu = Cpu::seed_from_u64(seed);
        let dev = CudaDevice::new(ordinal)?;
        Ok(Self { cpu, dev })
    }
}

impl<E: Unit> Storage<E> for Cuda {
    type Vec = CudaSlice<E>;

    fn try_alloc_len(&self, len: usize) -> Result<Self::Vec, Error> {
        Ok(self.dev.alloc_zeros::<E>(len)?)
    }

    fn tensor_to_vec(&self, tensor: &Tensor<E, Self>) -> Vec<E> {
        self.dev.dtoh_sync_copy(tensor.data.as_ref()).unwrap()
    }

    fn len(&self, v: &Self::Vec) -> usize {
        v.len()
    }
}
