use crate::{dtypes::Unit, tensor::storage_traits::Storage, tensor::Error, tensor::Tensor};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    sync::{Arc, Mutex},
    vec::Vec,
};

/// A device that stores data on the heap.
///
/// The [Default] impl seeds the rng with 0.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// A thread safe random number generator.
    pub(crate) rng: Arc<Mutex<StdRng>>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::seed_from_u64(0)
    }
}

impl Cpu {
    /// Constructs rng with the given seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl<E: Unit> Storage<E> for Cpu {
    type Vec = Vec<E>;

    fn try_alloc_len(&self, len: usize) -> Result<Self::Vec, Error> {
        let mut data = Vec::new();
        data.try_reserve(len).map_err(|_| Error::OutOfMemory)?;
        data.resize(len, Default::default());
        Ok(data)
    }

    fn tensor_to_vec(&self, tensor: &Tensor<E, Self>) -> Vec<E> {
        tensor.data.as_ref().clone()
    }

    fn len(&self, v: &Self::Vec) -> usize {
        v.len()
    }
}
