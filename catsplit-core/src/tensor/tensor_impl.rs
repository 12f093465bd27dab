use super::storage_traits::Storage;
use crate::shapes::{HasShape, Shape};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// Identifies a tensor (and its [super::GhostTensor]s), so a host can key
/// gradients by the tensor they belong to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct UniqueId(pub(crate) usize);

pub(crate) fn unique_id() -> UniqueId {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    UniqueId(COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Something that has a [UniqueId]
pub trait HasUniqueId {
    fn id(&self) -> &UniqueId;
}

/// The single tensor struct that stores nd arrays.
///
/// See module level documentation on how to create and use tensors.
///
/// Generics:
/// 1. [crate::dtypes::Dtype] - the type of the datas stored in the array
/// 2. [Storage] - the device the array is stored on
///
/// Examples:
/// ```rust
/// # use catsplit_core::prelude::*;
/// // A 2d tensor with f32 elements, stored on the Cpu
/// let dev: Cpu = Default::default();
/// let a: Tensor<f32, Cpu> = dev.tensor_from_vec(vec![1.0, 2.0, 3.0, 4.0], [2, 2]);
/// assert_eq!(a.as_vec(), [1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug)]
pub struct Tensor<E, D: Storage<E>> {
    pub(crate) id: UniqueId,
    pub(crate) data: Arc<D::Vec>,
    pub(crate) shape: Shape,
    pub(crate) device: D,
}

impl<E, D: Storage<E>> Clone for Tensor<E, D> {
    /// Shares the underlying buffer and keeps the id.
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            data: self.data.clone(),
            shape: self.shape.clone(),
            device: self.device.clone(),
        }
    }
}

impl<E, D: Storage<E>> Tensor<E, D> {
    pub(crate) fn from_parts(device: D, shape: Shape, data: D::Vec) -> Self {
        debug_assert_eq!(device.len(&data), shape.num_elements());
        Self {
            id: unique_id(),
            data: Arc::new(data),
            shape,
            device,
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Copies the elements out into a [Vec] in row-major order.
    pub fn as_vec(&self) -> Vec<E> {
        self.device.tensor_to_vec(self)
    }
}

impl<E, D: Storage<E>> HasShape for Tensor<E, D> {
    fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl<E, D: Storage<E>> HasUniqueId for Tensor<E, D> {
    fn id(&self) -> &UniqueId {
        &self.id
    }
}
