use super::{storage_traits::Storage, HasUniqueId, Tensor, UniqueId};
use crate::shapes::{HasShape, Shape};

/// Holds all the information a [Tensor] does, except without
/// holding a reference to the data storage.
///
/// The backward pass of concatenation only needs the shapes of its
/// inputs, so a host can drop the input data once the forward pass is
/// done and keep these around instead.
pub struct GhostTensor<E, D: Storage<E>> {
    pub(crate) id: UniqueId,
    pub(crate) len: usize,
    pub(crate) shape: Shape,
    pub(crate) dev: D,
    marker: std::marker::PhantomData<E>,
}

impl<E, D: Storage<E>> Tensor<E, D> {
    /// Creates a ghost tensor that doesn't hold a reference
    /// to the tensor's data.
    pub fn ghost(&self) -> GhostTensor<E, D> {
        GhostTensor {
            id: self.id,
            len: self.device.len(self.data.as_ref()),
            shape: self.shape.clone(),
            dev: self.device.clone(),
            marker: std::marker::PhantomData,
        }
    }
}

impl<E, D: Storage<E>> GhostTensor<E, D> {
    pub fn device(&self) -> &D {
        &self.dev
    }

    /// Number of elements the original tensor stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<E, D: Storage<E>> Clone for GhostTensor<E, D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            len: self.len,
            shape: self.shape.clone(),
            dev: self.dev.clone(),
            marker: self.marker,
        }
    }
}

impl<E, D: Storage<E>> std::fmt::Debug for GhostTensor<E, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhostTensor")
            .field("id", &self.id)
            .field("len", &self.len)
            .field("shape", &self.shape)
            .finish()
    }
}

impl<E, D: Storage<E>> HasShape for GhostTensor<E, D> {
    fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl<E, D: Storage<E>> HasUniqueId for GhostTensor<E, D> {
    fn id(&self) -> &UniqueId {
        &self.id
    }
}

impl<E, D: Storage<E>> super::storage_traits::AllocGrad for GhostTensor<E, D> {
    type Gradient = D::Vec;
    fn try_alloc_grad(&self) -> Result<Self::Gradient, super::Error> {
        self.dev.try_alloc_len(self.len)
    }
}
