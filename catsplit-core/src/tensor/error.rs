use crate::shapes::Shape;

/// Represents a number of different errors that can occur from creating tensors
/// or launching tensor operations. This encompasses both Cpu and CUDA errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// An op that joins tensors was given none.
    EmptyInput,
    /// The axis does not index a dimension of a tensor with `num_dims` dims.
    InvalidAxis { axis: isize, num_dims: usize },
    /// Two shapes that had to agree outside of `axis` did not.
    ShapeMismatch {
        axis: usize,
        expected: Shape,
        found: Shape,
    },
    /// Device is out of memory
    OutOfMemory,
    /// Not enough elements were provided when creating a tensor
    WrongNumElements,

    #[cfg(feature = "cuda")]
    CudaDriverError(cudarc::driver::DriverError),
    #[cfg(feature = "cuda")]
    CudaCompileError(cudarc::nvrtc::CompileError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
