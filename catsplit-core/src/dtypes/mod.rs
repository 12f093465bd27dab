//! Module for data type related traits. Contains things like [Unit] and [Dtype].
//!
//! When the `f16` feature is enabled, this exports the [f16] type.

#[cfg(feature = "f16")]
pub use half::f16;

/// Represents a type where all 0 bits is a valid pattern.
#[cfg(not(feature = "cuda"))]
pub trait SafeZeros {}

/// Represents a type where all 0 bits is a valid pattern.
#[cfg(feature = "cuda")]
pub trait SafeZeros: cudarc::driver::ValidAsZeroBits + cudarc::driver::DeviceRepr {}

/// Represents a unit type, but no arithmetic.
pub trait Unit:
    'static
    + Copy
    + Clone
    + Default
    + std::fmt::Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + std::marker::Unpin
    + SafeZeros
{
}

macro_rules! unit {
    ($($type:ty),*) => {
        $(
            impl SafeZeros for $type {}
            impl Unit for $type {}
        )*
    };
}

unit!(f32, f64, usize, isize, u8, i8, u16, i16, u32, i32, u64, i64);
#[cfg(feature = "f16")]
unit!(f16);

/// Represents a data type or element of an array that gradients can be
/// accumulated into. Concatenation itself only moves values around, but
/// the backward pass sums into existing gradient buffers.
pub trait Dtype:
    Unit + std::ops::Add<Self, Output = Self> + std::ops::AddAssign + num_traits::FromPrimitive
{
}
impl Dtype for f32 {}
impl Dtype for f64 {}
impl Dtype for i8 {}
impl Dtype for i16 {}
impl Dtype for i32 {}
impl Dtype for i64 {}
impl Dtype for isize {}
impl Dtype for u8 {}
impl Dtype for u16 {}
impl Dtype for u32 {}
impl Dtype for u64 {}
impl Dtype for usize {}
#[cfg(feature = "f16")]
impl Dtype for f16 {}
