//! Module for data type related traits. Contains things like [Unit], [Dtype], and [MaxZero].
//!
//! # Vectorized strategies
//!
//! Which element types get a vectorized rectification strategy is decided by
//! their [MaxZero] impl at compile time. Currently only `f32` on `x86_64` with the
//! `simd` feature does; every other combination runs the scalar strategy.

mod max_zero;

pub use max_zero::MaxZero;

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
{
    const ONE: Self;
}

macro_rules! unit {
    ($type:ty, $one:expr) => {
        impl Unit for $type {
            const ONE: Self = $one;
        }
    };
}

unit!(f32, 1.0);
unit!(f64, 1.0);

/// Represents a floating point element type that activation kernels can be
/// applied to. Kernels are written once against this trait; the precision is
/// a type parameter of every buffer.
pub trait Dtype:
    Unit
    + std::fmt::Display
    + num_traits::Float
    + num_traits::FromPrimitive
    + num_traits::ToPrimitive
    + MaxZero
{
}
impl Dtype for f32 {}
impl Dtype for f64 {}
