//! # rectify-core
//!
//! Elementwise rectified linear unit kernels, written once generically over
//! precision and dispatched to a vectorized strategy at compile time where
//! one exists.
//!
//! See [feature_flags] for details on feature flags.
//!
//! # Buffers & Devices
//!
//! *See [dtypes] and [tensor] for more information.*
//!
//! Kernels operate on plain slices: an input buffer, an output buffer of the
//! same length, and for the backward pass an upstream gradient buffer. The
//! caller owns all of them. [`tensor::Blob`] is a small container pairing an
//! activation buffer with its gradient buffer, which is what layers use.
//!
//! Devices execute kernels:
//! 1. [tensor::Cpu] - always available
//! 2. [tensor::Gpu] - accelerator device. Built without accelerator support,
//!    every launch reports [tensor::Error::NoGpu].
//!
//! # Forward & Backward
//!
//! *See [tensor_ops] for more information*
//!
//! ```rust
//! # use rectify_core::prelude::*;
//! let x = [-2.0f32, 0.0, 3.0, -0.5];
//! let mut y = [0.0; 4];
//! relu_forward(&x, &mut y, None);
//! assert_eq!(y, [0.0, 0.0, 3.0, 0.0]);
//!
//! let dy = [1.0; 4];
//! let mut dx = [0.0; 4];
//! relu_backward(&x, &dy, &mut dx, true, 0.0);
//! assert_eq!(dx, [0.0, 0.0, 1.0, 0.0]);
//! ```

pub mod dtypes;
pub mod feature_flags;
pub mod tensor;
pub mod tensor_ops;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::dtypes::{Dtype, MaxZero, Unit};
    pub use crate::tensor::*;
    pub use crate::tensor_ops::*;
}

#[cfg(test)]
pub(crate) mod tests {
    pub use num_traits::{Float, FromPrimitive, Zero};

    #[cfg(not(feature = "test-f64"))]
    pub type TestDtype = f32;

    #[cfg(feature = "test-f64")]
    pub type TestDtype = f64;

    pub type TestDevice = crate::tensor::Cpu;

    pub trait AssertClose {
        type Elem: std::fmt::Display + std::fmt::Debug + Copy;
        const DEFAULT_TOLERANCE: Self::Elem;
        fn get_default_tol(&self) -> Self::Elem {
            Self::DEFAULT_TOLERANCE
        }
        fn get_far_pair(
            &self,
            rhs: &Self,
            tolerance: Self::Elem,
        ) -> Option<(Self::Elem, Self::Elem)>;
    }

    impl AssertClose for f32 {
        type Elem = f32;
        const DEFAULT_TOLERANCE: Self::Elem = 1e-6;
        fn get_far_pair(&self, rhs: &Self, tolerance: f32) -> Option<(f32, f32)> {
            if (self - rhs).abs() > tolerance {
                Some((*self, *rhs))
            } else {
                None
            }
        }
    }

    impl AssertClose for f64 {
        type Elem = f64;
        const DEFAULT_TOLERANCE: Self::Elem = 1e-6;
        fn get_far_pair(&self, rhs: &Self, tolerance: f64) -> Option<(f64, f64)> {
            if (self - rhs).abs() > tolerance {
                Some((*self, *rhs))
            } else {
                None
            }
        }
    }

    impl<T: AssertClose> AssertClose for [T] {
        type Elem = T::Elem;
        const DEFAULT_TOLERANCE: Self::Elem = T::DEFAULT_TOLERANCE;
        fn get_far_pair(
            &self,
            rhs: &Self,
            tolerance: Self::Elem,
        ) -> Option<(Self::Elem, Self::Elem)> {
            assert_eq!(self.len(), rhs.len(), "length mismatch");
            for (l, r) in self.iter().zip(rhs.iter()) {
                if let Some(pair) = l.get_far_pair(r, tolerance) {
                    return Some(pair);
                }
            }
            None
        }
    }

    /// Converts `f64` literals into a `Vec` of the test dtype.
    pub fn to_test_vec(values: &[f64]) -> Vec<TestDtype> {
        values
            .iter()
            .map(|&v| TestDtype::from_f64(v).unwrap())
            .collect()
    }

    macro_rules! assert_close {
        ($Lhs:expr, $Rhs:expr) => {
            let lhs = &$Lhs[..];
            let rhs = &$Rhs[..];
            let tol = AssertClose::get_default_tol(lhs);
            let far_pair = AssertClose::get_far_pair(lhs, rhs, tol);
            if let Some((l, r)) = far_pair {
                panic!("lhs != rhs | {l} != {r}\n\n{lhs:?}\n\n{rhs:?}");
            }
        };
        ($Lhs:expr, $Rhs:expr, $Tolerance:expr) => {{
            let lhs = &$Lhs[..];
            let rhs = &$Rhs[..];
            let far_pair = AssertClose::get_far_pair(
                lhs,
                rhs,
                num_traits::FromPrimitive::from_f64($Tolerance).unwrap(),
            );
            if let Some((l, r)) = far_pair {
                panic!("lhs != rhs | {l} != {r}\n\n{lhs:?}\n\n{rhs:?}");
            }
        }};
    }

    pub(crate) use assert_close;
}
