//! # rectify
//!
//! ReLU and leaky ReLU layers on top of the kernels in [rectify_core].
//!
//! A layer is built from a [nn::ReLUConfig], checks at construction that the
//! requested execution [nn::Mode] is available in this build, and then runs
//! forward and backward passes over [Blob]s: a bottom blob holding the layer
//! input and a top blob holding its output.
//!
//! ```rust
//! # use rectify::prelude::*;
//! let layer: ReLU<f32> = ReLU::try_new(ReLUConfig::default().with_negative_slope(0.1))?;
//!
//! let mut bottom = Blob::from_vec(vec![-2.0, 0.0, 3.0]);
//! let mut top = Blob::zeros(0);
//! layer.reshape(&bottom, &mut top);
//! layer.try_forward(&bottom, &mut top)?;
//! assert_eq!(top.data()[2], 3.0);
//!
//! top.diff_mut().copy_from_slice(&[1.0, 1.0, 1.0]);
//! layer.try_backward(&top, true, &mut bottom)?;
//! assert_eq!(bottom.diff()[2], 1.0);
//! # Ok::<(), rectify::tensor::Error>(())
//! ```

pub mod nn;

pub use rectify_core::*;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::nn::*;
    pub use rectify_core::prelude::*;
}
