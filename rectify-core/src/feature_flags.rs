//! Information about the available feature flags
//!
//! # "simd"
//!
//! *Enabled by default*
//!
//! Compiles in the vectorized rectification strategy for `f32`. On `x86_64`
//! standard ReLU forward passes over `f32` buffers then run 4 lanes at a time with
//! SSE, with any remainder handled by the scalar path. On other targets, or with
//! this feature disabled, every element type uses the scalar strategy.
//!
//! Both strategies produce bit-identical output.
//!
//! Example:
//! ```toml
//! rectify-core = { version = "...", default-features = false, features = ["std"] }
//! ```
//!
//! # "std"
//!
//! *Enabled by default*
//!
//! Implements [std::error::Error] for [crate::tensor::Error]. This is the only
//! thing the flag gates; the crate always links the standard library.
//!
//! # "test-f64"
//!
//! Runs the unit tests with `f64` as the element type instead of `f32`.

/// Whether the vectorized strategy was compiled in. Configure with crate features.
pub const SIMD_ENABLED: bool = cfg!(all(feature = "simd", target_arch = "x86_64"));
