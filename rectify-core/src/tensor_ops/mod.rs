//! Operations on activation buffers like [relu_forward()] and [relu_backward()].
//!
//! # Kernels
//!
//! Every operation is described by a kernel op struct (e.g. [ReLUKernelOp],
//! [LeakyReLUKernelOp]) that says how to compute one element and its
//! derivative. Devices implement [UnaryKernel] to run an op over whole buffers.
//! The element-wise description lives in the op, the sweep over the buffer in
//! the device.
//!
//! # Fallibility
//!
//! The `try_*` functions are generic over the device and return a
//! [crate::tensor::Error] if the device could not run the kernel. The plain
//! versions always run on [crate::tensor::Cpu], which cannot fail, so they return `()`.
//!
//! None of these functions validate buffer lengths. Passing buffers of
//! different lengths is a caller error; slices are bounds checked, so it panics
//! rather than touching memory outside the buffers.

mod relu;
mod utilities;

pub use relu::*;
pub use utilities::{UnaryDerivative, UnaryKernel};
