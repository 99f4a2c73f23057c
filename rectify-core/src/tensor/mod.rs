//! The [Blob] buffer container, the devices kernels run on, and the [Error] type.
//!
//! # Devices
//!
//! A device is a zero-sized handle that implements the kernel traits in
//! [crate::tensor_ops]:
//!
//! - [Cpu] runs every kernel.
//! - [Gpu] has the same kernel interface, but this crate is built without
//!   accelerator support, so [Gpu::is_available()] is `false` and every kernel
//!   launch returns [Error::NoGpu] without touching its buffers.
//!
//! ```rust
//! # use rectify_core::prelude::*;
//! let x = [-1.0f32, 2.0];
//! let mut y = [0.0; 2];
//! assert!(try_relu_forward(&Cpu::default(), &x, &mut y, None).is_ok());
//! assert_eq!(try_relu_forward(&Gpu::default(), &x, &mut y, None), Err(Error::NoGpu));
//! ```

mod blob;
mod cpu;
mod error;
mod gpu;

pub use blob::Blob;
pub use cpu::Cpu;
pub use error::Error;
pub use gpu::Gpu;
