//! Layers built from activation kernels.
//!
//! - [ReLU] with its [ReLUConfig]
//! - [Mode], the execution mode a layer dispatches on

mod relu;

pub use relu::{Mode, ReLU, ReLUConfig};
