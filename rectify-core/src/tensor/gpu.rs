use super::Error;

/// Accelerator device. This build carries no accelerator support, so it is a
/// stub: it exposes the same kernel interface as [super::Cpu], but every launch
/// returns [Error::NoGpu].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Gpu;

impl Gpu {
    /// Whether accelerator kernels were compiled in.
    pub const fn is_available() -> bool {
        false
    }

    pub(crate) fn unavailable(&self, kernel: &str) -> Error {
        log::error!("cannot launch `{kernel}` on Gpu in a cpu-only build, check the execution mode");
        Error::NoGpu
    }
}
