/// The primary device. Kernels run synchronously on the calling thread.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cpu;

impl Cpu {
    /// Always `true`.
    pub const fn is_available() -> bool {
        true
    }
}
