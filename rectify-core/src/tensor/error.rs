/// Represents the errors that can occur when launching activation kernels
/// through a device or a layer. This encompasses both Cpu and accelerator errors.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Two buffers that must have the same number of elements did not
    WrongNumElements { expected: usize, found: usize },
    /// An accelerator kernel was launched in a build without accelerator support
    NoGpu,
    /// A configured negative slope has no representation in the element type
    UnrepresentableSlope,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
