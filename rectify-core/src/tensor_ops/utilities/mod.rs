pub(crate) mod cpu_kernels;
pub(crate) mod gpu_kernels;
pub(crate) mod ops;

pub use cpu_kernels::UnaryDerivative;
pub use ops::UnaryKernel;
