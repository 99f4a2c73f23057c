use crate::{dtypes::Dtype, tensor::Error};

/// Runs the element-wise op `Op` over whole buffers on a device.
///
/// `inp`, `out`, `grad_out` and `grad_inp` must all have the same length.
pub trait UnaryKernel<Op, E: Dtype> {
    /// Overwrites every element of `out` with `f(inp[i])`.
    fn forward(&self, op: Op, inp: &[E], out: &mut [E]) -> Result<(), Error>;

    /// Overwrites every element of `buf` with `f(buf[i])`.
    fn forward_inplace(&self, op: Op, buf: &mut [E]) -> Result<(), Error>;

    /// Overwrites every element of `grad_inp` with `df(inp[i]) * grad_out[i]`.
    fn backward(&self, op: Op, inp: &[E], grad_out: &[E], grad_inp: &mut [E])
        -> Result<(), Error>;

    /// Rescales every element of `grad` by `df(inp[i])`.
    fn backward_inplace(&self, op: Op, inp: &[E], grad: &mut [E]) -> Result<(), Error>;
}
