mod cpu_kernel;

use super::UnaryKernel;
use crate::{
    dtypes::Dtype,
    tensor::{Cpu, Error},
};

#[derive(Debug, Default, Copy, Clone)]
pub struct ReLUKernelOp;

#[derive(Debug, Default, Copy, Clone)]
pub struct LeakyReLUKernelOp<E> {
    pub slope: E,
}

/// Devices that can run both the standard and the leaky rectifier.
pub trait ReLUDevice<E: Dtype>:
    UnaryKernel<ReLUKernelOp, E> + UnaryKernel<LeakyReLUKernelOp<E>, E>
{
}
impl<E: Dtype, D> ReLUDevice<E> for D where
    D: UnaryKernel<ReLUKernelOp, E> + UnaryKernel<LeakyReLUKernelOp<E>, E>
{
}

/// [Rectified Linear Unit (ReLU)](https://en.wikipedia.org/wiki/Rectifier_(neural_networks)) forward pass.
///
/// Writes every element of `out`:
/// - `negative_slope == None`: `max(x, 0)`
/// - `negative_slope == Some(s)`: `max(x, 0) + s * min(x, 0)`, the leaky variant
///
/// `Some(0.0)` still selects the leaky variant; the result is the same as `None`.
/// Only the standard variant has a vectorized strategy (see [crate::dtypes::MaxZero]).
///
/// NaN inputs rectify to `0` in both variants, as `max(NaN, 0)` does for SSE `maxps`
/// and [f32::max]. The leaky variant does not propagate NaN.
///
/// Examples:
/// ```rust
/// # use rectify_core::prelude::*;
/// let x = [-2.0, 0.0, 3.0];
/// let mut y = [0.0; 3];
/// relu_forward(&x, &mut y, Some(0.1));
/// assert_eq!(y, [-0.2, 0.0, 3.0]);
/// ```
pub fn relu_forward<E: Dtype>(inp: &[E], out: &mut [E], negative_slope: Option<E>) {
    try_relu_forward(&Cpu, inp, out, negative_slope).unwrap()
}

/// Fallible version of [relu_forward()] on any [ReLUDevice].
pub fn try_relu_forward<E: Dtype, D: ReLUDevice<E>>(
    dev: &D,
    inp: &[E],
    out: &mut [E],
    negative_slope: Option<E>,
) -> Result<(), Error> {
    match negative_slope {
        Some(slope) => <D as UnaryKernel<LeakyReLUKernelOp<E>, E>>::forward(
            dev,
            LeakyReLUKernelOp { slope },
            inp,
            out,
        ),
        None => <D as UnaryKernel<ReLUKernelOp, E>>::forward(dev, ReLUKernelOp, inp, out),
    }
}

/// In-place version of [relu_forward()], input and output share `buf`.
pub fn relu_forward_inplace<E: Dtype>(buf: &mut [E], negative_slope: Option<E>) {
    try_relu_forward_inplace(&Cpu, buf, negative_slope).unwrap()
}

/// Fallible version of [relu_forward_inplace()] on any [ReLUDevice].
pub fn try_relu_forward_inplace<E: Dtype, D: ReLUDevice<E>>(
    dev: &D,
    buf: &mut [E],
    negative_slope: Option<E>,
) -> Result<(), Error> {
    match negative_slope {
        Some(slope) => <D as UnaryKernel<LeakyReLUKernelOp<E>, E>>::forward_inplace(
            dev,
            LeakyReLUKernelOp { slope },
            buf,
        ),
        None => <D as UnaryKernel<ReLUKernelOp, E>>::forward_inplace(dev, ReLUKernelOp, buf),
    }
}

/// ReLU backward pass.
///
/// When `propagate_down` is false nothing happens: `grad_inp` is neither read
/// nor written. Otherwise every element becomes
/// `grad_out[i] * (if inp[i] > 0 { 1 } else { negative_slope })`.
///
/// The derivative at exactly `0` is `negative_slope`. Pass `0` as the slope
/// for the standard rectifier.
///
/// Examples:
/// ```rust
/// # use rectify_core::prelude::*;
/// let x = [-1.0, 0.0, 2.0];
/// let dy = [1.0; 3];
/// let mut dx = [0.0; 3];
/// relu_backward(&x, &dy, &mut dx, true, 0.1);
/// assert_eq!(dx, [0.1, 0.1, 1.0]);
/// ```
pub fn relu_backward<E: Dtype>(
    inp: &[E],
    grad_out: &[E],
    grad_inp: &mut [E],
    propagate_down: bool,
    negative_slope: E,
) {
    try_relu_backward(&Cpu, inp, grad_out, grad_inp, propagate_down, negative_slope).unwrap()
}

/// Fallible version of [relu_backward()] on any [ReLUDevice].
pub fn try_relu_backward<E: Dtype, D: ReLUDevice<E>>(
    dev: &D,
    inp: &[E],
    grad_out: &[E],
    grad_inp: &mut [E],
    propagate_down: bool,
    negative_slope: E,
) -> Result<(), Error> {
    if !propagate_down {
        return Ok(());
    }
    let op = LeakyReLUKernelOp {
        slope: negative_slope,
    };
    <D as UnaryKernel<LeakyReLUKernelOp<E>, E>>::backward(dev, op, inp, grad_out, grad_inp)
}

/// In-place version of [relu_backward()]: `grad` holds the upstream gradient
/// and receives the downstream one.
///
/// `inp` may be the forward output instead of the forward input when the
/// forward pass ran in place. That gives the same gradient only when
/// `negative_slope >= 0`, because only then does rectification preserve the sign
/// of every element.
pub fn relu_backward_inplace<E: Dtype>(
    inp: &[E],
    grad: &mut [E],
    propagate_down: bool,
    negative_slope: E,
) {
    try_relu_backward_inplace(&Cpu, inp, grad, propagate_down, negative_slope).unwrap()
}

/// Fallible version of [relu_backward_inplace()] on any [ReLUDevice].
pub fn try_relu_backward_inplace<E: Dtype, D: ReLUDevice<E>>(
    dev: &D,
    inp: &[E],
    grad: &mut [E],
    propagate_down: bool,
    negative_slope: E,
) -> Result<(), Error> {
    if !propagate_down {
        return Ok(());
    }
    let op = LeakyReLUKernelOp {
        slope: negative_slope,
    };
    <D as UnaryKernel<LeakyReLUKernelOp<E>, E>>::backward_inplace(dev, op, inp, grad)
}
