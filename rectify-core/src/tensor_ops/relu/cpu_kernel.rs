use super::{LeakyReLUKernelOp, ReLUKernelOp};
use crate::{dtypes::Dtype, tensor_ops::UnaryDerivative};

impl<E: Dtype> UnaryDerivative<E> for ReLUKernelOp {
    #[inline(always)]
    fn f(&self, x: &E) -> E {
        E::max_zero(*x)
    }

    #[inline(always)]
    fn df(&self, x: &E) -> E {
        if x > &E::zero() {
            E::ONE
        } else {
            E::zero()
        }
    }

    fn f_slice(&self, inp: &[E], out: &mut [E]) {
        E::max_zero_slice(inp, out)
    }

    fn f_inplace(&self, buf: &mut [E]) {
        E::max_zero_inplace(buf)
    }
}

impl<E: Dtype> UnaryDerivative<E> for LeakyReLUKernelOp<E> {
    #[inline(always)]
    fn f(&self, x: &E) -> E {
        E::max_zero(*x) + self.slope * E::min_zero(*x)
    }

    #[inline(always)]
    fn df(&self, x: &E) -> E {
        if x > &E::zero() {
            E::ONE
        } else {
            self.slope
        }
    }
}
