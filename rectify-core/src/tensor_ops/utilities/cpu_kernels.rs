use super::ops::UnaryKernel;
use crate::{
    dtypes::Dtype,
    tensor::{Cpu, Error},
};

pub trait UnaryDerivative<E>: Send + Sync {
    fn f(&self, x: &E) -> E;

    fn df(&self, x: &E) -> E;

    /// Maps [UnaryDerivative::f] over `inp` into `out`. Ops with a faster
    /// whole-buffer strategy override this.
    fn f_slice(&self, inp: &[E], out: &mut [E]) {
        debug_assert_eq!(inp.len(), out.len());
        for (o, x) in out.iter_mut().zip(inp.iter()) {
            *o = self.f(x);
        }
    }

    /// In-place version of [UnaryDerivative::f_slice].
    fn f_inplace(&self, buf: &mut [E]) {
        for x in buf.iter_mut() {
            *x = self.f(x);
        }
    }
}

impl<E: Dtype, Op: UnaryDerivative<E>> UnaryKernel<Op, E> for Cpu {
    fn forward(&self, op: Op, inp: &[E], out: &mut [E]) -> Result<(), Error> {
        op.f_slice(inp, out);
        Ok(())
    }

    fn forward_inplace(&self, op: Op, buf: &mut [E]) -> Result<(), Error> {
        op.f_inplace(buf);
        Ok(())
    }

    fn backward(
        &self,
        op: Op,
        inp: &[E],
        grad_out: &[E],
        grad_inp: &mut [E],
    ) -> Result<(), Error> {
        debug_assert_eq!(inp.len(), grad_out.len());
        debug_assert_eq!(inp.len(), grad_inp.len());
        for (i, x) in grad_inp.iter_mut().enumerate() {
            *x = op.df(&inp[i]) * grad_out[i];
        }
        Ok(())
    }

    fn backward_inplace(&self, op: Op, inp: &[E], grad: &mut [E]) -> Result<(), Error> {
        debug_assert_eq!(inp.len(), grad.len());
        for (g, x) in grad.iter_mut().zip(inp.iter()) {
            *g = op.df(x) * *g;
        }
        Ok(())
    }
}
