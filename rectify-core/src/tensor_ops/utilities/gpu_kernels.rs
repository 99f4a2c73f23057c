use super::ops::UnaryKernel;
use crate::{
    dtypes::Dtype,
    tensor::{Error, Gpu},
};

impl<E: Dtype, Op> UnaryKernel<Op, E> for Gpu {
    fn forward(&self, _op: Op, _inp: &[E], _out: &mut [E]) -> Result<(), Error> {
        Err(self.unavailable("forward"))
    }

    fn forward_inplace(&self, _op: Op, _buf: &mut [E]) -> Result<(), Error> {
        Err(self.unavailable("forward_inplace"))
    }

    fn backward(
        &self,
        _op: Op,
        _inp: &[E],
        _grad_out: &[E],
        _grad_inp: &mut [E],
    ) -> Result<(), Error> {
        Err(self.unavailable("backward"))
    }

    fn backward_inplace(&self, _op: Op, _inp: &[E], _grad: &mut [E]) -> Result<(), Error> {
        Err(self.unavailable("backward_inplace"))
    }
}
