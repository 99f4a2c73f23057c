use num_traits::Zero;

/// Rectification primitives for an element type, with an optional
/// vectorized strategy picked per type at compile time.
///
/// [MaxZero::max_zero] returns `x` when `x > 0` and `+0` otherwise, so both
/// `-0.0` and NaN rectify to `+0.0`. This is exactly what the SSE `max_ps`
/// instruction computes for `max(x, 0)`, which keeps the scalar and vectorized
/// strategies bit-identical.
pub trait MaxZero: Copy + PartialOrd + Zero {
    /// Whether [MaxZero::max_zero_slice] runs a vectorized strategy for this type.
    const VECTORIZED: bool = false;

    #[inline(always)]
    fn max_zero(x: Self) -> Self {
        if x > Self::zero() {
            x
        } else {
            Self::zero()
        }
    }

    #[inline(always)]
    fn min_zero(x: Self) -> Self {
        if x < Self::zero() {
            x
        } else {
            Self::zero()
        }
    }

    /// Rectifies `inp` into `out` one element at a time.
    fn max_zero_slice_scalar(inp: &[Self], out: &mut [Self]) {
        debug_assert_eq!(inp.len(), out.len());
        for (o, &x) in out.iter_mut().zip(inp.iter()) {
            *o = Self::max_zero(x);
        }
    }

    /// Rectifies `inp` into `out` using the fastest strategy compiled in for this type.
    fn max_zero_slice(inp: &[Self], out: &mut [Self]) {
        Self::max_zero_slice_scalar(inp, out)
    }

    /// In-place version of [MaxZero::max_zero_slice].
    fn max_zero_inplace(buf: &mut [Self]) {
        for x in buf.iter_mut() {
            *x = Self::max_zero(*x);
        }
    }
}

impl MaxZero for f64 {}

impl MaxZero for f32 {
    const VECTORIZED: bool = cfg!(all(feature = "simd", target_arch = "x86_64"));

    fn max_zero_slice(inp: &[Self], out: &mut [Self]) {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        sse::max_zero_f32(inp, out);

        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        Self::max_zero_slice_scalar(inp, out);
    }

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    fn max_zero_inplace(buf: &mut [Self]) {
        sse::max_zero_f32_inplace(buf);
    }
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod sse {
    use super::MaxZero;
    use std::arch::x86_64::{_mm_loadu_ps, _mm_max_ps, _mm_setzero_ps, _mm_storeu_ps};

    const LANES: usize = 4;

    /// Full groups of [LANES] go through `max_ps`, the remainder through the scalar path.
    pub(super) fn max_zero_f32(inp: &[f32], out: &mut [f32]) {
        debug_assert_eq!(inp.len(), out.len());
        let mut inp_groups = inp.chunks_exact(LANES);
        let mut out_groups = out.chunks_exact_mut(LANES);

        // SAFETY: sse is part of the x86_64 baseline. Every group holds exactly
        // LANES elements and loads/stores are unaligned, so no access leaves the slices.
        unsafe {
            let zero = _mm_setzero_ps();
            for (i, o) in (&mut inp_groups).zip(&mut out_groups) {
                let x = _mm_loadu_ps(i.as_ptr());
                _mm_storeu_ps(o.as_mut_ptr(), _mm_max_ps(x, zero));
            }
        }

        let tail = out_groups.into_remainder();
        for (o, &x) in tail.iter_mut().zip(inp_groups.remainder().iter()) {
            *o = <f32 as MaxZero>::max_zero(x);
        }
    }

    pub(super) fn max_zero_f32_inplace(buf: &mut [f32]) {
        let mut groups = buf.chunks_exact_mut(LANES);

        // SAFETY: same as `max_zero_f32`, each load and store covers one whole group.
        unsafe {
            let zero = _mm_setzero_ps();
            for g in &mut groups {
                let x = _mm_loadu_ps(g.as_ptr());
                _mm_storeu_ps(g.as_mut_ptr(), _mm_max_ps(x, zero));
            }
        }

        for x in groups.into_remainder().iter_mut() {
            *x = <f32 as MaxZero>::max_zero(*x);
        }
    }
}
