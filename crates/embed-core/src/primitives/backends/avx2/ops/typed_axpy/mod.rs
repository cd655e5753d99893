//! Typed axpy operation for AVX2 backend
//!
//! Computes `out[i] += alpha * widen(row[i])` with f32 accumulation.

mod f16;
mod f32;
mod scalar;
mod u8;

use crate::primitives::backends::avx2::Avx2Backend;

/// Trait for the typed axpy operation
pub trait TypedAxpy: Sized {
    /// Compute typed axpy with AVX2 optimizations
    ///
    /// # Safety
    /// The CPU must support AVX2, FMA and F16C.
    unsafe fn compute(backend: &Avx2Backend, alpha: f32, row: &[Self], out: &mut [f32]);
}

// Type-specific implementations
impl TypedAxpy for f32 {
    unsafe fn compute(backend: &Avx2Backend, alpha: f32, row: &[f32], out: &mut [f32]) {
        f32::typed_axpy_f32(backend, alpha, row, out)
    }
}

impl TypedAxpy for half::f16 {
    unsafe fn compute(backend: &Avx2Backend, alpha: f32, row: &[half::f16], out: &mut [f32]) {
        f16::typed_axpy_f16(backend, alpha, row, out)
    }
}

impl TypedAxpy for u8 {
    unsafe fn compute(backend: &Avx2Backend, alpha: f32, row: &[u8], out: &mut [f32]) {
        u8::typed_axpy_u8(backend, alpha, row, out)
    }
}
