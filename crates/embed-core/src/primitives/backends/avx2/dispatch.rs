//! Compile-time dispatch system for AVX2 type-specific implementations
//!
//! This module provides the trait for zero-overhead dispatch from a table
//! element type to its operation-centric AVX2 module.

use super::ops::TypedAxpy;
use super::Avx2Backend;
use crate::numeric::EmbeddingElement;

/// Trait for type-specific AVX2 dispatch
///
/// This trait is implemented for each table element type, allowing
/// compile-time dispatch to type-specific implementations without runtime
/// overhead.
pub trait Avx2TypeDispatch: EmbeddingElement + TypedAxpy {
    fn backend_name() -> &'static str;
    fn simd_width() -> usize;

    /// # Safety
    /// The CPU must support AVX2, FMA and F16C.
    unsafe fn typed_axpy_impl(backend: &Avx2Backend, alpha: f32, row: &[Self], out: &mut [f32]) {
        <Self as TypedAxpy>::compute(backend, alpha, row, out)
    }
}

impl Avx2TypeDispatch for f32 {
    fn backend_name() -> &'static str {
        "avx2"
    }

    fn simd_width() -> usize {
        8 // AVX2 processes 8 f32s at once
    }
}

impl Avx2TypeDispatch for half::f16 {
    fn backend_name() -> &'static str {
        "avx2"
    }

    fn simd_width() -> usize {
        8 // 8 halves widened into one f32 vector
    }
}

impl Avx2TypeDispatch for u8 {
    fn backend_name() -> &'static str {
        "avx2"
    }

    fn simd_width() -> usize {
        8 // 8 bytes widened into one f32 vector
    }
}
