//! AVX2 backend implementation with modular operation-centric organization
//!
//! This module provides AVX2 + FMA + F16C implementations of the row
//! primitives with compile-time type dispatch. Operations are organized by
//! primitive for better modularity and testing. Only `f32` accumulation is
//! vectorized.

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod dispatch;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod ops;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod utils;

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use dispatch::Avx2TypeDispatch;

#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
use crate::numeric::EmbeddingElement;
use crate::primitives::RowPrimitives;

/// AVX2 backend for x86_64 processors
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend {
    _private: (),
}

impl Avx2Backend {
    /// Create a new AVX2 backend if this build and CPU support it
    pub fn try_new() -> Option<Self> {
        if Self::is_available() {
            Some(Self { _private: () })
        } else {
            None
        }
    }

    /// Check if AVX2, FMA and F16C are available on this CPU
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            crate::cpu::cpu_features().supports_avx2_fma()
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            false
        }
    }
}

// AVX2 implementations delegate to type-specific modules via compile-time dispatch
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl<In> RowPrimitives<In, f32> for Avx2Backend
where
    In: Avx2TypeDispatch,
{
    fn backend_name(&self) -> &'static str {
        In::backend_name()
    }

    fn simd_width(&self) -> usize {
        In::simd_width()
    }

    fn typed_axpy(&self, alpha: f32, row: &[In], out: &mut [f32]) {
        debug_assert_eq!(row.len(), out.len(), "Row and output must have same length");
        // Safety: the backend only exists when the CPU supports AVX2/FMA/F16C
        unsafe { In::typed_axpy_impl(self, alpha, row, out) }
    }

    fn add_scalar(&self, value: f32, out: &mut [f32]) {
        // Safety: the backend only exists when the CPU supports AVX2/FMA/F16C
        unsafe { ops::broadcast::add_scalar_f32(value, out) }
    }

    fn scale(&self, factor: f32, out: &mut [f32]) {
        // Safety: the backend only exists when the CPU supports AVX2/FMA/F16C
        unsafe { ops::broadcast::scale_f32(factor, out) }
    }
}

// Fallback for non-AVX2 builds
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
impl<In: EmbeddingElement> RowPrimitives<In, f32> for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2 (unavailable)"
    }
}
