//! Shared utilities for AVX2 implementations
//!
//! Widening loads used by the typed axpy kernels.

use half::f16;
use std::arch::x86_64::*;

/// Load 8 halves and widen them to a `__m256`
///
/// # Safety
/// `ptr` must be valid for reading 8 elements; the CPU must support F16C.
#[inline]
#[target_feature(enable = "avx2", enable = "f16c")]
pub unsafe fn load_8_f16_as_ps(ptr: *const f16) -> __m256 {
    // f16 is a transparent wrapper over its u16 bit pattern
    let bits = _mm_loadu_si128(ptr as *const __m128i);
    _mm256_cvtph_ps(bits)
}

/// Load 8 bytes and widen them to a `__m256`
///
/// # Safety
/// `ptr` must be valid for reading 8 bytes; the CPU must support AVX2.
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn load_8_u8_as_ps(ptr: *const u8) -> __m256 {
    let bytes = _mm_loadl_epi64(ptr as *const __m128i);
    _mm256_cvtepi32_ps(_mm256_cvtepu8_epi32(bytes))
}
