//! Broadcast operations for AVX2 backend
//!
//! Scalar add (dequantization bias) and scale (length normalization) over an
//! f32 output slice.

use std::arch::x86_64::*;

/// Add `value` to every element
///
/// # Safety
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub unsafe fn add_scalar_f32(value: f32, out: &mut [f32]) {
    let n = out.len();
    let chunks = n / 8;
    let value_vec = _mm256_set1_ps(value);
    let out_ptr = out.as_mut_ptr();

    for i in 0..chunks {
        let p = out_ptr.add(i * 8);
        _mm256_storeu_ps(p, _mm256_add_ps(_mm256_loadu_ps(p), value_vec));
    }

    for o in &mut out[chunks * 8..] {
        *o += value;
    }
}

/// Multiply every element by `factor`
///
/// # Safety
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub unsafe fn scale_f32(factor: f32, out: &mut [f32]) {
    let n = out.len();
    let chunks = n / 8;
    let factor_vec = _mm256_set1_ps(factor);
    let out_ptr = out.as_mut_ptr();

    for i in 0..chunks {
        let p = out_ptr.add(i * 8);
        _mm256_storeu_ps(p, _mm256_mul_ps(_mm256_loadu_ps(p), factor_vec));
    }

    for o in &mut out[chunks * 8..] {
        *o *= factor;
    }
}
