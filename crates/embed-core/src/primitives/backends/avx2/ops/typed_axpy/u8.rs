//! AVX2 typed axpy implementation for quantized u8 rows

use crate::primitives::backends::avx2::utils::load_8_u8_as_ps;
use crate::primitives::backends::avx2::Avx2Backend;
use std::arch::x86_64::*;

/// AVX2 implementation of typed axpy for u8 rows
///
/// The scale of a quantized row is already folded into `alpha` by the caller;
/// the per-row bias is applied separately.
#[target_feature(enable = "avx2", enable = "fma")]
pub unsafe fn typed_axpy_u8(_backend: &Avx2Backend, alpha: f32, row: &[u8], out: &mut [f32]) {
    let n = row.len().min(out.len());
    let chunks = n / 8;

    let alpha_vec = _mm256_set1_ps(alpha);
    let row_ptr = row.as_ptr();
    let out_ptr = out.as_mut_ptr();

    for i in 0..chunks {
        let offset = i * 8;
        let x = load_8_u8_as_ps(row_ptr.add(offset));
        let y = _mm256_loadu_ps(out_ptr.add(offset));
        _mm256_storeu_ps(out_ptr.add(offset), _mm256_fmadd_ps(alpha_vec, x, y));
    }

    let tail = chunks * 8;
    super::scalar::typed_axpy_tail(alpha, &row[tail..n], &mut out[tail..n]);
}
