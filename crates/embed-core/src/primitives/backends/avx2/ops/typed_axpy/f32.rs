//! AVX2 typed axpy implementation for f32 rows

use crate::primitives::backends::avx2::Avx2Backend;
use std::arch::x86_64::*;

/// AVX2 implementation of typed axpy for f32 rows
#[target_feature(enable = "avx2", enable = "fma")]
pub unsafe fn typed_axpy_f32(_backend: &Avx2Backend, alpha: f32, row: &[f32], out: &mut [f32]) {
    let n = row.len().min(out.len());
    let chunks = n / 8;

    let alpha_vec = _mm256_set1_ps(alpha);
    let row_ptr = row.as_ptr();
    let out_ptr = out.as_mut_ptr();

    // Main loop - process 8 elements at a time
    for i in 0..chunks {
        let offset = i * 8;
        let x = _mm256_loadu_ps(row_ptr.add(offset));
        let y = _mm256_loadu_ps(out_ptr.add(offset));
        _mm256_storeu_ps(out_ptr.add(offset), _mm256_fmadd_ps(alpha_vec, x, y));
    }

    let tail = chunks * 8;
    super::scalar::typed_axpy_tail(alpha, &row[tail..n], &mut out[tail..n]);
}
