//! Scalar tail for typed axpy

use crate::numeric::EmbeddingElement;

/// Scalar implementation of typed axpy, used for the lanes past the last
/// full vector
#[inline(always)]
pub fn typed_axpy_tail<In: EmbeddingElement>(alpha: f32, row: &[In], out: &mut [f32]) {
    for (o, &x) in out.iter_mut().zip(row.iter()) {
        *o += alpha * x.to_f32();
    }
}
