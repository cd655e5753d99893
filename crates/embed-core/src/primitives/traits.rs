//! Row-level compute primitives trait
//!
//! The lookup loop only ever touches a row through these four operations,
//! which is what lets one generic loop run on every backend.

use crate::numeric::{EmbeddingElement, OutputElement};
use crate::primitives::prefetch::prefetch_read;

/// Unified trait for the row operations of the lookup-and-reduce loop
///
/// Implementations provide low-level operations optimized for a backend
/// (scalar, AVX2) with compile-time dispatch. The default bodies are the
/// portable reference semantics.
pub trait RowPrimitives<In: EmbeddingElement, Out: OutputElement>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of output elements processed in parallel)
    fn simd_width(&self) -> usize {
        1
    }

    /// Typed axpy: `out[i] += alpha * widen(row[i])`
    fn typed_axpy(&self, alpha: Out, row: &[In], out: &mut [Out]) {
        debug_assert_eq!(row.len(), out.len(), "Row and output must have same length");

        for (o, &x) in out.iter_mut().zip(row.iter()) {
            *o += alpha * x.widen::<Out>();
        }
    }

    /// Add the same scalar to every element
    fn add_scalar(&self, value: Out, out: &mut [Out]) {
        for o in out.iter_mut() {
            *o += value;
        }
    }

    /// Multiply every element by a scalar
    fn scale(&self, factor: Out, out: &mut [Out]) {
        for o in out.iter_mut() {
            *o *= factor;
        }
    }

    /// Hint that `row` is about to be read
    #[inline(always)]
    fn prefetch_row(&self, row: &[In]) {
        prefetch_read(row.as_ptr());
    }
}
