//! Row primitives with compile-time dispatch
//!
//! This module provides the per-row operations of the lookup loop
//! (typed axpy, scalar add, scale, prefetch) for each table element type and
//! SIMD backend.
//!
//! # Architecture
//!
//! - Single unified `RowPrimitives<In, Out>` trait for all operations
//! - Concrete backend types: `ScalarBackend`, `Avx2Backend`
//! - Runtime availability check, cached per process
//! - Zero-cost abstractions - no heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust,ignore
//! let backend = ScalarBackend::new();
//! backend.typed_axpy(0.5f32, &row, &mut out);
//!
//! if let Some(avx2) = Avx2Backend::try_new() {
//!     avx2.typed_axpy(0.5f32, &row, &mut out);
//! }
//! ```

pub mod backends;
pub mod prefetch;
pub mod traits;

pub use backends::{Avx2Backend, ScalarBackend};
pub use prefetch::prefetch_read;
pub use traits::RowPrimitives;

/// Get the best available backend name
pub fn best_backend_name() -> &'static str {
    if Avx2Backend::is_available() {
        return "avx2";
    }
    "scalar"
}
