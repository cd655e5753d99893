//! Core traits and types for sparse embedding lookups
//!
//! This crate provides the foundation the lookup kernels are built on.
//!
//! # Architecture Overview
//!
//! 1. **Element types** - which table, index and output types exist
//! 2. **CPU capabilities** - detected once per process, immutable afterwards
//! 3. **Row primitives** - typed axpy, scalar add, scale and prefetch, with a
//!    portable scalar backend and an AVX2 backend
//!
//! # Example
//!
//! ```rust
//! use sparse_embed_core::{RowPrimitives, ScalarBackend};
//!
//! let backend = ScalarBackend::new();
//! let row = [1u8, 2, 3, 4];
//! let mut out = [0.0f32; 4];
//!
//! // Dequantize with scale 0.5 and bias 1.0
//! backend.typed_axpy(0.5, &row[..], &mut out[..]);
//! RowPrimitives::<u8, f32>::add_scalar(&backend, 1.0, &mut out[..]);
//!
//! assert_eq!(out, [1.5, 2.0, 2.5, 3.0]);
//! ```

pub mod cpu;
pub mod error;
pub mod numeric;
pub mod primitives;

// Re-export core types
pub use error::{Error, Result};

pub use cpu::{cpu_features, CpuFeatures};

pub use numeric::{EmbeddingElement, IndexElement, OutputElement};

pub use primitives::{
    best_backend_name, prefetch_read, Avx2Backend, RowPrimitives, ScalarBackend,
};

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use primitives::backends::avx2::Avx2TypeDispatch;

// Half precision table element type
pub use half::f16;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Avx2Backend, EmbeddingElement, IndexElement, OutputElement, Result, RowPrimitives,
        ScalarBackend,
    };

    pub use crate::error::Error;
    pub use half::f16;
}
