//! Sparse embedding lookup-and-reduce
//!
//! Umbrella crate re-exporting the workspace:
//!
//! - [`embed_core`]: element types, errors, CPU detection and row primitives
//! - [`embed_lookup`]: the reference engine, the AVX2 strategy and the dispatch
//!   facade with its six named specializations
//!
//! Built with the `avx2` feature enabled on both crates, so the accelerated
//! strategy is available whenever the CPU supports it.

pub use sparse_embed_core as embed_core;
pub use sparse_embed_lookup as embed_lookup;

pub use sparse_embed_lookup::{
    embedding_lookup, embedding_lookup_i32_f16_f32, embedding_lookup_i32_f16_f32_base,
    embedding_lookup_i32_f32_f32, embedding_lookup_i32_f32_f32_base, embedding_lookup_i32_u8_f32,
    embedding_lookup_i32_u8_f32_base, embedding_lookup_i64_f16_f32,
    embedding_lookup_i64_f16_f32_base, embedding_lookup_i64_f32_f32,
    embedding_lookup_i64_f32_f32_base, embedding_lookup_i64_u8_f32,
    embedding_lookup_i64_u8_f32_base, reference_lookup, BackendPreference, Dispatcher,
    LookupArgs, LookupConfig,
};

pub use sparse_embed_core::{best_backend_name, cpu_features, f16, Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use sparse_embed_core::prelude::*;
    pub use sparse_embed_lookup::prelude::*;
}
