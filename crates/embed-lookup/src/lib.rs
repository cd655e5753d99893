//! Sparse embedding lookup-and-reduce kernels
//!
//! Gathers rows of an embedding table by index, optionally weights and
//! dequantizes them, and sums them into fixed-size groups (the "bag"
//! operation of recommendation models).
//!
//! Calls go through a dispatch facade that picks the fastest strategy the
//! CPU supports for the given row width. The reference engine defines the
//! semantics; every accelerated strategy must agree with it.
//!
//! # Example
//!
//! ```rust
//! use sparse_embed_lookup::{Dispatcher, LookupArgs};
//!
//! let table = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let indices = [0i32, 1, 2];
//! let lengths = [2, 1];
//! let args = LookupArgs::new(2, &table[..], &indices[..], &lengths[..]);
//!
//! let mut out = vec![0.0f32; 4];
//! Dispatcher::global().lookup(&args, &mut out[..]).unwrap();
//! assert_eq!(out, [4.0, 6.0, 5.0, 6.0]);
//! ```

pub mod accelerated;
pub mod args;
pub mod config;
pub mod dispatch;
pub mod reference;

pub use args::LookupArgs;
pub use config::{backend_preference, BackendPreference, LookupConfig, SPARSE_EMBED_BACKEND_ENV};
pub use dispatch::{
    embedding_lookup, embedding_lookup_i32_f16_f32, embedding_lookup_i32_f16_f32_base,
    embedding_lookup_i32_f32_f32, embedding_lookup_i32_f32_f32_base, embedding_lookup_i32_u8_f32,
    embedding_lookup_i32_u8_f32_base, embedding_lookup_i64_f16_f32,
    embedding_lookup_i64_f16_f32_base, embedding_lookup_i64_f32_f32,
    embedding_lookup_i64_f32_f32_base, embedding_lookup_i64_u8_f32,
    embedding_lookup_i64_u8_f32_base, Dispatcher, EmbeddingLookup, Outcome, Strategy, BASE_STRATEGY,
};
pub use reference::{reduce, reference_lookup};

pub use sparse_embed_core::{f16, Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        embedding_lookup, reference_lookup, BackendPreference, Dispatcher, EmbeddingLookup,
        LookupArgs, LookupConfig,
    };
    pub use sparse_embed_core::{f16, Error, Result};
}
