//! Backend implementations without delegation
//!
//! This module provides concrete backend types with direct implementations.
//! No Box, no dyn, just simple types with compile-time dispatch.

pub mod avx2;
pub mod scalar;

// Re-export the main backend types
pub use avx2::Avx2Backend;
pub use scalar::ScalarBackend;
