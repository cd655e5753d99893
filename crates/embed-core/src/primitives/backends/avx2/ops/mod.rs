//! Operation-centric modules for AVX2 row primitives
//!
//! Each operation is organized in its own module with type-specific implementations

pub mod broadcast;
pub mod typed_axpy;

// Re-export the operation traits for convenience
pub use typed_axpy::TypedAxpy;
