//! Scalar backend implementation
//!
//! This backend provides generic implementations that work for every
//! element/output type pair without using any SIMD instructions.

use crate::numeric::{EmbeddingElement, OutputElement};
use crate::primitives::RowPrimitives;

/// Scalar backend - works for all element types
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

// Generic implementation for all types
impl<In: EmbeddingElement, Out: OutputElement> RowPrimitives<In, Out> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // All operations use the default implementations from the trait
}
