//! Element type hierarchy for embedding lookups
//!
//! This module provides the type foundation shared by every lookup kernel:
//! what a table element can be, what an index can be, and what an output
//! accumulator can be.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: No computation beyond element conversion
//! - **Widening only**: Table elements are always widened into the output type
//! - **Closed sets**: Exactly the element types the kernels are instantiated for

use bytemuck::Pod;
use half::f16;
use num_traits::Float;
use std::fmt::Debug;
use std::ops::{AddAssign, MulAssign};

/// Element type of an embedding table row
///
/// Implemented for `f32`, `half::f16` and `u8` (a per-row quantized value that
/// is dequantized with a scale/bias table).
pub trait EmbeddingElement: Pod + Debug + Send + Sync + 'static {
    /// Short type name used in kernel names and diagnostics
    const NAME: &'static str;

    /// Widen to `f32` without loss
    fn to_f32(self) -> f32;

    /// Widen into an output accumulator type
    #[inline(always)]
    fn widen<O: OutputElement>(self) -> O {
        O::from_f32(self.to_f32())
    }
}

/// Accumulator type of the output buffer
pub trait OutputElement: Float + Pod + AddAssign + MulAssign + Debug + Send + Sync + 'static {
    /// Short type name used in kernel names and diagnostics
    const NAME: &'static str;

    /// Convert an `f32` weight, bias or table value into this type
    fn from_f32(val: f32) -> Self;
}

/// Integer type of the index sequence
pub trait IndexElement: Pod + Debug + Send + Sync + 'static {
    /// Short type name used in kernel names and diagnostics
    const NAME: &'static str;

    /// Sign-extend to `i64`
    fn to_i64(self) -> i64;

    /// Resolve to a row number, or `None` if outside `[0, data_size)`
    #[inline(always)]
    fn to_row(self, data_size: usize) -> Option<usize> {
        let idx = self.to_i64();
        if idx >= 0 && (idx as u64) < data_size as u64 {
            Some(idx as usize)
        } else {
            None
        }
    }
}

// =============================================================================
// Implementations for concrete types
// =============================================================================

impl EmbeddingElement for f32 {
    const NAME: &'static str = "f32";

    #[inline(always)]
    fn to_f32(self) -> f32 {
        self
    }
}

impl EmbeddingElement for f16 {
    const NAME: &'static str = "f16";

    #[inline(always)]
    fn to_f32(self) -> f32 {
        f16::to_f32(self)
    }
}

impl EmbeddingElement for u8 {
    const NAME: &'static str = "u8";

    #[inline(always)]
    fn to_f32(self) -> f32 {
        self as f32
    }
}

impl OutputElement for f32 {
    const NAME: &'static str = "f32";

    #[inline(always)]
    fn from_f32(val: f32) -> Self {
        val
    }
}

impl OutputElement for f64 {
    const NAME: &'static str = "f64";

    #[inline(always)]
    fn from_f32(val: f32) -> Self {
        val as f64
    }
}

impl IndexElement for i32 {
    const NAME: &'static str = "i32";

    #[inline(always)]
    fn to_i64(self) -> i64 {
        self as i64
    }
}

impl IndexElement for i64 {
    const NAME: &'static str = "i64";

    #[inline(always)]
    fn to_i64(self) -> i64 {
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
