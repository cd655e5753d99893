//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use approx::assert_relative_eq;

pub const EPSILON: f32 = 1e-5;

/// Row widths that test edge cases for SIMD operations
pub fn edge_case_block_sizes() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        3,   // Below any vector width
        4,   // SSE width
        7,   // AVX2 width - 1
        8,   // AVX2 width
        9,   // AVX2 width + 1
        15,  // Multiple of no SIMD width
        16,  // Power of 2
        17,  // Power of 2 + 1
        31,  // Prime
        32,  // Common embedding width
        64,  // Cache line of f32s / 4
        100, // Round number
        128, // Common embedding width
    ]
}

/// Seeded random f32 row in [-1, 1)
pub fn f32_row(len: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

/// Seeded random quantized row covering the full u8 range
pub fn u8_row(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}
