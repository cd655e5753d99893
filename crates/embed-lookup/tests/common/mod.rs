//! Shared fixtures for lookup integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sparse_embed_core::{EmbeddingElement, IndexElement};
use sparse_embed_lookup::{f16, LookupArgs};

pub use approx::assert_relative_eq;

/// Row widths covering both sides of the AVX2 applicability rule
pub const BLOCK_SIZES: [usize; 9] = [1, 3, 7, 8, 9, 16, 31, 64, 128];

/// Owned buffers of one random lookup problem
#[derive(Debug, Clone)]
pub struct Problem<In> {
    pub block_size: usize,
    pub data_size: usize,
    pub table: Vec<In>,
    pub indices: Vec<i64>,
    pub lengths: Vec<i32>,
    pub weights: Vec<f32>,
    pub scale_bias: Vec<f32>,
}

impl<In> Problem<In> {
    pub fn output_size(&self) -> usize {
        self.lengths.len()
    }

    pub fn output_len(&self) -> usize {
        self.output_size() * self.block_size
    }

    pub fn indices_i32(&self) -> Vec<i32> {
        self.indices.iter().map(|&i| i as i32).collect()
    }
}

/// Random problem whose lengths sum to the number of indices
pub fn problem<In>(
    seed: u64,
    block_size: usize,
    data_size: usize,
    groups: usize,
    element: impl Fn(&mut ChaCha8Rng) -> In,
) -> Problem<In> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let table = (0..block_size * data_size).map(|_| element(&mut rng)).collect();
    let lengths: Vec<i32> = (0..groups).map(|_| rng.gen_range(0..6)).collect();
    let index_size: usize = lengths.iter().map(|&l| l as usize).sum();
    let indices = (0..index_size)
        .map(|_| rng.gen_range(0..data_size as i64))
        .collect();
    let weights = (0..index_size).map(|_| rng.gen_range(-2.0f32..2.0)).collect();
    let scale_bias = (0..2 * data_size).map(|_| rng.gen_range(-1.0f32..1.0)).collect();

    Problem {
        block_size,
        data_size,
        table,
        indices,
        lengths,
        weights,
        scale_bias,
    }
}

pub fn f32_element(rng: &mut ChaCha8Rng) -> f32 {
    rng.gen_range(-1.0f32..1.0)
}

pub fn f16_element(rng: &mut ChaCha8Rng) -> f16 {
    f16::from_f32(rng.gen_range(-1.0f32..1.0))
}

pub fn u8_element(rng: &mut ChaCha8Rng) -> u8 {
    rng.gen()
}

/// Option combinations exercised for every problem
pub fn option_grid() -> Vec<(bool, bool, bool)> {
    let mut grid = Vec::new();
    for weighted in [false, true] {
        for scale_bias in [false, true] {
            for normalize in [false, true] {
                grid.push((weighted, scale_bias, normalize));
            }
        }
    }
    grid
}

/// Borrow `problem` as lookup arguments with the given options
pub fn args<'a, I, In>(
    problem: &'a Problem<In>,
    indices: &'a [I],
    (weighted, scale_bias, normalize): (bool, bool, bool),
) -> LookupArgs<'a, I, In>
where
    I: IndexElement,
    In: EmbeddingElement,
{
    let mut args = LookupArgs::new(problem.block_size, &problem.table, indices, &problem.lengths)
        .normalize_by_lengths(normalize);
    // Keep the declared table size when block_size is zero
    args.data_size = problem.data_size;
    if weighted {
        args = args.with_weights(&problem.weights);
    }
    if scale_bias {
        args = args.with_scale_bias(&problem.scale_bias);
    }
    args
}
