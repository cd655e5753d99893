//! Pooling a batch of bags over an 8-bit quantized embedding table
//!
//! Each table row is stored as u8 codes plus a per-row (scale, bias) pair.
//! The lookup dequantizes on the fly and mean-pools every bag.

use anyhow::Result;
use sparse_embed_lookup::{embedding_lookup_i64_u8_f32, Dispatcher};

const BLOCK_SIZE: usize = 16;
const DATA_SIZE: usize = 6;

/// Quantize one f32 row to u8 codes, returning the codes and (scale, bias)
fn quantize_row(row: &[f32]) -> (Vec<u8>, [f32; 2]) {
    let min = row.iter().copied().fold(f32::INFINITY, f32::min);
    let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let scale = if max > min { (max - min) / 255.0 } else { 1.0 };
    let codes = row.iter().map(|&v| ((v - min) / scale).round() as u8).collect();
    (codes, [scale, min])
}

fn main() -> Result<()> {
    println!("=== Quantized Embedding Bag Demo ===\n");

    let mut table = Vec::with_capacity(BLOCK_SIZE * DATA_SIZE);
    let mut scale_bias = Vec::with_capacity(2 * DATA_SIZE);
    for r in 0..DATA_SIZE {
        let row: Vec<f32> = (0..BLOCK_SIZE)
            .map(|j| ((r * BLOCK_SIZE + j) as f32 * 0.37).sin())
            .collect();
        let (codes, params) = quantize_row(&row);
        table.extend(codes);
        scale_bias.extend(params);
    }

    // Three bags: {0, 2, 5}, {} and {1, 1}
    let indices = [0i64, 2, 5, 1, 1];
    let lengths = [3, 0, 2];
    let mut pooled = vec![0.0f32; lengths.len() * BLOCK_SIZE];

    embedding_lookup_i64_u8_f32(
        BLOCK_SIZE,
        lengths.len(),
        indices.len(),
        DATA_SIZE,
        &table,
        &indices,
        &lengths,
        None,
        Some(&scale_bias),
        true,
        &mut pooled,
    )?;

    let strategy = Dispatcher::global().selected_strategy::<i64, u8, f32>(BLOCK_SIZE);
    println!("Strategy for block_size {BLOCK_SIZE}: {strategy}\n");

    for (bag, row) in pooled.chunks(BLOCK_SIZE).enumerate() {
        let preview: Vec<String> = row.iter().take(4).map(|v| format!("{v:+.3}")).collect();
        println!("bag {bag} (length {}): [{} ...]", lengths[bag], preview.join(", "));
    }

    Ok(())
}
