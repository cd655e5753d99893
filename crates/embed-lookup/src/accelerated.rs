//! AVX2 + FMA lookup strategy
//!
//! Runs the shared reduction loop on the AVX2 row primitives. Declines,
//! before touching the output, when the CPU or the build lacks the
//! instructions or when a row is not a whole number of f32 vectors.

use crate::args::LookupArgs;
use crate::dispatch::Outcome;
use crate::reference::reduce;
use sparse_embed_core::{Avx2Backend, EmbeddingElement, IndexElement, Result, RowPrimitives};

/// f32 lanes per AVX2 vector
pub const AVX2_LANES: usize = 8;

/// Name the dispatch facade reports for this strategy
pub const AVX2_FMA_STRATEGY: &str = "avx2_fma";

/// Whether the AVX2 strategy would run for rows of `block_size`
pub fn is_applicable(block_size: usize) -> bool {
    block_size % AVX2_LANES == 0 && Avx2Backend::is_available()
}

/// AVX2 + FMA implementation of the lookup contract
///
/// Returns [`Outcome::NotApplicable`] instead of an error when it cannot
/// run, so the caller can fall back to the reference engine.
pub fn avx2_fma_lookup<I, In>(args: &LookupArgs<'_, I, In>, out: &mut [f32]) -> Result<Outcome>
where
    I: IndexElement,
    In: EmbeddingElement,
    Avx2Backend: RowPrimitives<In, f32>,
{
    if !is_applicable(args.block_size) {
        return Ok(Outcome::NotApplicable);
    }
    let Some(backend) = Avx2Backend::try_new() else {
        return Ok(Outcome::NotApplicable);
    };

    reduce(&backend, args, out)?;
    Ok(Outcome::Completed)
}
