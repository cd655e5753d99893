//! Dispatch facade over the lookup strategies
//!
//! Every `(index, input, output)` specialization carries an ordered list of
//! accelerated candidates sharing one signature. The first candidate that
//! completes wins; when all decline, or the configuration pins the reference
//! engine, the call falls through to the reference engine, which never
//! declines. The facade itself computes nothing.
//!
//! ```text
//! caller -> Dispatcher -> [avx2_fma] -> base (reference engine)
//! ```

use crate::accelerated;
use crate::args::LookupArgs;
use crate::config::LookupConfig;
use crate::reference::reference_lookup;
use sparse_embed_core::{f16, EmbeddingElement, IndexElement, OutputElement, Result};
use tracing::trace;

/// Result of offering a call to one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The strategy ran and wrote the output
    Completed,
    /// The strategy cannot handle these inputs; nothing was written
    NotApplicable,
}

/// Signature shared by every lookup strategy
pub type LookupFn<I, In, Out> = fn(&LookupArgs<'_, I, In>, &mut [Out]) -> Result<Outcome>;

/// Name reported when the reference engine runs the call
pub const BASE_STRATEGY: &str = "base";

/// One accelerated implementation of the lookup contract
pub struct Strategy<I, In, Out> {
    pub name: &'static str,
    /// Whether the strategy would run for a given `block_size`; `kernel`
    /// declines exactly when this is false
    pub applicable: fn(usize) -> bool,
    pub kernel: LookupFn<I, In, Out>,
}

/// A specialized lookup kernel for index type `Self`
///
/// Implemented for the six supported combinations of `i32`/`i64` indices
/// with `f32`/`f16`/`u8` tables and `f32` output.
pub trait EmbeddingLookup<In: EmbeddingElement, Out: OutputElement>: IndexElement {
    /// Name of the specialization, e.g. `embedding_lookup_i32_f16_f32`
    const KERNEL_NAME: &'static str;

    /// Accelerated candidates in preference order, tried before the
    /// reference engine
    fn strategies() -> [Strategy<Self, In, Out>; 1];
}

/// Selects and runs a lookup strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    config: LookupConfig,
}

impl Dispatcher {
    pub fn new(config: LookupConfig) -> Self {
        Self { config }
    }

    /// Dispatcher following the process-wide backend preference
    pub fn global() -> Self {
        Self::new(LookupConfig::from_env())
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Name of the strategy that would run for rows of `block_size`
    pub fn selected_strategy<I, In, Out>(&self, block_size: usize) -> &'static str
    where
        I: EmbeddingLookup<In, Out>,
        In: EmbeddingElement,
        Out: OutputElement,
    {
        if !self.config.preference.allows_accelerated() {
            return BASE_STRATEGY;
        }
        I::strategies()
            .iter()
            .find(|s| (s.applicable)(block_size))
            .map_or(BASE_STRATEGY, |s| s.name)
    }

    /// Run the lookup and report which strategy completed it
    pub fn run<I, In, Out>(&self, args: &LookupArgs<'_, I, In>, out: &mut [Out]) -> Result<&'static str>
    where
        I: EmbeddingLookup<In, Out>,
        In: EmbeddingElement,
        Out: OutputElement,
    {
        if self.config.preference.allows_accelerated() {
            for strategy in I::strategies().iter() {
                match (strategy.kernel)(args, out)? {
                    Outcome::Completed => {
                        trace_completed::<I, In, Out>(strategy.name, args.block_size);
                        return Ok(strategy.name);
                    }
                    Outcome::NotApplicable => {
                        trace!(kernel = I::KERNEL_NAME, strategy = strategy.name, "Strategy declined");
                    }
                }
            }
        }

        reference_lookup(args, out)?;
        trace_completed::<I, In, Out>(BASE_STRATEGY, args.block_size);
        Ok(BASE_STRATEGY)
    }

    /// Run the lookup on the selected strategy
    pub fn lookup<I, In, Out>(&self, args: &LookupArgs<'_, I, In>, out: &mut [Out]) -> Result<()>
    where
        I: EmbeddingLookup<In, Out>,
        In: EmbeddingElement,
        Out: OutputElement,
    {
        self.run(args, out).map(|_| ())
    }
}

fn trace_completed<I, In, Out>(strategy: &'static str, block_size: usize)
where
    I: EmbeddingLookup<In, Out>,
    In: EmbeddingElement,
    Out: OutputElement,
{
    trace!(
        kernel = I::KERNEL_NAME,
        index = <I as IndexElement>::NAME,
        input = In::NAME,
        output = Out::NAME,
        strategy,
        block_size,
        "Embedding lookup completed"
    );
}

/// Sparse embedding lookup-and-reduce, dispatched to the fastest strategy
///
/// Group `m` of `out` receives the (weighted, optionally dequantized and
/// length-normalized) sum of the rows addressed by its `lengths[m]` indices.
/// See [`reduce`](crate::reduce) for the exact semantics and errors.
#[allow(clippy::too_many_arguments)]
pub fn embedding_lookup<I, In>(
    block_size: usize,
    output_size: usize,
    index_size: usize,
    data_size: usize,
    input: &[In],
    indices: &[I],
    lengths: &[i32],
    weights: Option<&[f32]>,
    scale_bias: Option<&[f32]>,
    normalize_by_lengths: bool,
    out: &mut [f32],
) -> Result<()>
where
    I: EmbeddingLookup<In, f32>,
    In: EmbeddingElement,
{
    let args = LookupArgs::from_parts(
        block_size,
        output_size,
        index_size,
        data_size,
        input,
        indices,
        lengths,
        weights,
        scale_bias,
        normalize_by_lengths,
    );
    Dispatcher::global().lookup(&args, out)
}

// Named entry points for each specialization: the dispatched kernel and its
// `_base` reference counterpart
macro_rules! embedding_specialization {
    ($index:ty, $input:ty, $output:ty, $name:ident, $base:ident) => {
        impl EmbeddingLookup<$input, $output> for $index {
            const KERNEL_NAME: &'static str = stringify!($name);

            fn strategies() -> [Strategy<Self, $input, $output>; 1] {
                [Strategy {
                    name: accelerated::AVX2_FMA_STRATEGY,
                    applicable: accelerated::is_applicable,
                    kernel: accelerated::avx2_fma_lookup::<$index, $input>,
                }]
            }
        }

        #[allow(clippy::too_many_arguments)]
        pub fn $base(
            block_size: usize,
            output_size: usize,
            index_size: usize,
            data_size: usize,
            input: &[$input],
            indices: &[$index],
            lengths: &[i32],
            weights: Option<&[f32]>,
            scale_bias: Option<&[f32]>,
            normalize_by_lengths: bool,
            out: &mut [$output],
        ) -> Result<()> {
            let args = LookupArgs::from_parts(
                block_size,
                output_size,
                index_size,
                data_size,
                input,
                indices,
                lengths,
                weights,
                scale_bias,
                normalize_by_lengths,
            );
            reference_lookup(&args, out)
        }

        #[allow(clippy::too_many_arguments)]
        pub fn $name(
            block_size: usize,
            output_size: usize,
            index_size: usize,
            data_size: usize,
            input: &[$input],
            indices: &[$index],
            lengths: &[i32],
            weights: Option<&[f32]>,
            scale_bias: Option<&[f32]>,
            normalize_by_lengths: bool,
            out: &mut [$output],
        ) -> Result<()> {
            embedding_lookup::<$index, $input>(
                block_size,
                output_size,
                index_size,
                data_size,
                input,
                indices,
                lengths,
                weights,
                scale_bias,
                normalize_by_lengths,
                out,
            )
        }
    };
}

embedding_specialization!(i32, f32, f32, embedding_lookup_i32_f32_f32, embedding_lookup_i32_f32_f32_base);
embedding_specialization!(i64, f32, f32, embedding_lookup_i64_f32_f32, embedding_lookup_i64_f32_f32_base);
embedding_specialization!(i32, f16, f32, embedding_lookup_i32_f16_f32, embedding_lookup_i32_f16_f32_base);
embedding_specialization!(i64, f16, f32, embedding_lookup_i64_f16_f32, embedding_lookup_i64_f16_f32_base);
embedding_specialization!(i32, u8, f32, embedding_lookup_i32_u8_f32, embedding_lookup_i32_u8_f32_base);
embedding_specialization!(i64, u8, f32, embedding_lookup_i64_u8_f32, embedding_lookup_i64_u8_f32_base);
