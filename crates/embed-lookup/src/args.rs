//! Borrowed view over one lookup call's inputs
//!
//! Every buffer is caller-owned. The view carries the declared sizes next to
//! the slices so the shapes can be checked once, up front, before any output
//! is written.

use sparse_embed_core::{EmbeddingElement, Error, IndexElement, Result};

/// Inputs of one lookup-and-reduce call
///
/// Slices may be longer than their declared sizes; only the declared prefix
/// is read.
#[derive(Debug)]
pub struct LookupArgs<'a, I, In> {
    /// Width of one embedding row
    pub block_size: usize,
    /// Number of groups (output rows)
    pub output_size: usize,
    /// Number of indices consumed across all groups
    pub index_size: usize,
    /// Number of rows in the embedding table
    pub data_size: usize,
    /// Row-major `[data_size, block_size]` table
    pub input: &'a [In],
    pub indices: &'a [I],
    /// Number of consecutive indices per group
    pub lengths: &'a [i32],
    /// One weight per index, 1.0 when absent
    pub weights: Option<&'a [f32]>,
    /// Interleaved `(scale, bias)` per table row
    pub scale_bias: Option<&'a [f32]>,
    pub normalize_by_lengths: bool,
}

// Manual impls: the view is Copy whatever the element types are
impl<I, In> Clone for LookupArgs<'_, I, In> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, In> Copy for LookupArgs<'_, I, In> {}

impl<'a, I: IndexElement, In: EmbeddingElement> LookupArgs<'a, I, In> {
    /// Build a view whose sizes are taken from the slices themselves
    ///
    /// `data_size` is `input.len() / block_size` (zero when `block_size` is
    /// zero), `index_size` is `indices.len()` and `output_size` is
    /// `lengths.len()`.
    pub fn new(block_size: usize, input: &'a [In], indices: &'a [I], lengths: &'a [i32]) -> Self {
        let data_size = if block_size == 0 { 0 } else { input.len() / block_size };
        Self {
            block_size,
            output_size: lengths.len(),
            index_size: indices.len(),
            data_size,
            input,
            indices,
            lengths,
            weights: None,
            scale_bias: None,
            normalize_by_lengths: false,
        }
    }

    /// Build a view from explicit, caller-asserted sizes
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        block_size: usize,
        output_size: usize,
        index_size: usize,
        data_size: usize,
        input: &'a [In],
        indices: &'a [I],
        lengths: &'a [i32],
        weights: Option<&'a [f32]>,
        scale_bias: Option<&'a [f32]>,
        normalize_by_lengths: bool,
    ) -> Self {
        Self {
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
        }
    }

    pub fn with_weights(mut self, weights: &'a [f32]) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn with_scale_bias(mut self, scale_bias: &'a [f32]) -> Self {
        self.scale_bias = Some(scale_bias);
        self
    }

    pub fn normalize_by_lengths(mut self, normalize: bool) -> Self {
        self.normalize_by_lengths = normalize;
        self
    }

    /// Number of output elements the call writes
    pub fn output_len(&self) -> Result<usize> {
        self.output_size
            .checked_mul(self.block_size)
            .ok_or_else(|| Error::shape_overflow("out", self.output_size, self.block_size))
    }

    /// Check every buffer against its declared shape
    pub fn validate(&self, out_len: usize) -> Result<()> {
        let table_len = self
            .data_size
            .checked_mul(self.block_size)
            .ok_or_else(|| Error::shape_overflow("input", self.data_size, self.block_size))?;
        check_len("input", table_len, self.input.len())?;
        check_len("indices", self.index_size, self.indices.len())?;
        check_len("lengths", self.output_size, self.lengths.len())?;
        if let Some(weights) = self.weights {
            check_len("weights", self.index_size, weights.len())?;
        }
        if let Some(scale_bias) = self.scale_bias {
            let required = self
                .data_size
                .checked_mul(2)
                .ok_or_else(|| Error::shape_overflow("scale_bias", self.data_size, 2))?;
            check_len("scale_bias", required, scale_bias.len())?;
        }
        check_len("out", self.output_len()?, out_len)
    }

    /// Declared length of group `group`
    #[inline(always)]
    pub fn group_length(&self, group: usize) -> Result<usize> {
        let length = self.lengths[group];
        usize::try_from(length).map_err(|_| Error::NegativeLength { group, length })
    }

    /// Row addressed by the index at cursor `position`
    #[inline(always)]
    pub fn row_index(&self, position: usize) -> Result<usize> {
        let raw = self.indices[position];
        raw.to_row(self.data_size).ok_or(Error::IndexOutOfRange {
            position,
            index: raw.to_i64(),
            data_size: self.data_size,
        })
    }

    /// Table row `row`; `row` must be below `data_size`
    #[inline(always)]
    pub fn row(&self, row: usize) -> &'a [In] {
        let start = row * self.block_size;
        &self.input[start..start + self.block_size]
    }
}

fn check_len(buffer: &'static str, required: usize, actual: usize) -> Result<()> {
    if actual < required {
        return Err(Error::buffer_too_small(buffer, required, actual));
    }
    Ok(())
}
