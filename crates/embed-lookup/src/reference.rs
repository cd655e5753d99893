//! Reference lookup-and-reduce engine
//!
//! One generic loop implements the whole contract. It is parameterised by
//! the row primitives it runs on, so the accelerated path reuses exactly the
//! same validation and control flow with vectorized row operations.

use crate::args::LookupArgs;
use num_traits::Zero;
use sparse_embed_core::{
    EmbeddingElement, Error, IndexElement, OutputElement, Result, RowPrimitives, ScalarBackend,
};

/// Run the lookup-and-reduce loop on `backend`
///
/// For each group `m`, the output row is zeroed, then the next
/// `lengths[m]` indices are consumed from one running cursor:
///
/// ```text
/// w = weights[c] or 1
/// if scale_bias: b = w * bias[idx]; w = w * scale[idx]
/// out[m] += w * input[idx]
/// if scale_bias: out[m] += b
/// ```
///
/// and with `normalize_by_lengths` a non-empty group is scaled by
/// `1 / lengths[m]`. The bias is computed from the weight before it is
/// rescaled.
///
/// # Errors
///
/// - [`Error::BufferTooSmall`] / [`Error::InvalidParameter`] if a buffer does
///   not match its declared shape (nothing is written)
/// - [`Error::NegativeLength`] for a negative group length
/// - [`Error::CursorOverrun`] when a group reaches past `index_size`
/// - [`Error::IndexOutOfRange`] for an index outside `[0, data_size)`
/// - [`Error::LengthMismatch`] when the lengths do not sum to `index_size`
pub fn reduce<I, In, Out, P>(backend: &P, args: &LookupArgs<'_, I, In>, out: &mut [Out]) -> Result<()>
where
    I: IndexElement,
    In: EmbeddingElement,
    Out: OutputElement,
    P: RowPrimitives<In, Out>,
{
    args.validate(out.len())?;

    let block_size = args.block_size;
    let index_size = args.index_size;
    let mut current = 0usize;

    for m in 0..args.output_size {
        let out_row = &mut out[m * block_size..(m + 1) * block_size];
        out_row.fill(Out::zero());

        let length = args.group_length(m)?;
        for _ in 0..length {
            if current >= index_size {
                return Err(Error::CursorOverrun {
                    group: m,
                    cursor: current,
                    index_size,
                });
            }
            let idx = args.row_index(current)?;

            if current + 1 < index_size {
                if let Some(next) = args.indices[current + 1].to_row(args.data_size) {
                    backend.prefetch_row(args.row(next));
                }
            }

            let mut w = args.weights.map_or(1.0f32, |weights| weights[current]);
            let mut b = 0.0f32;
            if let Some(scale_bias) = args.scale_bias {
                b = w * scale_bias[2 * idx + 1];
                w *= scale_bias[2 * idx];
            }

            backend.typed_axpy(Out::from_f32(w), args.row(idx), out_row);

            if args.scale_bias.is_some() {
                backend.add_scalar(Out::from_f32(b), out_row);
            }

            current += 1;
        }

        if args.normalize_by_lengths && length > 0 {
            backend.scale(Out::from_f32(1.0 / length as f32), out_row);
        }
    }

    if current != index_size {
        return Err(Error::LengthMismatch {
            consumed: current,
            index_size,
        });
    }
    Ok(())
}

/// Portable reference lookup on the scalar backend
///
/// Correct for every input; the dispatch facade falls back to it whenever no
/// accelerated strategy applies.
pub fn reference_lookup<I, In, Out>(args: &LookupArgs<'_, I, In>, out: &mut [Out]) -> Result<()>
where
    I: IndexElement,
    In: EmbeddingElement,
    Out: OutputElement,
{
    reduce(&ScalarBackend::new(), args, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sparse_embed_core::f16;

    const TABLE: [f32; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    fn run(args: &LookupArgs<'_, i32, f32>) -> Result<Vec<f32>> {
        let mut out = vec![f32::NAN; args.output_len()?];
        reference_lookup(args, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_plain_sum() {
        let args = LookupArgs::new(2, &TABLE, &[0, 1, 2], &[2, 1]);
        assert_eq!(run(&args).unwrap(), vec![4.0, 6.0, 5.0, 6.0]);
    }

    #[test]
    fn test_normalized_sum() {
        let args = LookupArgs::new(2, &TABLE, &[0, 1, 2], &[2, 1]).normalize_by_lengths(true);
        assert_eq!(run(&args).unwrap(), vec![2.0, 3.0, 5.0, 6.0]);
    }

    #[test]
    fn test_weighted_sum() {
        let weights = [2.0f32, 0.5, -1.0];
        let args = LookupArgs::new(2, &TABLE, &[0, 1, 2], &[2, 1]).with_weights(&weights);
        assert_eq!(run(&args).unwrap(), vec![3.5, 6.0, -5.0, -6.0]);
    }

    #[test]
    fn test_empty_group_is_zero_even_when_normalized() {
        let args = LookupArgs::new(2, &TABLE, &[1, 2], &[1, 0, 1]).normalize_by_lengths(true);
        assert_eq!(run(&args).unwrap(), vec![3.0, 4.0, 0.0, 0.0, 5.0, 6.0]);
    }

    #[test]
    fn test_repeated_indices() {
        let args = LookupArgs::new(2, &TABLE, &[2, 2, 2], &[3]);
        assert_eq!(run(&args).unwrap(), vec![15.0, 18.0]);
    }

    #[test]
    fn test_scale_bias_uses_original_weight_for_bias() {
        let table: [u8; 4] = [10, 20, 30, 40];
        let scale_bias = [0.5f32, 1.0, 2.0, -3.0];
        let weights = [2.0f32, 1.0];
        let args = LookupArgs::new(2, &table, &[0i32, 1], &[1, 1])
            .with_weights(&weights)
            .with_scale_bias(&scale_bias);

        let mut out = vec![0.0f32; 4];
        reference_lookup(&args, &mut out).unwrap();

        // row 0: 2*0.5*[10,20] + 2*1 ; row 1: 1*2*[30,40] + 1*(-3)
        assert_eq!(out, vec![12.0, 22.0, 57.0, 77.0]);
    }

    #[test]
    fn test_scale_bias_on_float_table() {
        let scale_bias = [1.0f32, 0.5, 1.0, 0.5, 1.0, 0.5];
        let args = LookupArgs::new(2, &TABLE, &[0, 2], &[2]).with_scale_bias(&scale_bias);
        assert_eq!(run(&args).unwrap(), vec![7.0, 9.0]);
    }

    #[test]
    fn test_f16_table_and_f64_output() {
        let table: Vec<f16> = TABLE.iter().map(|&v| f16::from_f32(v)).collect();
        let args = LookupArgs::new(2, &table, &[0i64, 1, 2], &[3]).normalize_by_lengths(true);
        let mut out = vec![0.0f64; 2];
        reference_lookup(&args, &mut out).unwrap();
        assert_relative_eq!(out[0], 3.0, epsilon = 1e-6);
        assert_relative_eq!(out[1], 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let args = LookupArgs::new(2, &TABLE, &[0, 3, 1], &[3]);
        assert_eq!(
            run(&args),
            Err(Error::IndexOutOfRange {
                position: 1,
                index: 3,
                data_size: 3
            })
        );

        let args = LookupArgs::new(2, &TABLE, &[0, 1, -2], &[1, 2]);
        assert!(matches!(run(&args), Err(Error::IndexOutOfRange { index: -2, .. })));
    }

    #[test]
    fn test_lengths_overrunning_indices_fail() {
        let args = LookupArgs::new(2, &TABLE, &[0, 1, 2], &[2, 2]);
        assert_eq!(
            run(&args),
            Err(Error::CursorOverrun {
                group: 1,
                cursor: 3,
                index_size: 3
            })
        );
    }

    #[test]
    fn test_lengths_undercounting_indices_fail() {
        let args = LookupArgs::new(2, &TABLE, &[0, 1, 2], &[1, 1]);
        assert_eq!(
            run(&args),
            Err(Error::LengthMismatch {
                consumed: 2,
                index_size: 3
            })
        );
    }

    #[test]
    fn test_negative_length_fails() {
        let args = LookupArgs::new(2, &TABLE, &[0], &[1, -1]);
        assert_eq!(
            run(&args),
            Err(Error::NegativeLength {
                group: 1,
                length: -1
            })
        );
    }

    #[test]
    fn test_degenerate_sizes() {
        // No groups, no indices
        let args = LookupArgs::new(2, &TABLE, &[] as &[i32], &[]);
        assert_eq!(run(&args).unwrap(), Vec::<f32>::new());

        // No groups but leftover indices
        let args = LookupArgs::new(2, &TABLE, &[0], &[]);
        assert!(matches!(run(&args), Err(Error::LengthMismatch { consumed: 0, index_size: 1 })));

        // Zero-width rows still validate indices
        let empty: [f32; 0] = [];
        let args = LookupArgs::from_parts(0, 1, 1, 3, &empty, &[2i32], &[1], None, None, false);
        assert_eq!(run(&args).unwrap(), Vec::<f32>::new());
        let args = LookupArgs::from_parts(0, 1, 1, 3, &empty, &[5i32], &[1], None, None, false);
        assert!(matches!(run(&args), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_only_declared_prefix_is_written() {
        let args = LookupArgs::new(2, &TABLE, &[0], &[1]);
        let mut out = vec![-7.0f32; 4];
        reference_lookup(&args, &mut out).unwrap();
        assert_eq!(out, vec![1.0, 2.0, -7.0, -7.0]);
    }

    #[test]
    fn test_short_output_writes_nothing() {
        let args = LookupArgs::new(2, &TABLE, &[0, 1, 2], &[2, 1]);
        let mut out = vec![-7.0f32; 3];
        assert!(matches!(
            reference_lookup(&args, &mut out),
            Err(Error::BufferTooSmall { buffer: "out", .. })
        ));
        assert_eq!(out, vec![-7.0; 3]);
    }
}
