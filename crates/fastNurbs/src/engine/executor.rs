//! Parallel axis pass for knot refinement.
//!
//! ## Purpose
//!
//! This module provides the parallel axis pass that is injected into the
//! `nurbs` crate's execution engine. Along one parameter dimension the
//! control grid splits into independent slabs; this pass refines them on all
//! available CPU cores. When there are fewer slabs than threads (always the
//! case for the last dimension), each slab is split into column chunks.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential axis pass.
//! * **Parallelism**: Uses `rayon` to zip source and target slabs, or to
//!   refine column chunks of a slab.
//! * **Deterministic**: The blend is applied per column with the same
//!   arithmetic as the sequential pass, so results are bit-identical.
//!
//! ## Key concepts
//!
//! * **Slab**: All control rows sharing one index along the dimensions after
//!   the refined one. Slabs never read each other.
//! * **Column chunk**: A contiguous range of scalars taken from every row of
//!   a slab. Columns never read each other either.
//! * **Integration**: Plugs into the `nurbs` executor via the `AxisPassFn`
//!   hook.
//!
//! ## Invariants
//!
//! * `src` holds a whole number of source slabs and `dst` the same number of
//!   target slabs.
//!
//! ## Non-goals
//!
//! * This module does not validate insertion requests (handled by `nurbs`).

// External dependencies
use num_traits::Float;
use rayon::prelude::*;

// Export dependencies from nurbs crate
use nurbs::internals::algorithms::insertion::AxisInsertion;

// ============================================================================
// Parallel Axis Pass
// ============================================================================

/// Narrowest column chunk worth a task of its own.
const MIN_COLUMNS: usize = 32;

/// Refine every slab of one axis in parallel.
pub fn axis_pass_parallel<T>(insertion: &AxisInsertion<'_, T>, src: &[T], dst: &mut [T])
where
    T: Float + Send + Sync,
{
    let source_slab_len = insertion.source_slab_len();
    let slabs = src.len() / source_slab_len.max(1);
    let threads = rayon::current_num_threads();

    if slabs >= threads || insertion.width < 2 * MIN_COLUMNS {
        src.par_chunks_exact(source_slab_len)
            .zip(dst.par_chunks_exact_mut(insertion.target_slab_len()))
            .for_each(|(s, d)| insertion.refine_slab(s, d));
        return;
    }

    let chunk = insertion.width.div_ceil(threads).max(MIN_COLUMNS);
    for (s, d) in src
        .chunks_exact(source_slab_len)
        .zip(dst.chunks_exact_mut(insertion.target_slab_len()))
    {
        refine_columns(insertion, chunk, s, d);
    }
}

/// Refine one slab as independent column chunks of at most `chunk` scalars.
fn refine_columns<T>(insertion: &AxisInsertion<'_, T>, chunk: usize, src: &[T], dst: &mut [T])
where
    T: Float + Send + Sync,
{
    let width = insertion.width;
    let target_rows = insertion.target_rows();

    let refined: Vec<(usize, usize, Vec<T>)> = (0..width.div_ceil(chunk))
        .into_par_iter()
        .map(|c| {
            let start = c * chunk;
            let columns = chunk.min(width - start);
            let narrow = AxisInsertion {
                width: columns,
                ..*insertion
            };

            let gathered: Vec<T> = src
                .chunks_exact(width)
                .flat_map(|row| &row[start..start + columns])
                .copied()
                .collect();
            let mut out = vec![T::zero(); target_rows * columns];

            narrow.refine_slab(&gathered, &mut out);
            (start, columns, out)
        })
        .collect();

    for (start, columns, out) in refined {
        for (row, values) in dst.chunks_exact_mut(width).zip(out.chunks_exact(columns)) {
            row[start..start + columns].copy_from_slice(values);
        }
    }
}
