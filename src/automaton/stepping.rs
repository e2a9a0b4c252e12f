//! Generation stepping with the rock-paper-scissors dominance rule.
//!
//! Every step reads from an immutable source grid and writes into a separate
//! destination buffer, so no cell ever observes another cell's new value and
//! evaluation order does not affect the result.
//!
//! For each cell:
//! - resolve its in-bounds neighbors for the chosen neighborhood
//! - take the consensus (mode, random tie-break); with no neighbors the cell
//!   is its own consensus
//! - the cell becomes the consensus only if the consensus is its conqueror

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::consensus::Tally;
use super::grid::Grid;
use super::neighborhood::{neighbor_values, NeighborhoodKind, LARGE_MOORE_OFFSETS};
use crate::error::{AutomatonError, Result};

/// Summary of one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Cells whose value differs from the previous generation.
    pub changed: usize,
}

impl StepReport {
    pub fn is_unchanged(&self) -> bool {
        self.changed == 0
    }
}

/// Compute the next generation of `grid` into a new grid.
pub fn step<R: Rng + ?Sized>(grid: &Grid, kind: NeighborhoodKind, rng: &mut R) -> Result<Grid> {
    let mut next = Grid::unseeded(grid.dimension())?;
    step_into(grid, &mut next, kind, rng)?;
    Ok(next)
}

/// Compute the next generation of `src` into `dst`, drawing every random
/// choice from `rng`.
///
/// On error `dst` may be partially written; `src` is never modified.
pub fn step_into<R: Rng + ?Sized>(
    src: &Grid,
    dst: &mut Grid,
    kind: NeighborhoodKind,
    rng: &mut R,
) -> Result<StepReport> {
    check_buffers(src, dst)?;

    let d = src.dimension() as usize;
    let mut scratch = Vec::with_capacity(LARGE_MOORE_OFFSETS.len());
    let mut changed = 0;

    for (y, row) in dst.cells_mut().chunks_mut(d).enumerate() {
        changed += step_row(src, y as i16, kind, rng, &mut scratch, row)?;
    }

    Ok(StepReport { changed })
}

/// Like [`step_into`], but each row draws from its own `ChaCha8Rng` stream
/// derived from `seed`. Produces exactly the same grid as
/// [`step_parallel`] for the same seed.
pub fn step_seeded(
    src: &Grid,
    dst: &mut Grid,
    kind: NeighborhoodKind,
    seed: u64,
) -> Result<StepReport> {
    check_buffers(src, dst)?;

    let d = src.dimension() as usize;
    let mut scratch = Vec::with_capacity(LARGE_MOORE_OFFSETS.len());
    let mut changed = 0;

    for (y, row) in dst.cells_mut().chunks_mut(d).enumerate() {
        let mut rng = row_rng(seed, y);
        changed += step_row(src, y as i16, kind, &mut rng, &mut scratch, row)?;
    }

    Ok(StepReport { changed })
}

/// Evaluate rows concurrently on `pool`. Rows share only the read-only
/// source grid; each owns its output row and its random stream, so the
/// result does not depend on the number of threads.
pub fn step_parallel(
    src: &Grid,
    dst: &mut Grid,
    kind: NeighborhoodKind,
    seed: u64,
    pool: &rayon::ThreadPool,
) -> Result<StepReport> {
    check_buffers(src, dst)?;

    let d = src.dimension() as usize;
    let per_row: Vec<usize> = pool.install(|| {
        dst.cells_mut()
            .par_chunks_mut(d)
            .enumerate()
            .map(|(y, row)| {
                let mut rng = row_rng(seed, y);
                let mut scratch = Vec::with_capacity(LARGE_MOORE_OFFSETS.len());
                step_row(src, y as i16, kind, &mut rng, &mut scratch, row)
            })
            .collect::<Result<Vec<usize>>>()
    })?;

    Ok(StepReport {
        changed: per_row.iter().sum(),
    })
}

/// Random stream for row `y` of a seeded step.
fn row_rng(seed: u64, y: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(y as u64);
    rng
}

/// Reject mismatched buffers and malformed source grids before any cell is
/// evaluated.
fn check_buffers(src: &Grid, dst: &Grid) -> Result<()> {
    if src.dimension() != dst.dimension() {
        return Err(AutomatonError::DimensionMismatch {
            source_dim: src.dimension(),
            target_dim: dst.dimension(),
        });
    }
    src.validate()
}

/// Write the next values of row `y` into `out`, returning how many changed.
fn step_row<R: Rng + ?Sized>(
    src: &Grid,
    y: i16,
    kind: NeighborhoodKind,
    rng: &mut R,
    scratch: &mut Vec<u8>,
    out: &mut [u8],
) -> Result<usize> {
    let mut changed = 0;

    for (x, slot) in out.iter_mut().enumerate() {
        let x = x as i16;
        let point = src.cell(x, y)?;

        neighbor_values(src, x, y, kind, rng, scratch);
        let tally =
            Tally::from_codes(scratch).map_err(|code| AutomatonError::InvalidState { x, y, code })?;

        let consensus = tally.mode(rng).unwrap_or(point);
        let next = point.transition(consensus);
        if next != point {
            changed += 1;
        }
        *slot = next.code();
    }

    Ok(changed)
}
