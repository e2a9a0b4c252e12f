//! Neighborhood topologies and in-bounds neighbor resolution.
//!
//! Candidates are generated from a fixed offset table per kind and then
//! filtered against the grid bounds; no wrap-around. `RandomVonNeumann`
//! draws one of the four Von Neumann offsets *before* filtering, so a cell
//! on an edge or corner may end up with no neighbor at all.

use rand::Rng;
use serde::Deserialize;

use super::grid::{in_bounds, index_of, Grid};

/// Which cells count as neighbors of a given cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum NeighborhoodKind {
    /// 8-connected, Chebyshev distance 1.
    Moore,
    /// 4-connected, Manhattan distance 1.
    #[serde(alias = "Von")]
    VonNeumann,
    /// 24 cells of the 5×5 square around the cell.
    #[serde(alias = "LM")]
    LargeMoore,
    /// A single Von Neumann neighbor chosen at random per evaluation.
    #[serde(alias = "Ran")]
    RandomVonNeumann,
}

impl NeighborhoodKind {
    /// Whether resolving this neighborhood consumes randomness.
    pub fn is_random(self) -> bool {
        matches!(self, NeighborhoodKind::RandomVonNeumann)
    }
}

pub static VON_NEUMANN_OFFSETS: [(i16, i16); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

pub static MOORE_OFFSETS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub static LARGE_MOORE_OFFSETS: [(i16, i16); 24] = large_moore_offsets();

const fn large_moore_offsets() -> [(i16, i16); 24] {
    let mut out = [(0i16, 0i16); 24];
    let mut n = 0;
    let mut dy = -2i16;
    while dy <= 2 {
        let mut dx = -2i16;
        while dx <= 2 {
            // Skip the center cell
            if dx != 0 || dy != 0 {
                out[n] = (dx, dy);
                n += 1;
            }
            dx += 1;
        }
        dy += 1;
    }
    out
}

/// Candidate offsets for `kind`, before bounds filtering.
pub fn candidate_offsets<R: Rng + ?Sized>(
    kind: NeighborhoodKind,
    rng: &mut R,
) -> &'static [(i16, i16)] {
    match kind {
        NeighborhoodKind::Moore => &MOORE_OFFSETS[..],
        NeighborhoodKind::VonNeumann => &VON_NEUMANN_OFFSETS[..],
        NeighborhoodKind::LargeMoore => &LARGE_MOORE_OFFSETS[..],
        NeighborhoodKind::RandomVonNeumann => {
            let pick = rng.gen_range(0..VON_NEUMANN_OFFSETS.len());
            &VON_NEUMANN_OFFSETS[pick..pick + 1]
        }
    }
}

/// Collect the raw codes of the in-bounds neighbors of `(x, y)` into `out`.
///
/// `out` is cleared first so callers can reuse one buffer across a whole
/// generation. Codes are copied as stored; interpreting them is up to the
/// caller.
pub fn neighbor_values<R: Rng + ?Sized>(
    grid: &Grid,
    x: i16,
    y: i16,
    kind: NeighborhoodKind,
    rng: &mut R,
    out: &mut Vec<u8>,
) {
    out.clear();
    let cells = grid.cells();
    for &(dx, dy) in candidate_offsets(kind, rng) {
        let nx = x + dx;
        let ny = y + dy;
        if in_bounds(grid, nx, ny) {
            out.push(cells[index_of(grid, nx, ny)]);
        }
    }
}

/// Allocating form of [`neighbor_values`].
pub fn neighbors<R: Rng + ?Sized>(
    grid: &Grid,
    x: i16,
    y: i16,
    kind: NeighborhoodKind,
    rng: &mut R,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(LARGE_MOORE_OFFSETS.len());
    neighbor_values(grid, x, y, kind, rng, &mut out);
    out
}
