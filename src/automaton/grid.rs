//! Grid storage, initialization and cell access helpers.

use rand::Rng;
use serde::Deserialize;

use super::cell::{Cell, UNSEEDED};
use crate::error::{AutomatonError, Result};

/// How a freshly created grid is populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum StartPattern {
    /// Contiguous patches of each state grown around random seed points.
    #[serde(alias = "Clus")]
    Clustered,
    /// Every cell drawn independently and uniformly.
    #[serde(alias = "Rand")]
    Random,
}

/// A square grid of raw cell codes, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dimension: i16,
    cells: Vec<u8>,
}

impl Grid {
    /// A grid of the given side with every cell `UNSEEDED`.
    pub fn unseeded(dimension: i16) -> Result<Self> {
        if dimension <= 0 {
            return Err(AutomatonError::InvalidConfig("grid dimension must be positive"));
        }
        let size = dimension as usize * dimension as usize;
        Ok(Grid {
            dimension,
            cells: vec![UNSEEDED; size],
        })
    }

    /// A grid where every cell holds `cell`.
    pub fn filled(dimension: i16, cell: Cell) -> Result<Self> {
        let mut grid = Grid::unseeded(dimension)?;
        grid.cells.fill(cell.code());
        Ok(grid)
    }

    /// Wrap raw codes, row-major. Codes are not validated here; a step
    /// reports any invalid one it encounters.
    pub fn from_codes(dimension: i16, cells: Vec<u8>) -> Result<Self> {
        if dimension <= 0 {
            return Err(AutomatonError::InvalidConfig("grid dimension must be positive"));
        }
        if cells.len() != dimension as usize * dimension as usize {
            return Err(AutomatonError::InvalidConfig("cell count does not match dimension"));
        }
        Ok(Grid { dimension, cells })
    }

    /// Build a grid from rows of live cells; the rows must form a square.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self> {
        let dimension = i16::try_from(rows.len())
            .map_err(|_| AutomatonError::InvalidConfig("grid too large"))?;
        if rows.iter().any(|row| row.len() != rows.len()) {
            return Err(AutomatonError::InvalidConfig("rows must form a square"));
        }
        let cells = rows.iter().flatten().map(|cell| cell.code()).collect();
        Grid::from_codes(dimension, cells)
    }

    #[inline]
    pub fn dimension(&self) -> i16 {
        self.dimension
    }

    /// Raw codes, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Raw code at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i16, y: i16) -> Option<u8> {
        if in_bounds(self, x, y) {
            Some(self.cells[index_of(self, x, y)])
        } else {
            None
        }
    }

    /// Live state at `(x, y)`. Fails with `InvalidState` when the code is not
    /// a live state and with `InvalidConfig` outside the grid.
    pub fn cell(&self, x: i16, y: i16) -> Result<Cell> {
        let code = self
            .get(x, y)
            .ok_or(AutomatonError::InvalidConfig("coordinate outside grid"))?;
        Cell::try_from(code).map_err(|_| AutomatonError::InvalidState { x, y, code })
    }

    /// Store a live state at `(x, y)`.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> Result<()> {
        if !in_bounds(self, x, y) {
            return Err(AutomatonError::InvalidConfig("coordinate outside grid"));
        }
        let idx = index_of(self, x, y);
        self.cells[idx] = cell.code();
        Ok(())
    }

    /// Population of each live state, indexed by `Cell::ordinal`.
    pub fn census(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for &code in &self.cells {
            if let Ok(cell) = Cell::try_from(code) {
                counts[cell.ordinal()] += 1;
            }
        }
        counts
    }

    /// Check that every cell holds a live state, reporting the first that
    /// does not.
    pub fn validate(&self) -> Result<()> {
        match self.cells.iter().position(|&c| Cell::try_from(c).is_err()) {
            None => Ok(()),
            Some(idx) => {
                let d = self.dimension as usize;
                Err(AutomatonError::InvalidState {
                    x: (idx % d) as i16,
                    y: (idx / d) as i16,
                    code: self.cells[idx],
                })
            }
        }
    }
}

/// Allocate a `dimension × dimension` grid populated per `pattern`.
pub fn create_grid<R: Rng + ?Sized>(
    dimension: i16,
    pattern: StartPattern,
    rng: &mut R,
) -> Result<Grid> {
    let mut grid = Grid::unseeded(dimension)?;
    match pattern {
        StartPattern::Random => {
            for code in grid.cells.iter_mut() {
                *code = rng.gen::<Cell>().code();
            }
        }
        StartPattern::Clustered => seed_clusters(&mut grid, rng),
    }
    Ok(grid)
}

/// Scatter `1 + dimension / 20` seed points per state, then give every cell
/// the state of its nearest seed (earliest seed wins ties).
fn seed_clusters<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let d = grid.dimension;
    let per_state = 1 + d as usize / 20;

    let mut seeds = Vec::with_capacity(per_state * Cell::ALL.len());
    for cell in Cell::ALL {
        for _ in 0..per_state {
            seeds.push((rng.gen_range(0..d), rng.gen_range(0..d), cell));
        }
    }

    for y in 0..d {
        for x in 0..d {
            let nearest = seeds.iter().min_by_key(|&&(sx, sy, _)| {
                let dx = (sx - x) as i32;
                let dy = (sy - y) as i32;
                dx * dx + dy * dy
            });
            if let Some(&(_, _, cell)) = nearest {
                let idx = index_of(grid, x, y);
                grid.cells[idx] = cell.code();
            }
        }
    }
}

/// Calculate the linear index for a 2D coordinate.
#[inline]
pub fn index_of(grid: &Grid, x: i16, y: i16) -> usize {
    y as usize * grid.dimension as usize + x as usize
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(grid: &Grid, x: i16, y: i16) -> bool {
    x >= 0 && x < grid.dimension && y >= 0 && y < grid.dimension
}
