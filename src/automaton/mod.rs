//! Core automaton logic and grid operations.
//!
//! This module contains the actual logic for building grids, resolving
//! neighborhoods, voting and stepping the automaton, and extracting/importing
//! regions. The `State` handle and the FFI layer in `ffi/` call these
//! functions.

pub mod cell;
pub mod consensus;
pub mod grid;
pub mod neighborhood;
pub mod region;
pub mod stepping;

pub use cell::{Cell, UNSEEDED};
pub use consensus::Tally;
pub use grid::{create_grid, in_bounds, index_of, Grid, StartPattern};
pub use neighborhood::{neighbor_values, neighbors, NeighborhoodKind};
pub use region::{extract_region, import_region};
pub use stepping::{step, step_into, step_parallel, step_seeded, StepReport};
