//! RPS Automata - Rock-Paper-Scissors Cellular Automaton Library
//!
//! A square grid of cells, each Rock, Paper or Scissors, advanced one
//! synchronous generation at a time: a cell is taken over by the state that
//! beats it whenever that state is the majority among its neighbors.
//!
//! The library is usable directly from Rust (`State`, `automaton`) and
//! provides a C ABI (`ffi`) for host programs that own the menu, event loop
//! and rendering.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;

pub use automaton::{Cell, Grid, NeighborhoodKind, StartPattern, StepReport};
pub use config::{Density, SimulationConfig};
pub use error::{AutomatonError, Result};
pub use state::State;
