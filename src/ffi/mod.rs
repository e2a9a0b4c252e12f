//! C FFI layer for host renderers.
//!
//! This module exports C ABI functions for use from a host program (a
//! windowed front end, a scripting runtime) that owns the menu, the event
//! loop and the drawing. All functions are marked with `#[no_mangle]` and
//! use `extern "C"`.
//!
//! The actual logic is in the `automaton` module and `State`. These
//! functions are thin wrappers that handle null checks, pointer safety, and
//! C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod region;

use crate::error::AutomatonError;

/// Call succeeded.
pub const RPS_OK: i32 = 0;
/// A required pointer was null.
pub const RPS_NULL_POINTER: i32 = 1;
/// The grid held a non-live cell; the simulation is now halted.
pub const RPS_INVALID_STATE: i32 = 2;
/// The simulation was already halted; call `rps_reset`.
pub const RPS_HALTED: i32 = 3;
/// An argument (code, coordinate, size) was rejected.
pub const RPS_INVALID_ARGUMENT: i32 = 4;

/// Map an error to the status code returned across the C ABI.
pub(crate) fn status_of(err: &AutomatonError) -> i32 {
    match err {
        AutomatonError::InvalidState { .. } => RPS_INVALID_STATE,
        AutomatonError::Halted => RPS_HALTED,
        AutomatonError::InvalidCell(_)
        | AutomatonError::InvalidConfig(_)
        | AutomatonError::DimensionMismatch { .. }
        | AutomatonError::Config(_) => RPS_INVALID_ARGUMENT,
    }
}

pub use grid::{rps_census, rps_get_cell, rps_get_dimension, rps_set_cell, rps_step};
pub use lifecycle::{rps_create, rps_destroy, rps_get_generation, rps_is_halted, rps_reset};
pub use region::{rps_extract_region, rps_import_region};
