//! Cell access, stepping and population queries.

use super::{status_of, RPS_INVALID_ARGUMENT, RPS_NULL_POINTER, RPS_OK};
use crate::automaton::{Cell, UNSEEDED};
use crate::state::State;

/// Gets the side length of the square grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The dimension, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn rps_get_dimension(ptr: *const State) -> i16 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).dimension()
}

/// Gets the code of a cell (1 = Rock, 2 = Paper, 3 = Scissors).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The cell code, or 0 if out of bounds or null pointer.
#[no_mangle]
pub unsafe extern "C" fn rps_get_cell(ptr: *const State, x: i16, y: i16) -> u8 {
    if ptr.is_null() {
        return UNSEEDED;
    }

    let state = &*ptr;
    state.grid().get(x, y).unwrap_or(UNSEEDED)
}

/// Sets a cell to a live state code.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// `RPS_OK`, `RPS_NULL_POINTER`, or `RPS_INVALID_ARGUMENT` for an unknown
/// code or an out-of-bounds coordinate.
#[no_mangle]
pub unsafe extern "C" fn rps_set_cell(ptr: *mut State, x: i16, y: i16, code: u8) -> i32 {
    if ptr.is_null() {
        return RPS_NULL_POINTER;
    }

    let cell = match Cell::try_from(code) {
        Ok(cell) => cell,
        Err(_) => return RPS_INVALID_ARGUMENT,
    };

    let state = &mut *ptr;
    match state.set_cell(x, y, cell) {
        Ok(()) => RPS_OK,
        Err(err) => status_of(&err),
    }
}

/// Advances the simulation by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// `RPS_OK`; `RPS_INVALID_STATE` if the grid held a non-live cell (the
/// simulation halts and keeps its current generation); `RPS_HALTED` if it
/// was already halted; `RPS_NULL_POINTER`.
#[no_mangle]
pub unsafe extern "C" fn rps_step(ptr: *mut State) -> i32 {
    if ptr.is_null() {
        return RPS_NULL_POINTER;
    }

    let state = &mut *ptr;
    match state.step() {
        Ok(_) => RPS_OK,
        Err(err) => status_of(&err),
    }
}

/// Writes the population of Rock, Paper and Scissors into `out[0..3]`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out` must point to at least 3 writable `u64` values, or be null
///
/// # Returns
/// `RPS_OK` or `RPS_NULL_POINTER`.
#[no_mangle]
pub unsafe extern "C" fn rps_census(ptr: *const State, out: *mut u64) -> i32 {
    if ptr.is_null() || out.is_null() {
        return RPS_NULL_POINTER;
    }

    let state = &*ptr;
    let out = std::slice::from_raw_parts_mut(out, 3);
    for (slot, count) in out.iter_mut().zip(state.grid().census()) {
        *slot = count as u64;
    }
    RPS_OK
}
