//! State creation, destruction, reset and generation queries.

use super::{status_of, RPS_NULL_POINTER, RPS_OK};
use crate::config::SimulationConfig;
use crate::state::State;

/// Creates a new simulation and returns an opaque pointer.
///
/// Codes: `density` 0 = Low, 1 = Medium, 2 = High; `pattern` 0 = Clustered,
/// 1 = Random; `neighborhood` 0 = Moore, 1 = Von Neumann, 2 = Large Moore,
/// 3 = Random Von Neumann. `seed` is used only when `use_seed` is non-zero.
///
/// # Returns
/// A pointer to a new State, or null if any code is unknown.
///
/// # Safety
/// The returned pointer must eventually be freed with `rps_destroy()`.
#[no_mangle]
pub extern "C" fn rps_create(
    density: u8,
    pattern: u8,
    neighborhood: u8,
    seed: u64,
    use_seed: u8,
    threads: u8,
) -> *mut State {
    let config = match SimulationConfig::from_codes(density, pattern, neighborhood) {
        Ok(config) => config.with_threads(threads),
        Err(_) => return std::ptr::null_mut(),
    };
    let config = if use_seed != 0 {
        config.with_seed(seed)
    } else {
        config
    };

    match State::new(config) {
        Ok(state) => Box::into_raw(Box::new(state)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `rps_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn rps_destroy(ptr: *mut State) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn rps_get_generation(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation
}

/// Seeds a fresh grid from the simulation's configuration and clears a halt.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// `RPS_OK`, or `RPS_NULL_POINTER`.
#[no_mangle]
pub unsafe extern "C" fn rps_reset(ptr: *mut State) -> i32 {
    if ptr.is_null() {
        return RPS_NULL_POINTER;
    }

    let state = &mut *ptr;
    match state.reset() {
        Ok(()) => RPS_OK,
        Err(err) => status_of(&err),
    }
}

/// Reports whether the simulation halted on an invalid state.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 1 if halted, 0 otherwise or if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn rps_is_halted(ptr: *const State) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).is_halted() as u8
}
