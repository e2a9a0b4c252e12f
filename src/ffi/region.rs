//! Region extraction and import FFI functions.

use crate::automaton;
use crate::state::State;

/// Extracts a rectangular region of cell codes into a flat output buffer.
///
/// # Layout
/// Row-major (y changes slowest, x fastest), rectangle `min..max` half-open.
/// This matches the layout expected by `rps_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y)` bytes
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn rps_extract_region(
    ptr: *const State,
    out_buf: *mut u8,
    min_x: i16,
    min_y: i16,
    max_x: i16,
    max_y: i16,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let state = &*ptr;
    let width = (max_x as i32 - min_x as i32).max(0) as usize;
    let height = (max_y as i32 - min_y as i32).max(0) as usize;

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, width * height);
    automaton::extract_region(state.grid(), buf_slice, min_x, min_y, max_x, max_y)
}

/// Imports a rectangular region of cell codes from a flat buffer into the
/// current generation.
///
/// # Layout
/// Row-major, matching `rps_extract_region`. Every code must be 1, 2 or 3;
/// otherwise nothing is written.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `in_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y)` bytes
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn rps_import_region(
    ptr: *mut State,
    in_buf: *const u8,
    min_x: i16,
    min_y: i16,
    max_x: i16,
    max_y: i16,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let state = &mut *ptr;
    let width = (max_x as i32 - min_x as i32).max(0) as usize;
    let height = (max_y as i32 - min_y as i32).max(0) as usize;

    let buf_slice = std::slice::from_raw_parts(in_buf, width * height);
    state
        .import_region(buf_slice, min_x, min_y, max_x, max_y)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{grid, lifecycle};
    use std::ptr;

    #[test]
    fn test_extract_whole_grid() {
        unsafe {
            let state = lifecycle::rps_create(0, 1, 0, 3, 1, 1);
            let mut buffer = vec![0u8; 100];

            let written = rps_extract_region(state, buffer.as_mut_ptr(), 0, 0, 10, 10);
            assert_eq!(written, 100);
            assert_eq!(buffer[0], grid::rps_get_cell(state, 0, 0));
            assert_eq!(buffer[23], grid::rps_get_cell(state, 3, 2));
            assert!(buffer.iter().all(|c| (1..=3).contains(c)));

            lifecycle::rps_destroy(state);
        }
    }

    #[test]
    fn test_import_then_extract() {
        unsafe {
            let state = lifecycle::rps_create(0, 1, 0, 3, 1, 1);
            let input = [2u8, 2, 3, 3];

            assert_eq!(rps_import_region(state, input.as_ptr(), 4, 4, 6, 6), 4);

            let mut out = [0u8; 4];
            assert_eq!(rps_extract_region(state, out.as_mut_ptr(), 4, 4, 6, 6), 4);
            assert_eq!(out, input);

            lifecycle::rps_destroy(state);
        }
    }

    #[test]
    fn test_import_rejects_unseeded_codes() {
        unsafe {
            let state = lifecycle::rps_create(0, 1, 0, 3, 1, 1);
            let before = grid::rps_get_cell(state, 0, 0);

            let input = [0u8, 1, 1, 1];
            assert_eq!(rps_import_region(state, input.as_ptr(), 0, 0, 2, 2), 0);
            assert_eq!(grid::rps_get_cell(state, 0, 0), before);

            lifecycle::rps_destroy(state);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            let mut buffer = [0u8; 4];
            assert_eq!(
                rps_extract_region(ptr::null(), buffer.as_mut_ptr(), 0, 0, 2, 2),
                0
            );
            assert_eq!(
                rps_import_region(ptr::null_mut(), buffer.as_ptr(), 0, 0, 2, 2),
                0
            );
        }
    }
}
