//! Region extraction and import operations.

use super::cell::Cell;
use super::grid::{index_of, Grid};
use crate::error::{AutomatonError, Result};

/// Clamp a rectangle to the grid. Returns `None` when it is empty.
fn clamp_region(
    grid: &Grid,
    min_x: i16,
    min_y: i16,
    max_x: i16,
    max_y: i16,
) -> Option<(i16, i16, i16, i16)> {
    let d = grid.dimension();
    let min_x = min_x.max(0).min(d);
    let min_y = min_y.max(0).min(d);
    let max_x = max_x.max(0).min(d);
    let max_y = max_y.max(0).min(d);

    if min_x >= max_x || min_y >= max_y {
        None
    } else {
        Some((min_x, min_y, max_x, max_y))
    }
}

/// Extract a rectangular region of raw cell codes into a flat buffer.
///
/// # Layout
/// Row-major: y changes slowest, x fastest. Matches `import_region`.
/// The rectangle is half-open (`min..max`) and clamped to the grid.
///
/// # Returns
/// Number of bytes written, or 0 if the region is empty or the buffer too
/// small.
pub fn extract_region(
    grid: &Grid,
    out_buf: &mut [u8],
    min_x: i16,
    min_y: i16,
    max_x: i16,
    max_y: i16,
) -> u64 {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(grid, min_x, min_y, max_x, max_y)
    else {
        return 0;
    };

    let width = (max_x - min_x) as usize;
    let height = (max_y - min_y) as usize;
    if out_buf.len() < width * height {
        return 0;
    }

    let cells = grid.cells();
    let mut offset = 0;
    for y in min_y..max_y {
        let start = index_of(grid, min_x, y);
        out_buf[offset..offset + width].copy_from_slice(&cells[start..start + width]);
        offset += width;
    }

    offset as u64
}

/// Import a rectangular region of cell codes from a flat buffer.
///
/// Every code must be a live state. The whole input is checked before
/// anything is written, so a rejected import leaves the grid untouched.
///
/// # Returns
/// Number of bytes read, 0 for an empty region.
pub fn import_region(
    grid: &mut Grid,
    in_buf: &[u8],
    min_x: i16,
    min_y: i16,
    max_x: i16,
    max_y: i16,
) -> Result<u64> {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(grid, min_x, min_y, max_x, max_y)
    else {
        return Ok(0);
    };

    let width = (max_x - min_x) as usize;
    let height = (max_y - min_y) as usize;
    let total = width * height;
    if in_buf.len() < total {
        return Err(AutomatonError::InvalidConfig("import buffer smaller than region"));
    }

    let input = &in_buf[..total];
    if let Some(&bad) = input.iter().find(|&&code| Cell::try_from(code).is_err()) {
        return Err(AutomatonError::InvalidCell(bad));
    }

    let mut offset = 0;
    for y in min_y..max_y {
        let start = index_of(grid, min_x, y);
        grid.cells_mut()[start..start + width].copy_from_slice(&input[offset..offset + width]);
        offset += width;
    }

    Ok(offset as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock_grid(dimension: i16) -> Grid {
        Grid::filled(dimension, Cell::Rock).unwrap()
    }

    #[test]
    fn test_extract_region_full() {
        let mut grid = rock_grid(4);
        grid.set(1, 2, Cell::Paper).unwrap();

        let mut buffer = vec![0u8; 16];
        let bytes_written = extract_region(&grid, &mut buffer, 0, 0, 4, 4);

        assert_eq!(bytes_written, 16);
        assert_eq!(buffer, grid.cells());
        assert_eq!(buffer[9], Cell::Paper.code());
    }

    #[test]
    fn test_extract_region_out_of_bounds() {
        let grid = rock_grid(4);
        let mut buffer = vec![0u8; 64];
        let bytes_written = extract_region(&grid, &mut buffer, -2, -2, 10, 10);

        // Should be clamped to 4x4
        assert_eq!(bytes_written, 16);
    }

    #[test]
    fn test_extract_region_empty_or_small_buffer() {
        let grid = rock_grid(4);
        let mut buffer = vec![0u8; 4];
        assert_eq!(extract_region(&grid, &mut buffer, 2, 2, 2, 4), 0);
        assert_eq!(extract_region(&grid, &mut buffer, 3, 3, 1, 1), 0);
        assert_eq!(extract_region(&grid, &mut buffer, 0, 0, 3, 3), 0);
    }

    #[test]
    fn test_import_region_basic() {
        let mut grid = rock_grid(6);
        let mut buffer = vec![Cell::Rock.code(); 4];
        buffer[1] = Cell::Scissors.code();
        buffer[2] = Cell::Paper.code();

        let bytes_read = import_region(&mut grid, &buffer, 2, 2, 4, 4).unwrap();

        assert_eq!(bytes_read, 4);
        assert_eq!(grid.cell(3, 2), Ok(Cell::Scissors));
        assert_eq!(grid.cell(2, 3), Ok(Cell::Paper));
        assert_eq!(grid.census(), [34, 1, 1]);
    }

    #[test]
    fn test_import_region_rejects_invalid_codes() {
        let mut grid = rock_grid(4);
        let buffer = vec![Cell::Paper.code(), 0, Cell::Paper.code(), Cell::Paper.code()];

        assert_eq!(
            import_region(&mut grid, &buffer, 0, 0, 2, 2),
            Err(AutomatonError::InvalidCell(0))
        );
        // Nothing written
        assert_eq!(grid, rock_grid(4));
    }

    #[test]
    fn test_import_region_short_buffer() {
        let mut grid = rock_grid(4);
        assert!(import_region(&mut grid, &[1, 1], 0, 0, 2, 2).is_err());
    }

    #[test]
    fn test_extract_import_symmetry() {
        let mut source = rock_grid(8);
        source.set(2, 2, Cell::Scissors).unwrap();
        source.set(3, 1, Cell::Paper).unwrap();

        let mut buffer = vec![0u8; 16];
        extract_region(&source, &mut buffer, 0, 0, 4, 4);

        let mut target = Grid::filled(8, Cell::Paper).unwrap();
        import_region(&mut target, &buffer, 0, 0, 4, 4).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(source.get(x, y), target.get(x, y));
            }
        }
        assert_eq!(target.cell(5, 5), Ok(Cell::Paper));
    }
}
