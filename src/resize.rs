use crate::grid::Grid;

/// Copy every cell of `source` that also exists in `destination`.
///
/// Both grids are anchored at their top-left corner. Cells that only exist in `source` are
/// dropped, and cells that only exist in `destination` keep whatever they held before.
pub fn transcribe(source: &Grid, destination: &mut Grid) {
    let rows = source.rows().min(destination.rows());
    let cols = source.cols().min(destination.cols());

    for row in 0..rows {
        for col in 0..cols {
            destination.put(row, col, source.cell(row, col));
        }
    }
}

/// A dead `rows` x `cols` grid holding as much of `source` as fits.
pub fn resized(source: &Grid, rows: usize, cols: usize) -> Grid {
    let mut grid = Grid::new(rows, cols);
    transcribe(source, &mut grid);

    grid
}
