use crate::grid::Grid;
use crate::grid::GridResult;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

/// Offsets of the 8 cells surrounding a cell, as `(d_row, d_col)`
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the live cells around `(row, col)`.
///
/// The grid does not wrap. A neighbor that falls outside of the grid is dead, so edge and corner
/// cells have fewer than 8 candidates. The cell itself is never counted.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> GridResult<u8> {
    // Surface a bad coordinate before counting anything
    grid.get(row, col)?;

    Ok(live_neighbors(grid, row, col))
}

/// Like [`count_live_neighbors`], for a cell known to be in bounds.
fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;

    for (dr, dc) in NEIGHBORS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };

        if grid.contains(r, c) && grid.cell(r, c) {
            count += 1;
        }
    }

    count
}

/// Compute the next generation of `grid` under Conway's rules.
///
/// * 2 live neighbors: the cell keeps its state
/// * 3 live neighbors: the cell is alive
/// * anything else: the cell is dead
pub fn mutate(grid: &Grid) -> Grid {
    evolve(grid, &B3S23)
}

/// Compute the next generation of `grid` under `rules`.
///
/// `grid` is only read, and the result is written to a fresh grid, so every cell is evaluated
/// against the same generation no matter the order cells are visited in.
pub fn evolve(grid: &Grid, rules: &RuleSet) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut next = Grid::new(rows, cols);

    for (row, col) in (0..rows).flat_map(|r| (0..cols).map(move |c| (r, c))) {
        let alive = grid.cell(row, col);
        let neighbors = live_neighbors(grid, row, col);

        next.put(row, col, rules.next_state(alive, neighbors));
    }

    next
}

/// Whether a generation has died out entirely.
pub fn is_all_dead(grid: &Grid) -> bool {
    grid.is_all_dead()
}
