use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::Index;

use gridlife::Grid;
use gridlife::count_live_neighbors;
use gridlife::is_all_dead;
use gridlife::mutate;
use gridlife::resize::resized;
use gridlife::rule_set::B3S23;
use gridlife::transcribe;

/// A random grid between 1x1 and `max` x `max`
fn any_grid(max: usize) -> impl Strategy<Value = Grid> {
    (1..=max, 1..=max).prop_flat_map(|(rows, cols)| {
        vec(any::<bool>(), rows * cols).prop_map(move |cells| {
            Grid::from_cells(rows, cols, cells).expect("buffer matches shape")
        })
    })
}

/// A random grid, with a cell inside of it
fn grid_and_cell(max: usize) -> impl Strategy<Value = (Grid, usize, usize)> {
    (any_grid(max), any::<Index>(), any::<Index>()).prop_map(|(grid, r, c)| {
        let (row, col) = (r.index(grid.rows()), c.index(grid.cols()));
        (grid, row, col)
    })
}

proptest! {
    #[test]
    fn neighbors_never_exceed_eight((grid, row, col) in grid_and_cell(12)) {
        prop_assert!(count_live_neighbors(&grid, row, col)? <= 8);
    }

    #[test]
    fn neighbors_ignore_the_center((mut grid, row, col) in grid_and_cell(12)) {
        let before = count_live_neighbors(&grid, row, col)?;
        grid.toggle(row, col)?;

        prop_assert_eq!(count_live_neighbors(&grid, row, col)?, before);
    }

    #[test]
    fn neighbors_only_count_in_bounds_cells((grid, row, col) in grid_and_cell(12)) {
        let mut expected = 0;

        for r in row.saturating_sub(1)..=(row + 1).min(grid.rows() - 1) {
            for c in col.saturating_sub(1)..=(col + 1).min(grid.cols() - 1) {
                if (r, c) != (row, col) && grid.get(r, c)? {
                    expected += 1;
                }
            }
        }

        prop_assert_eq!(count_live_neighbors(&grid, row, col)?, expected);
    }

    #[test]
    fn neighbors_out_of_bounds_fail(grid in any_grid(8)) {
        prop_assert!(count_live_neighbors(&grid, grid.rows(), 0).is_err());
        prop_assert!(count_live_neighbors(&grid, 0, grid.cols()).is_err());
    }

    #[test]
    fn mutate_is_pure_and_deterministic(grid in any_grid(16)) {
        let copy = Grid::from_cells(
            grid.rows(),
            grid.cols(),
            grid.to_string().chars().filter(|&c| c != '\n').map(|c| c == '#').collect(),
        )?;
        let before = grid.clone();

        let a = mutate(&grid);
        let b = mutate(&copy);

        prop_assert_eq!(&grid, &before);
        prop_assert_eq!(a.dimensions(), grid.dimensions());
        prop_assert!(a.matches(&b)?);
    }

    #[test]
    fn mutate_matches_reverse_order_evaluation(grid in any_grid(12)) {
        // Evaluate every cell against the original grid, last cell first
        let mut expected = Grid::new(grid.rows(), grid.cols());

        for row in (0..grid.rows()).rev() {
            for col in (0..grid.cols()).rev() {
                let alive = grid.get(row, col)?;
                let n = count_live_neighbors(&grid, row, col)?;
                expected.set(row, col, B3S23.next_state(alive, n))?;
            }
        }

        prop_assert_eq!(mutate(&grid), expected);
    }

    #[test]
    fn all_dead_iff_no_live_cell(grid in any_grid(12)) {
        prop_assert_eq!(is_all_dead(&grid), grid.iter_alive().next().is_none());
    }

    #[test]
    fn transcribe_same_shape_is_a_copy(grid in any_grid(12)) {
        let mut copy = Grid::new(grid.rows(), grid.cols());
        transcribe(&grid, &mut copy);

        prop_assert_eq!(copy, grid);
    }

    #[test]
    fn shrink_then_grow_keeps_the_overlap(
        grid in any_grid(12),
        rows in 0usize..14,
        cols in 0usize..14,
    ) {
        let mut smaller = Grid::new(rows, cols);
        transcribe(&grid, &mut smaller);

        let mut restored = Grid::new(grid.rows(), grid.cols());
        transcribe(&smaller, &mut restored);

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let kept = row < rows && col < cols;
                let expected = kept && grid.get(row, col)?;

                prop_assert_eq!(restored.get(row, col)?, expected);
            }
        }

        prop_assert_eq!(resized(&smaller, grid.rows(), grid.cols()), restored);
    }
}
