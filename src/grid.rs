pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

pub const MIDWEEK: [usize; 3] = [1, 2, 3];

pub type Grid = Vec<Vec<bool>>;

pub fn clamp_num_weeks(requested: i64) -> usize {
    usize::try_from(requested.max(1)).unwrap_or(usize::MAX)
}

pub fn resize_grid(prev: &[Vec<bool>], num_weeks: usize, num_days: usize) -> Grid {
    (0..num_weeks)
        .map(|week| {
            (0..num_days)
                .map(|day| {
                    prev.get(week)
                        .and_then(|row| row.get(day))
                        .copied()
                        .unwrap_or(false)
                })
                .collect()
        })
        .collect()
}

/// Panics if the cell is out of bounds.
pub fn toggle_cell(grid: &[Vec<bool>], week: usize, day: usize) -> Grid {
    let mut updated = grid.to_vec();
    let cell = &mut updated[week][day];
    *cell = !*cell;
    updated
}

/// Panics if `week` is out of bounds.
pub fn check_midweek(grid: &[Vec<bool>], week: usize) -> Grid {
    let mut updated = grid.to_vec();
    for day in MIDWEEK {
        updated[week][day] = true;
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        vec![
            vec![true, false, true, false, false],
            vec![false, false, false, false, true],
            vec![true, true, true, true, true],
        ]
    }

    #[test]
    fn clamp_floors_at_one() {
        assert_eq!(clamp_num_weeks(-4), 1);
        assert_eq!(clamp_num_weeks(0), 1);
        assert_eq!(clamp_num_weeks(1), 1);
        assert_eq!(clamp_num_weeks(20), 20);
    }

    #[test]
    fn resize_grows_with_false_rows() {
        let prev = sample();
        let grown = resize_grid(&prev, 5, WEEKDAYS.len());
        assert_eq!(grown.len(), 5);
        assert!(grown.iter().all(|row| row.len() == WEEKDAYS.len()));
        assert_eq!(&grown[..3], &prev[..]);
        assert!(grown[3..].iter().flatten().all(|cell| !cell));
    }

    #[test]
    fn resize_shrinks_and_keeps_prefix() {
        let prev = sample();
        let shrunk = resize_grid(&prev, 2, WEEKDAYS.len());
        assert_eq!(shrunk, prev[..2].to_vec());
        // source is untouched
        assert_eq!(prev, sample());
    }

    #[test]
    fn resize_fills_short_rows_and_allows_zero_weeks() {
        let ragged = vec![vec![true], vec![]];
        let fixed = resize_grid(&ragged, 2, 3);
        assert_eq!(fixed, vec![vec![true, false, false], vec![false; 3]]);
        assert!(resize_grid(&ragged, 0, 5).is_empty());
    }

    #[test]
    fn toggle_flips_exactly_one_cell() {
        let grid = sample();
        let toggled = toggle_cell(&grid, 1, 2);

        let diffs: Vec<(usize, usize)> = grid
            .iter()
            .zip(&toggled)
            .enumerate()
            .flat_map(|(week, (a, b))| {
                a.iter()
                    .zip(b)
                    .enumerate()
                    .filter(|(_, (x, y))| x != y)
                    .map(move |(day, _)| (week, day))
            })
            .collect();
        assert_eq!(diffs, vec![(1, 2)]);
        assert_eq!(toggle_cell(&toggled, 1, 2), grid);
    }

    #[test]
    #[should_panic]
    fn toggle_out_of_bounds_panics() {
        toggle_cell(&sample(), 3, 0);
    }

    #[test]
    fn check_midweek_sets_tue_to_thu_only() {
        let grid = sample();
        let checked = check_midweek(&grid, 0);
        assert_eq!(checked[0], vec![true, true, true, true, false]);
        assert_eq!(&checked[1..], &grid[1..]);
        assert_eq!(check_midweek(&checked, 0), checked);
    }
}
