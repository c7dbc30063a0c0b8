use crate::dates::monday_of_week;
use crate::grid::WEEKDAYS;
use crate::models::{TableResponse, WeekRowView};
use crate::table::WeekTable;

pub const WINDOW_WEEKS: usize = 12;
pub const TOP_WEEKS: usize = 8;
pub const FIRST_FULL_WINDOW: usize = WINDOW_WEEKS - 1;

pub fn checked_count(row: &[bool]) -> usize {
    row.iter().filter(|cell| **cell).count()
}

/// Panics if `current` is not a row of `grid`.
pub fn top8_in_trailing_12(grid: &[Vec<bool>], current: usize) -> usize {
    let start = current.saturating_sub(WINDOW_WEEKS - 1);
    let mut counts: Vec<usize> = grid[start..=current]
        .iter()
        .map(|row| checked_count(row))
        .collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts.iter().take(TOP_WEEKS).sum()
}

pub fn build_table_view(table: &WeekTable) -> TableResponse {
    let grid = table.grid();
    let weeks = grid
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let monday = monday_of_week(table.start_date(), index);
            let label = if monday.is_empty() {
                format!("Week {}", index + 1)
            } else {
                monday.clone()
            };
            let top8_of_12 =
                (index >= FIRST_FULL_WINDOW).then(|| top8_in_trailing_12(grid, index));

            WeekRowView {
                index,
                label,
                monday,
                checked: row.clone(),
                checked_count: checked_count(row),
                top8_of_12,
            }
        })
        .collect();

    TableResponse {
        start_date: table.start_date().to_string(),
        num_weeks: table.num_weeks(),
        weekdays: WEEKDAYS.iter().map(|day| day.to_string()).collect(),
        weeks,
    }
}
