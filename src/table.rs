use crate::dates::{format_date, parse_date, to_monday};
use crate::grid::{self, Grid, WEEKDAYS};

// every action swaps in a fresh grid; snapshots are never edited in place
#[derive(Debug, Clone)]
pub struct WeekTable {
    num_weeks: usize,
    start_date: String,
    checked: Grid,
}

impl WeekTable {
    pub fn new(num_weeks: usize, start_date: &str) -> Self {
        let mut table = Self {
            num_weeks: 1,
            start_date: String::new(),
            checked: grid::resize_grid(&[], 1, WEEKDAYS.len()),
        };
        table.set_start_date(start_date);
        table.set_num_weeks(num_weeks);
        table
    }

    pub fn num_weeks(&self) -> usize {
        self.num_weeks
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn grid(&self) -> &[Vec<bool>] {
        &self.checked
    }

    pub fn set_num_weeks(&mut self, num_weeks: usize) {
        self.num_weeks = num_weeks.max(1);
        self.checked = grid::resize_grid(&self.checked, self.num_weeks, WEEKDAYS.len());
    }

    pub fn set_start_date(&mut self, value: &str) {
        self.start_date = parse_date(value)
            .map(|date| format_date(to_monday(date)))
            .unwrap_or_default();
    }

    pub fn contains(&self, week: usize, day: usize) -> bool {
        week < self.num_weeks && day < WEEKDAYS.len()
    }

    pub fn toggle(&mut self, week: usize, day: usize) {
        self.checked = grid::toggle_cell(&self.checked, week, day);
    }

    pub fn check_midweek(&mut self, week: usize) {
        self.checked = grid::check_midweek(&self.checked, week);
    }
}
