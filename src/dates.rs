use chrono::{Datelike, Days, Duration, Local, NaiveDate};

pub const DEFAULT_LOOKBACK_WEEKS: i64 = 12;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn to_monday(date: NaiveDate) -> NaiveDate {
    // chrono counts 0 = Sunday .. 6 = Saturday here
    let offset = match date.weekday().num_days_from_sunday() {
        1 => return date,
        0 => -6,
        weekday => 1 - i64::from(weekday),
    };
    date + Duration::days(offset)
}

pub fn default_start_date() -> String {
    default_start_date_at(Local::now().date_naive())
}

pub fn default_start_date_at(today: NaiveDate) -> String {
    let back = today - Duration::weeks(DEFAULT_LOOKBACK_WEEKS);
    format_date(to_monday(back))
}

/// Empty when `start_date` is unset or unparseable.
pub fn monday_of_week(start_date: &str, week_index: usize) -> String {
    let Some(start) = parse_date(start_date) else {
        return String::new();
    };

    (week_index as u64)
        .checked_mul(7)
        .and_then(|days| start.checked_add_days(Days::new(days)))
        .map(format_date)
        .unwrap_or_default()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
