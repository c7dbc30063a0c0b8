use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Default)]
pub struct SettingsRequest {
    pub num_weeks: Option<i64>,
    pub start_date: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SettingsForm {
    #[serde(default)]
    pub num_weeks: String,
    #[serde(default)]
    pub start_date: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub week: usize,
    pub day: usize,
}

#[derive(Debug, Deserialize)]
pub struct MidweekRequest {
    pub week: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekRowView {
    pub index: usize,
    pub label: String,
    pub monday: String,
    pub checked: Vec<bool>,
    pub checked_count: usize,
    pub top8_of_12: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableResponse {
    pub start_date: String,
    pub num_weeks: usize,
    pub weekdays: Vec<String>,
    pub weeks: Vec<WeekRowView>,
}
