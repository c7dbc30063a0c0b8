use crate::dates::{default_start_date, parse_date};
use crate::grid::clamp_num_weeks;
use std::env;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_NUM_WEEKS: usize = 20;
pub const MAX_WEEKS: usize = 520;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub num_weeks: usize,
    pub start_date: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parsed(&lookup, "PORT").unwrap_or(DEFAULT_PORT);

        let num_weeks = parsed::<i64>(&lookup, "APP_NUM_WEEKS")
            .map(clamp_num_weeks)
            .unwrap_or(DEFAULT_NUM_WEEKS);
        let num_weeks = if num_weeks > MAX_WEEKS {
            warn!("APP_NUM_WEEKS={num_weeks} exceeds {MAX_WEEKS}, using {MAX_WEEKS}");
            MAX_WEEKS
        } else {
            num_weeks
        };

        let start_date = match lookup("APP_START_DATE") {
            Some(raw) if parse_date(&raw).is_some() => raw.trim().to_string(),
            Some(raw) if !raw.trim().is_empty() => {
                warn!("ignoring invalid APP_START_DATE={raw:?}");
                default_start_date()
            }
            _ => default_start_date(),
        };

        Self {
            port,
            num_weeks,
            start_date,
        }
    }
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring invalid {key}={raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::WeekTable;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.num_weeks, DEFAULT_NUM_WEEKS);
        assert!(!config.start_date.is_empty());
    }

    #[test]
    fn reads_and_clamps_values() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("APP_NUM_WEEKS", "-3"),
            ("APP_START_DATE", "2026-01-07"),
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.num_weeks, 1);
        assert_eq!(config.start_date, "2026-01-07");

        let config = config_from(&[("APP_NUM_WEEKS", "100000")]);
        assert_eq!(config.num_weeks, MAX_WEEKS);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[("PORT", "http"), ("APP_NUM_WEEKS", "many")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.num_weeks, DEFAULT_NUM_WEEKS);
    }

    #[test]
    fn garbage_start_date_uses_default() {
        let config = config_from(&[("APP_START_DATE", "garbage")]);
        assert!(parse_date(&config.start_date).is_some());

        let table = WeekTable::new(config.num_weeks, &config.start_date);
        assert!(!table.start_date().is_empty());
        assert_eq!(table.start_date(), config.start_date);
    }
}
