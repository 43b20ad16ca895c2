// Settings module
// User-facing configuration persisted as TOML

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::layout::HourRange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// First visible hour of the week grid (inclusive)
    pub time_start: u32,
    /// Last visible hour of the week grid (inclusive)
    pub time_end: u32,
    /// Short date format for day headers ("DD/MM/YYYY", "MM/DD/YYYY", "YYYY/MM/DD")
    pub date_format: String,
    /// Overrides the default database location when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_start: 8,
            time_end: 20,
            date_format: "DD/MM/YYYY".to_string(),
            database_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Hour {0} is out of range (0-23)")]
    HourOutOfRange(u32),
    #[error("Visible hours start ({start}) after they end ({end})")]
    ReversedHours { start: u32, end: u32 },
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        for hour in [self.time_start, self.time_end] {
            if hour > 23 {
                return Err(SettingsError::HourOutOfRange(hour));
            }
        }
        if self.time_start > self.time_end {
            return Err(SettingsError::ReversedHours {
                start: self.time_start,
                end: self.time_end,
            });
        }
        Ok(())
    }

    pub fn hour_range(&self) -> HourRange {
        HourRange::new(self.time_start, self.time_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.time_start, 8);
        assert_eq!(settings.time_end, 20);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_hour_out_of_range() {
        let settings = Settings {
            time_end: 24,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::HourOutOfRange(24)));
    }

    #[test]
    fn test_validate_reversed_hours() {
        let settings = Settings {
            time_start: 18,
            time_end: 9,
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::ReversedHours { start: 18, end: 9 })
        );
    }

    #[test]
    fn test_single_hour_range_is_valid() {
        let settings = Settings {
            time_start: 12,
            time_end: 12,
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
        assert_eq!(settings.hour_range().labels(), vec![12]);
    }
}
