//! # Split Configuration
//!
//! Configuration for the bill splitter.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority, opt-in)                   │
//! │     BILLSPLIT_DATE_MODE=lenient                                        │
//! │     BILLSPLIT_CHECK_CALENDAR=true                                      │
//! │                                                                         │
//! │  2. TOML text supplied by the caller                                   │
//! │     SplitConfig::from_toml_str(...)                                    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     DateMode::Strict, no calendar check                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core never touches the file system. Callers read the file and pass
//! the text in; env overrides only apply through
//! [`SplitConfig::with_env_overrides`].
//!
//! ## Configuration File Format
//! ```toml
//! [date]
//! mode = "strict"         # strict | lenient
//! check_calendar = false
//!
//! [validation]
//! max_location_len = 200
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SplitError, SplitResult};

/// Env var overriding [`DateConfig::mode`].
pub const ENV_DATE_MODE: &str = "BILLSPLIT_DATE_MODE";

/// Env var overriding [`DateConfig::check_calendar`].
pub const ENV_CHECK_CALENDAR: &str = "BILLSPLIT_CHECK_CALENDAR";

// =============================================================================
// Date Mode
// =============================================================================

/// How strictly the bill date is parsed.
///
/// ```text
/// STRICT (Default)                    LENIENT
/// ────────────────                    ───────
/// "2024-03-21" → 2024年3月21日        "2024-03-21" → 2024年3月21日
/// "2024/03/21" → InvalidDateFormat    "2024/03/21" → 2024/03/21年?月?日
/// "2024-3x-21" → InvalidDateFormat    "2024-3x-21" → 2024年3月21日
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateMode {
    /// Reject anything that is not `digits-digits-digits`.
    #[default]
    Strict,

    /// Render whatever can be salvaged, never fail.
    Lenient,
}

impl std::fmt::Display for DateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateMode::Strict => write!(f, "strict"),
            DateMode::Lenient => write!(f, "lenient"),
        }
    }
}

impl std::str::FromStr for DateMode {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(DateMode::Strict),
            "lenient" | "loose" => Ok(DateMode::Lenient),
            other => Err(SplitError::Config(format!(
                "Unknown date mode: '{}'. Valid options: strict, lenient",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Date parsing settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    pub mode: DateMode,

    /// Also require the date to exist on the calendar (strict mode only).
    pub check_calendar: bool,
}

/// Input validation limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum location length in characters.
    pub max_location_len: usize,
}

fn default_max_location_len() -> usize {
    200
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            max_location_len: default_max_location_len(),
        }
    }
}

// =============================================================================
// Split Configuration
// =============================================================================

/// Complete splitter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub date: DateConfig,
    pub validation: ValidationConfig,
}

impl SplitConfig {
    /// Parses configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> SplitResult<Self> {
        let config: SplitConfig =
            toml::from_str(text).map_err(|e| SplitError::Config(e.to_string()))?;
        debug!(
            date_mode = %config.date.mode,
            check_calendar = config.date.check_calendar,
            "Loaded split configuration"
        );
        Ok(config)
    }

    /// Applies overrides from the process environment.
    pub fn with_env_overrides(self) -> SplitResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// Unknown date modes are an error; an unparseable calendar flag is
    /// ignored with a warning.
    pub fn with_overrides<F>(mut self, lookup: F) -> SplitResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(ENV_DATE_MODE) {
            self.date.mode = mode.parse()?;
            debug!(mode = %self.date.mode, "Date mode overridden from environment");
        }

        if let Some(flag) = lookup(ENV_CHECK_CALENDAR) {
            match parse_flag(&flag) {
                Some(value) => self.date.check_calendar = value,
                None => warn!(value = %flag, "Ignoring invalid {}", ENV_CHECK_CALENDAR),
            }
        }

        Ok(self)
    }

    /// Shorthand for a config with lenient date parsing.
    pub fn lenient() -> Self {
        SplitConfig {
            date: DateConfig {
                mode: DateMode::Lenient,
                check_calendar: false,
            },
            ..SplitConfig::default()
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_date_mode_parse() {
        assert_eq!("strict".parse::<DateMode>().unwrap(), DateMode::Strict);
        assert_eq!("Lenient".parse::<DateMode>().unwrap(), DateMode::Lenient);
        assert_eq!("loose".parse::<DateMode>().unwrap(), DateMode::Lenient);
        assert!("sloppy".parse::<DateMode>().is_err());
    }

    #[test]
    fn test_date_mode_display() {
        assert_eq!(DateMode::Strict.to_string(), "strict");
        assert_eq!(DateMode::Lenient.to_string(), "lenient");
    }

    #[test]
    fn test_config_default() {
        let config = SplitConfig::default();
        assert_eq!(config.date.mode, DateMode::Strict);
        assert!(!config.date.check_calendar);
        assert_eq!(config.validation.max_location_len, 200);
    }

    #[test]
    fn test_from_toml() {
        let config = SplitConfig::from_toml_str(
            r#"
            [date]
            mode = "lenient"

            [validation]
            max_location_len = 40
            "#,
        )
        .unwrap();
        assert_eq!(config.date.mode, DateMode::Lenient);
        assert!(!config.date.check_calendar);
        assert_eq!(config.validation.max_location_len, 40);
    }

    #[test]
    fn test_from_empty_toml() {
        let config = SplitConfig::from_toml_str("").unwrap();
        assert_eq!(config, SplitConfig::default());
    }

    #[test]
    fn test_from_invalid_toml() {
        let err = SplitConfig::from_toml_str("[date]\nmode = \"sloppy\"").unwrap_err();
        assert!(matches!(err, SplitError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [(ENV_DATE_MODE, "lenient"), (ENV_CHECK_CALENDAR, "yes")]
            .into_iter()
            .collect();
        let config = SplitConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.date.mode, DateMode::Lenient);
        assert!(config.date.check_calendar);
    }

    #[test]
    fn test_invalid_calendar_flag_is_ignored() {
        let config = SplitConfig::default()
            .with_overrides(|key| (key == ENV_CHECK_CALENDAR).then(|| "maybe".to_string()))
            .unwrap();
        assert!(!config.date.check_calendar);
    }

    #[test]
    fn test_invalid_mode_override_fails() {
        let result = SplitConfig::default()
            .with_overrides(|key| (key == ENV_DATE_MODE).then(|| "sloppy".to_string()));
        assert!(matches!(result, Err(SplitError::Config(_))));
    }
}
