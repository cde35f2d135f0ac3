//! Journal configuration.
//!
//! Loaded from `~/.urge/config.toml`. Every key is optional; a missing file
//! means defaults.
//!
//! ```toml
//! timezone = "Asia/Kolkata"
//! window-days = 7
//! store = "/home/me/.urge/journal.sqlite"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::stats::DEFAULT_WINDOW_DAYS;

/// Journal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// IANA time zone used for day and hour bucketing.
    /// The system time zone when unset.
    pub timezone: Option<String>,

    /// Length of the rolling statistics window, in days.
    pub window_days: u32,

    /// Path of the journal database. `~/.urge/journal.sqlite` when unset.
    pub store: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: None,
            window_days: DEFAULT_WINDOW_DAYS,
            store: None,
        }
    }
}

impl Config {
    /// Load config from `~/.urge/config.toml`, or defaults if it doesn't exist.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        if config.window_days == 0 {
            return Err(format!("window-days must be at least 1 in {}", path.display()));
        }

        Ok(config)
    }

    /// The config file path: `~/.urge/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".urge").join("config.toml"))
    }

    /// Resolves the configured time zone, falling back to the system zone.
    pub fn time_zone(&self) -> Result<TimeZone, String> {
        match &self.timezone {
            Some(name) => {
                TimeZone::get(name).map_err(|e| format!("unknown timezone '{name}': {e}"))
            }
            None => Ok(TimeZone::system()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.window_days, 7);
        assert!(config.timezone.is_none());
        assert!(config.store.is_none());
    }

    #[test]
    fn reads_kebab_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "window-days = 14\nstore = \"/tmp/journal.sqlite\"\ntimezone = \"UTC\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.window_days, 14);
        assert_eq!(config.store, Some(PathBuf::from("/tmp/journal.sqlite")));
        assert_eq!(config.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn rejects_zero_window() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "window-days = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.contains("window-days"));
    }

    #[test]
    fn rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "window-days = \"seven\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let config = Config {
            timezone: Some("Not/AZone".into()),
            ..Config::default()
        };

        assert!(config.time_zone().is_err());
    }
}
