//! Configuration structures for clock selection.
//!
//! Supports TOML deserialization with defaults that select the OS monotonic
//! clock, so an empty file is a valid configuration.

use crate::time::TimeValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Top-level clock configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Which clock feeds `now()`.
    pub source: SourceKind,

    /// Manual clock settings, used when `source = "manual"`.
    pub manual: ManualClockConfig,
}

/// Clock selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// CLOCK_MONOTONIC.
    #[default]
    Monotonic,
    /// CLOCK_MONOTONIC_RAW: not slewed by NTP.
    MonotonicRaw,
    /// CLOCK_BOOTTIME: keeps counting across suspend.
    Boottime,
    /// Controllable clock for deterministic runs.
    Manual,
}

impl SourceKind {
    /// The OS clock this source reads, or `None` for the manual clock.
    #[must_use]
    pub const fn os_clock(self) -> Option<ClockKind> {
        match self {
            SourceKind::Monotonic => Some(ClockKind::Monotonic),
            SourceKind::MonotonicRaw => Some(ClockKind::MonotonicRaw),
            SourceKind::Boottime => Some(ClockKind::Boottime),
            SourceKind::Manual => None,
        }
    }
}

/// OS monotonic clocks.
///
/// Kinds a target does not provide are read through [`ClockKind::Monotonic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClockKind {
    /// CLOCK_MONOTONIC.
    #[default]
    Monotonic,
    /// CLOCK_MONOTONIC_RAW.
    MonotonicRaw,
    /// CLOCK_BOOTTIME.
    Boottime,
}

impl fmt::Display for ClockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClockKind::Monotonic => "monotonic",
            ClockKind::MonotonicRaw => "monotonic_raw",
            ClockKind::Boottime => "boottime",
        };
        f.write_str(name)
    }
}

/// Manual clock settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualClockConfig {
    /// Initial reading.
    #[serde(with = "humantime_serde")]
    pub start: TimeValue,

    /// Amount the clock moves forward after every read. Zero keeps it frozen.
    #[serde(with = "humantime_serde")]
    pub step: TimeValue,
}

impl ClockConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading clock configuration");
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        debug!(source = ?config.source, "Parsed clock configuration");
        Ok(config)
    }

    /// Serialize configuration to TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Serde helper module for `TimeValue` using humantime format.
///
/// The saturation ceiling is written as `"infinite"`.
mod humantime_serde {
    use crate::time::TimeValue;
    use serde::{self, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    const INFINITE: &str = "infinite";

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(value: &TimeValue, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_infinite() {
            return serializer.serialize_str(INFINITE);
        }
        let s = humantime::format_duration(Duration::from(*value)).to_string();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TimeValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.trim() == INFINITE {
            return Ok(TimeValue::INFINITE);
        }
        humantime::parse_duration(&s)
            .map(TimeValue::from)
            .map_err(serde::de::Error::custom)
    }
}
