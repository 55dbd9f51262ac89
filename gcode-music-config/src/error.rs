//! Error types for gcode-music-config

use std::fmt;

/// Error type for gcode-music-config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// File I/O error
    FileRead { path: String, message: String },
    /// TOML parsing error
    TomlParse { path: String, message: String },
    /// Invalid value
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
    /// Two pools claim overlapping M-code ranges
    OverlappingCodes { preset: (u16, u16), custom: (u16, u16) },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileRead { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::TomlParse { path, message } => {
                write!(f, "Failed to parse '{}': {}", path, message)
            }
            ConfigError::InvalidValue { field, value, expected } => {
                write!(f, "Invalid value '{}' for '{}', expected: {}", value, field, expected)
            }
            ConfigError::OverlappingCodes { preset, custom } => {
                write!(
                    f,
                    "Preset codes M{}..M{} overlap custom codes M{}..M{}",
                    preset.0, preset.1, custom.0, custom.1
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
