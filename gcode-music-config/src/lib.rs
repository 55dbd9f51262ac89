use std::path::Path;

use serde::Deserialize as SerdeDeserialize;
use serde::de;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

mod error;

pub use error::{ConfigError, ConfigResult};

/// Maximum number of slots in one pool, the M-code layout reserves ten codes for sound macros
pub const MAX_SLOT_NUM: usize = 10;

/// Music macro constants, used to size the slot tables and channels at compile time
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MusicConstantsConfig {
    /// Number of preset slots
    #[serde_inline_default(5)]
    #[serde(deserialize_with = "check_slot_num")]
    pub preset_slot_num: usize,
    /// Maximum length of a single preset macro, in bytes
    #[serde_inline_default(651)]
    pub preset_slot_size: usize,
    /// Whether the custom pool is enabled by default
    #[serde_inline_default(true)]
    pub custom_pool: bool,
    /// Number of custom slots
    #[serde_inline_default(5)]
    #[serde(deserialize_with = "check_slot_num")]
    pub custom_slot_num: usize,
    /// Maximum length of a single custom macro, in bytes
    #[serde_inline_default(651)]
    pub custom_slot_size: usize,
    /// First M-code routed to the preset pool
    #[serde_inline_default(9000)]
    pub preset_base_code: u16,
    /// First M-code routed to the custom pool
    #[serde_inline_default(9005)]
    pub custom_base_code: u16,
    /// Number of consecutive M-codes each pool claims
    #[serde_inline_default(5)]
    pub code_span: u16,
    /// Inbound command channel size
    #[serde_inline_default(8)]
    pub command_channel_size: usize,
    /// Maximum length of an inbound command line, in bytes
    #[serde_inline_default(704)]
    pub command_line_size: usize,
    /// Size of the buffer holding the commands of a played macro, in bytes
    #[serde_inline_default(704)]
    pub injected_buffer_size: usize,
}

fn check_slot_num<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: de::Deserializer<'de>,
{
    let value = SerdeDeserialize::deserialize(deserializer)?;
    if value == 0 || value > MAX_SLOT_NUM {
        return Err(de::Error::custom(format!(
            "slot num must be between 1 and {MAX_SLOT_NUM}, got {value}"
        )));
    }
    Ok(value)
}

impl Default for MusicConstantsConfig {
    fn default() -> Self {
        Self {
            preset_slot_num: 5,
            preset_slot_size: 651,
            custom_pool: true,
            custom_slot_num: 5,
            custom_slot_size: 651,
            preset_base_code: 9000,
            custom_base_code: 9005,
            code_span: 5,
            command_channel_size: 8,
            command_line_size: 704,
            injected_buffer_size: 704,
        }
    }
}

impl MusicConstantsConfig {
    /// Check the cross-field constraints which serde can't express
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("preset_slot_size", self.preset_slot_size),
            ("custom_slot_size", self.custom_slot_size),
            ("code_span", self.code_span as usize),
            ("command_channel_size", self.command_channel_size),
        ] {
            if value == 0 {
                return Err(invalid(field, value, "a value greater than 0"));
            }
        }

        let largest_slot = self.preset_slot_size.max(self.custom_slot_size);
        if self.command_line_size <= largest_slot {
            return Err(invalid(
                "command_line_size",
                self.command_line_size,
                &format!("a value greater than the largest slot size ({largest_slot})"),
            ));
        }

        // Every sub-command is stored with a terminating newline, a slot of L bytes needs L + 1
        if self.injected_buffer_size <= largest_slot {
            return Err(invalid(
                "injected_buffer_size",
                self.injected_buffer_size,
                &format!("a value greater than the largest slot size ({largest_slot})"),
            ));
        }

        let mut slot_nums = vec![("preset_slot_num", self.preset_slot_num)];
        if self.custom_pool {
            slot_nums.push(("custom_slot_num", self.custom_slot_num));
        }
        for (field, slot_num) in slot_nums {
            if (self.code_span as usize) < slot_num {
                return Err(invalid(
                    "code_span",
                    self.code_span,
                    &format!("at least {field} ({slot_num}), or slots can't be addressed"),
                ));
            }
        }

        let preset = self.code_range("preset_base_code", self.preset_base_code)?;
        let custom = self.code_range("custom_base_code", self.custom_base_code)?;
        if self.custom_pool && preset.0 < custom.1 && custom.0 < preset.1 {
            return Err(ConfigError::OverlappingCodes { preset, custom });
        }
        Ok(())
    }

    fn code_range(&self, field: &str, base: u16) -> ConfigResult<(u16, u16)> {
        base.checked_add(self.code_span)
            .map(|end| (base, end))
            .ok_or_else(|| invalid(field, base, "a base code whose range fits in u16"))
    }
}

fn invalid(field: &str, value: impl ToString, expected: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

/// Top level of `music.toml`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MusicTomlConfig {
    /// Music macro constants
    #[serde(default)]
    pub music: MusicConstantsConfig,
}

impl MusicTomlConfig {
    /// Parse and validate a config from a toml string, `source` is only used in error messages
    pub fn from_toml_str(content: &str, source: &str) -> ConfigResult<Self> {
        let config: MusicTomlConfig = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: source.to_string(),
            message: e.message().to_string(),
        })?;
        config.music.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the config file at `path`
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }
}
