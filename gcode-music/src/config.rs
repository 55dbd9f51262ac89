//! Runtime configuration of the macro pools.
//!
//! Pool sizes are compile time constants generated from `music.toml`, see the crate's build
//! script. Which pools exist, where their M-codes start and what they contain after boot is
//! decided here.

use crate::default_content::{CUSTOM_MACROS, DefaultContent, PRESET_MACROS};
use crate::{CUSTOM_BASE_CODE, CUSTOM_POOL_ENABLED, MACRO_CODE_SPAN, PRESET_BASE_CODE};

/// Config of a single slot pool
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// M-code number addressing slot 0
    pub base_code: u16,
    /// Number of consecutive M-codes routed to this pool
    pub code_span: u16,
    /// Content loaded into the slots at construction
    pub defaults: DefaultContent,
}

impl PoolConfig {
    pub const fn new(base_code: u16, code_span: u16) -> Self {
        Self {
            base_code,
            code_span,
            defaults: &[],
        }
    }

    pub const fn with_defaults(mut self, defaults: DefaultContent) -> Self {
        self.defaults = defaults;
        self
    }

    /// M9000..M9004 with the built-in tunes
    pub const fn preset() -> Self {
        Self::new(PRESET_BASE_CODE, MACRO_CODE_SPAN).with_defaults(PRESET_MACROS)
    }

    /// M9005..M9009, empty
    pub const fn custom() -> Self {
        Self::new(CUSTOM_BASE_CODE, MACRO_CODE_SPAN).with_defaults(CUSTOM_MACROS)
    }
}

/// Config of the macro dispatcher.
///
/// A pool set to `None` doesn't exist, its M-codes are silently ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MacroConfig {
    pub preset: Option<PoolConfig>,
    pub custom: Option<PoolConfig>,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            preset: Some(PoolConfig::preset()),
            custom: if CUSTOM_POOL_ENABLED {
                Some(PoolConfig::custom())
            } else {
                None
            },
        }
    }
}

impl MacroConfig {
    /// Config with the preset pool only
    pub fn preset_only() -> Self {
        Self {
            preset: Some(PoolConfig::preset()),
            custom: None,
        }
    }
}
