//! Re-definable G-code sound macros.
//!
//! A machine controller keeps a few numbered macro slots. Sending `M9000` plays the sequence
//! stored in slot 0, sending `M9005 M300 S1567 P206|M300 S0 P206` stores a new sequence into
//! the first custom slot. Two independent pools exist: a preset pool shipping five tunes and
//! a custom pool which starts empty.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod channel;
pub mod command_loop;
pub mod config;
pub mod default_content;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod pool;
pub mod slot;
pub mod trigger;

pub use command_loop::{CommandLoop, CommandSink};
pub use config::{MacroConfig, PoolConfig};
pub use dispatcher::{MacroDispatcher, MacroOutcome, PoolSelector};
pub use error::{ExecutorError, MacroError};
pub use executor::{CommandQueue, DiagnosticSink, Executor, LogDiagnostics};
pub use trigger::Trigger;

/// Mutex flavour used by the channels in this crate
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

// Include generated constants
include!(concat!(env!("OUT_DIR"), "/constants.rs"));
