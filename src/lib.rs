// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;

pub mod content;
pub mod csv;
pub mod error;
pub mod extract;
pub mod file;
pub mod gui;
pub mod host;
pub mod net;
pub mod orchestrator;
pub mod progress;
pub mod protocol;
pub mod record;
pub mod table;

pub use error::{ExtractError, ScanError};
pub use orchestrator::{Orchestrator, ScanState};
pub use record::TranslationRecord;
