//! Configuration management for todoparse.
//!
//! This module handles loading and saving configuration from `~/.todoparse/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig, ParserConfig};
