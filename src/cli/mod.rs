//! Command-line interface for todoparse.

pub mod args;
pub mod commands;
