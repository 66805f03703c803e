//! Command-line interface for matterkit

pub mod args;
pub mod commands;
