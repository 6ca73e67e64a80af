//! Command-line interface for respira.

pub mod args;
pub mod commands;
