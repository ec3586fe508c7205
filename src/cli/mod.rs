//! Command-line interface
//!
//! Argument definitions and command handlers.

pub mod args;
pub mod commands;
