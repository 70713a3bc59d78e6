//! lingtag CLI library
//!
//! This library provides the command-line interface for the lingtag
//! language classification system.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
