//! CLI command implementations
//!
//! This module contains the commands supported by the CLI application
//! using the Command pattern.

pub mod command_traits;
pub mod extract_command;

pub use command_traits::Command;
pub use extract_command::ExtractCommand;
