//! Command-line interface.
//!
//! Argument parsing lives in [`args`], command implementations and dispatch
//! in [`commands`].

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ValidateArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
