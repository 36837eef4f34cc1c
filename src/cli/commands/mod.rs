//! CLI command implementations.

pub mod dispatcher;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use validate::ValidateCommand;
