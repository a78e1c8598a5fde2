//! Process execution

pub mod command_executor;

pub use command_executor::{CommandExecutor, CommandOutput, ProcessCommandExecutor};

#[cfg(test)]
pub use command_executor::MockCommandExecutor;
