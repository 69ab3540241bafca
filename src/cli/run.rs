use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{compile::compile, init::init},
    exit_status::ExitStatus,
};

/// Dispatch to the handler for the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Compile(cmd)) => compile(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
