//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compile`: Compile YAML translation sources into JSON files
//! - `init`: Create a default configuration file

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CompileCommand {
    /// Source files or glob patterns (overrides config file)
    pub patterns: Vec<String>,

    /// Destination path template (overrides config file)
    #[arg(short = 'o', long = "out", value_name = "DEST")]
    pub destination: Option<String>,

    /// Write all languages into a single file
    #[arg(short, long)]
    pub merge: bool,

    /// Placeholder in the destination replaced by the language code
    #[arg(long, value_name = "TOKEN")]
    pub lang_place: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile YAML translation files into JSON
    Compile(CompileCommand),
    /// Initialize a new .i18nrc.json configuration file
    Init,
}
