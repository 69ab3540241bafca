use std::env;

use anyhow::{Context, Result};

use super::super::args::CompileCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::config::{Config, load_config};
use crate::core::{CompileOptions, compile_resolved, resolve_sources};

/// Settings after merging command-line arguments over the config file.
#[derive(Debug, PartialEq, Eq)]
struct CompileSettings {
    patterns: Vec<String>,
    destination: String,
    options: CompileOptions,
}

impl CompileSettings {
    fn resolve(cmd: &CompileCommand, config: Config) -> Self {
        let patterns = if cmd.patterns.is_empty() {
            config.sources
        } else {
            cmd.patterns.clone()
        };

        // An empty placeholder counts as unset.
        let lang_place = cmd
            .lang_place
            .clone()
            .filter(|token| !token.is_empty())
            .or(config.lang_place.filter(|token| !token.is_empty()));

        Self {
            patterns,
            destination: cmd.destination.clone().unwrap_or(config.destination),
            options: CompileOptions {
                merge: cmd.merge || config.merge,
                lang_place,
            },
        }
    }
}

pub fn compile(cmd: CompileCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd)?.config;
    let settings = CompileSettings::resolve(&cmd, config);

    let resolved = resolve_sources(&settings.patterns)?;
    report::print_source_warnings(&resolved);

    let outcome = compile_resolved(resolved, &settings.destination, &settings.options)?;
    report::print_outcome(&outcome, cmd.verbose);

    Ok(ExitStatus::Success)
}
