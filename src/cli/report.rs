//! Report formatting and printing utilities.
//!
//! Separate from core logic so the compiler can be used as a library
//! without writing to the console.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{CompileOutcome, ResolvedSources, WrittenFile};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Warn about sources that will not be compiled.
///
/// Printed to stderr before parsing starts.
pub fn print_source_warnings(resolved: &ResolvedSources) {
    print_source_warnings_to(resolved, &mut io::stderr().lock());
}

/// Print the result of a compilation run to stdout.
pub fn print_outcome(outcome: &CompileOutcome, verbose: bool) {
    print_written_to(&outcome.written, &mut io::stdout().lock());
    if verbose {
        print_summary_to(outcome, &mut io::stdout().lock());
    }
}

/// Print one warning per missing source, plus one if nothing is left to compile.
pub fn print_source_warnings_to<W: Write>(resolved: &ResolvedSources, writer: &mut W) {
    for path in &resolved.missing {
        let _ = writeln!(
            writer,
            "{} Source file \"{}\" not found.",
            "warning:".bold().yellow(),
            path.display()
        );
    }

    if resolved.files.is_empty() {
        let _ = writeln!(
            writer,
            "{} no source files matched",
            "warning:".bold().yellow()
        );
    }
}

/// Print one line per written file.
pub fn print_written_to<W: Write>(written: &[WrittenFile], writer: &mut W) {
    for file in written {
        let _ = writeln!(
            writer,
            "{} File \"{}\" created.",
            SUCCESS_MARK.green(),
            file.path.display()
        );
    }
}

/// Print the compiled sources and languages.
pub fn print_summary_to<W: Write>(outcome: &CompileOutcome, writer: &mut W) {
    for source in &outcome.sources {
        let _ = writeln!(writer, "  {} {}", "compiled".dimmed(), source.display());
    }

    let languages: Vec<&str> = outcome.catalog.languages().collect();
    let _ = writeln!(
        writer,
        "Compiled {} source {} into {} {}{}",
        outcome.sources.len(),
        plural(outcome.sources.len(), "file", "files"),
        languages.len(),
        plural(languages.len(), "language", "languages"),
        if languages.is_empty() {
            String::new()
        } else {
            format!(" ({})", languages.join(", ")).cyan().to_string()
        }
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
