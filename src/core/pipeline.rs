//! Compilation pipeline: resolve sources, parse, compile, write.
//!
//! Nothing here prints. Callers get a [`CompileOutcome`] and decide how to
//! report written files and skipped sources.

use std::path::PathBuf;

use anyhow::Result;

use super::catalog::{Catalog, compile_documents};
use super::destination::language_destination;
use super::parsers::yaml::read_document;
use super::sources::{ResolvedSources, resolve_sources};
use super::writer::{WrittenFile, write_json};

/// Options controlling how a catalog is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Write every language into a single file at the destination.
    pub merge: bool,
    /// Placeholder in the destination replaced by the language code.
    pub lang_place: Option<String>,
}

/// What a compilation run did.
#[derive(Debug, Default)]
pub struct CompileOutcome {
    /// Source files that were compiled, in order.
    pub sources: Vec<PathBuf>,
    /// Paths skipped because they could not be accessed.
    pub skipped: Vec<PathBuf>,
    pub written: Vec<WrittenFile>,
    pub catalog: Catalog,
}

/// Compile every file matched by `patterns` and write the result.
///
/// Inaccessible sources are skipped and listed in the outcome. Any parse or
/// hierarchy error aborts the run before anything is written. Write failures
/// abort the run too, leaving files already written in place.
pub fn compile<S: AsRef<str>>(
    patterns: &[S],
    destination: &str,
    options: &CompileOptions,
) -> Result<CompileOutcome> {
    compile_resolved(resolve_sources(patterns)?, destination, options)
}

/// Compile already resolved sources and write the result.
///
/// Lets a caller report `resolved.missing` before parsing starts, so the
/// warnings are not lost when a source later fails to compile.
pub fn compile_resolved(
    resolved: ResolvedSources,
    destination: &str,
    options: &CompileOptions,
) -> Result<CompileOutcome> {
    let documents = resolved
        .files
        .iter()
        .map(|path| read_document(path))
        .collect::<Result<Vec<_>>>()?;

    let catalog = compile_documents(&documents)?;
    let written = write_catalog(&catalog, destination, options)?;

    Ok(CompileOutcome {
        sources: resolved.files,
        skipped: resolved.missing,
        written,
        catalog,
    })
}

/// Write a compiled catalog, merged or one file per language.
pub fn write_catalog(
    catalog: &Catalog,
    destination: &str,
    options: &CompileOptions,
) -> Result<Vec<WrittenFile>> {
    if options.merge {
        let path = PathBuf::from(destination);
        write_json(&path, catalog)?;
        return Ok(vec![WrittenFile {
            path,
            language: None,
        }]);
    }

    let mut written = Vec::with_capacity(catalog.len());
    for (language, tree) in catalog.iter() {
        let path = PathBuf::from(language_destination(
            destination,
            language,
            options.lang_place.as_deref(),
        ));
        write_json(&path, tree)?;
        written.push(WrittenFile {
            path,
            language: Some(language.to_string()),
        });
    }

    Ok(written)
}
