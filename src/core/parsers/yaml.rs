use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_yaml::Value;

use crate::core::{CompileError, ParseError, SourceDocument, tree::document_tree};

/// Parse YAML text into a source document.
///
/// `path` is only used to label errors.
pub fn parse_document(input: &str, path: Option<&str>) -> Result<SourceDocument, CompileError> {
    let annotate = |source: ParseError| CompileError::Parse {
        path: path.map(str::to_string),
        source,
    };

    let value: Value = serde_yaml::from_str(input).map_err(|e| annotate(e.into()))?;
    let content = document_tree(value).map_err(annotate)?;

    Ok(SourceDocument {
        path: path.map(str::to_string),
        content,
    })
}

/// Read and parse a YAML source file.
pub fn read_document(path: &Path) -> Result<SourceDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;

    let label = path.to_string_lossy();
    Ok(parse_document(&content, Some(label.as_ref()))?)
}
