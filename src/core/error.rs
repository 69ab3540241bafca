//! Error types for parsing and compiling translation sources.

use thiserror::Error;

/// A translation tree that cannot be flattened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlattenError {
    /// A node mixes scalar values and sub-trees among its children.
    #[error("Bad hierarchy format")]
    MixedChildren { property: String },
    /// The document root holds translations directly, with no key above them.
    #[error("Bad hierarchy format (translation value without a key path)")]
    UnkeyedValue { property: String },
}

impl FlattenError {
    /// The child key at which the problem was detected.
    pub fn property(&self) -> &str {
        match self {
            FlattenError::MixedChildren { property } | FlattenError::UnkeyedValue { property } => {
                property
            }
        }
    }
}

/// A source text that could not be turned into a translation tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported YAML tag {0}")]
    UnsupportedTag(String),
    #[error("mapping keys must be scalars")]
    ComplexKey,
    #[error("document root must be a mapping")]
    NonMappingRoot,
}

/// A compilation failure, annotated with the offending source.
///
/// Messages read `<reason> in "<path>"`, the path segment being omitted when
/// the source has no path. Hierarchy errors end with `at <property>`.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("{source}{}", in_source(.path))]
    Parse {
        path: Option<String>,
        source: ParseError,
    },
    #[error("{source}{} at {}", in_source(.path), FlattenError::property(.source))]
    Hierarchy {
        path: Option<String>,
        source: FlattenError,
    },
}

impl CompileError {
    pub fn path(&self) -> Option<&str> {
        match self {
            CompileError::Parse { path, .. } | CompileError::Hierarchy { path, .. } => {
                path.as_deref()
            }
        }
    }
}

fn in_source(path: &Option<String>) -> String {
    match path {
        Some(path) => format!(" in \"{}\"", path),
        None => String::new(),
    }
}
