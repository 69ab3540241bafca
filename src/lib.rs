//! i18n-compile - YAML translation compiler
//!
//! Compiles hierarchical YAML translation files, where every leaf is keyed by
//! a language code, into one JSON dictionary per language (or one merged
//! file holding all languages).
//!
//! ```
//! let catalog = i18n_compile::compile_from_text("greeting:\n  en: Hi\n  pt: Oi\n", None)?;
//! assert_eq!(
//!     serde_json::to_string(&catalog)?,
//!     r#"{"en":{"greeting":"Hi"},"pt":{"greeting":"Oi"}}"#
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, flattening, merging and writing translations

pub mod cli;
pub mod config;
pub mod core;

pub use crate::core::{
    Catalog, CompileError, CompileOptions, CompileOutcome, compile, compile_from_text,
};
