//! Core compilation engine.
//!
//! ## Pipeline
//!
//! 1. **Resolve** (`sources`): expand patterns into a deduplicated file list
//! 2. **Parse** (`parsers`): YAML text into translation trees (`tree`)
//! 3. **Flatten** (`flatten`): split each tree into per-language contributions
//! 4. **Compile** (`catalog`): deep-merge contributions into a catalog
//! 5. **Write** (`destination`, `writer`): one file per language, or one merged file
//!
//! `pipeline` drives all five steps.

pub mod catalog;
pub mod destination;
pub mod error;
pub mod flatten;
pub mod parsers;
pub mod pipeline;
pub mod sources;
pub mod tree;
pub mod writer;

pub use catalog::{Catalog, SourceDocument, compile_documents, compile_from_text, deep_merge};
pub use destination::language_destination;
pub use error::{CompileError, FlattenError, ParseError};
pub use flatten::{Contribution, flatten, flatten_document};
pub use parsers::yaml::{parse_document, read_document};
pub use pipeline::{CompileOptions, CompileOutcome, compile, compile_resolved, write_catalog};
pub use sources::{ResolvedSources, resolve_sources};
pub use tree::{Node, Scalar, Tree};
pub use writer::{WrittenFile, write_json};
