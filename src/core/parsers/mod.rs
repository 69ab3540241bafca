//! Source file parsers.
//!
//! - `yaml`: YAML translation sources (JSON-compatible schema)

pub mod yaml;
