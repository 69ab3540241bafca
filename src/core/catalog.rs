//! Translation compiler.
//!
//! Runs the flattener over every source document and folds the resulting
//! contributions into one tree per language.

use indexmap::IndexMap;
use serde::Serialize;

use super::error::CompileError;
use super::flatten::{Contribution, flatten_document};
use super::parsers::yaml::parse_document;
use super::tree::{Node, Tree};

/// A parsed translation source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    /// Used to label errors. `None` for in-memory sources.
    pub path: Option<String>,
    pub content: Tree,
}

impl SourceDocument {
    pub fn new(path: impl Into<String>, content: Tree) -> Self {
        Self {
            path: Some(path.into()),
            content,
        }
    }
}

/// Compiled translations, one merged tree per language.
///
/// Languages are kept in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    languages: IndexMap<String, Tree>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, language: &str) -> Option<&Tree> {
        self.languages.get(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tree)> {
        self.languages
            .iter()
            .map(|(language, tree)| (language.as_str(), tree))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Merge one contribution into its language's tree.
    ///
    /// The document flattener only produces tree-valued contributions. Any
    /// other value has no key to live under and is ignored.
    pub fn add(&mut self, contribution: Contribution) {
        let Contribution { language, value } = contribution;
        let target = self.languages.entry(language).or_default();
        if let Node::Tree(tree) = value {
            deep_merge(target, tree);
        }
    }
}

impl FromIterator<Contribution> for Catalog {
    fn from_iter<I: IntoIterator<Item = Contribution>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for contribution in iter {
            catalog.add(contribution);
        }
        catalog
    }
}

/// Merge `from` into `into`.
///
/// Sub-trees present on both sides are merged key by key, and sequences
/// present on both sides are merged index by index, so `[a, b, c]` merged with
/// `[x]` gives `[x, b, c]`. Any other pairing is replaced by the value from
/// `from`. Existing keys keep their position.
pub fn deep_merge(into: &mut Tree, from: Tree) {
    for (key, value) in from {
        match into.get_mut(&key) {
            Some(existing) => merge_node(existing, value),
            None => {
                into.insert(key, value);
            }
        }
    }
}

fn merge_node(existing: &mut Node, incoming: Node) {
    match (existing, incoming) {
        (Node::Tree(existing), Node::Tree(incoming)) => deep_merge(existing, incoming),
        (Node::Sequence(existing), Node::Sequence(incoming)) => merge_sequence(existing, incoming),
        (existing, incoming) => *existing = incoming,
    }
}

fn merge_sequence(into: &mut Vec<Node>, from: Vec<Node>) {
    for (index, value) in from.into_iter().enumerate() {
        match into.get_mut(index) {
            Some(existing) => merge_node(existing, value),
            None => into.push(value),
        }
    }
}

/// Compile documents in order into a catalog.
///
/// Fails on the first document that cannot be flattened. Later documents win
/// when two of them define the same leaf for the same language.
pub fn compile_documents(documents: &[SourceDocument]) -> Result<Catalog, CompileError> {
    let mut contributions = Vec::new();

    for document in documents {
        let flattened =
            flatten_document(&document.content).map_err(|source| CompileError::Hierarchy {
                path: document.path.clone(),
                source,
            })?;
        contributions.extend(flattened);
    }

    Ok(contributions.into_iter().collect())
}

/// Compile a single in-memory YAML text.
///
/// `label` is only used in error messages.
pub fn compile_from_text(input: &str, label: Option<&str>) -> Result<Catalog, CompileError> {
    let document = parse_document(input, label)?;
    compile_documents(std::slice::from_ref(&document))
}
