//! Tree flattener.
//!
//! Splits one translation tree into per-language contributions. Given
//!
//! ```yaml
//! menu:
//!   title:
//!     en: Menu
//!     pt: Menu
//!   items:
//!     home:
//!       en: Home
//!       pt: Início
//! ```
//!
//! the flattener yields `(en, {menu: {title: Menu}})`, `(pt, {menu: {title: Menu}})`,
//! `(en, {menu: {items: {home: Home}}})` and `(pt, {menu: {items: {home: Início}}})`,
//! in traversal order.

use super::error::FlattenError;
use super::tree::{Node, Tree};

/// One language's share of a flattened document.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub language: String,
    pub value: Node,
}

impl Contribution {
    pub fn new(language: impl Into<String>, value: Node) -> Self {
        Self {
            language: language.into(),
            value,
        }
    }

    fn nest(self, key: &str) -> Self {
        Self {
            language: self.language,
            value: self.value.nest(key),
        }
    }
}

/// Whether a node's children seen so far are values or sub-trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Values,
    Container,
}

impl NodeKind {
    fn of(node: &Node) -> Self {
        if node.is_scalar_like() {
            NodeKind::Values
        } else {
            NodeKind::Container
        }
    }
}

/// Flatten a node into contributions.
///
/// Children are visited in order and sub-trees are recursed into as soon as
/// they are reached. The first child whose kind differs from its earlier
/// siblings fails the walk with [`FlattenError::MixedChildren`] naming that
/// child.
pub fn flatten(tree: &Tree) -> Result<Vec<Contribution>, FlattenError> {
    let mut kind: Option<NodeKind> = None;
    let mut contributions = Vec::new();

    for (key, node) in tree {
        let child_kind = NodeKind::of(node);
        match kind {
            Some(seen) if seen != child_kind => {
                return Err(FlattenError::MixedChildren {
                    property: key.clone(),
                });
            }
            _ => kind = Some(child_kind),
        }

        match node {
            Node::Tree(subtree) => {
                let nested = flatten(subtree)?;
                contributions.extend(nested.into_iter().map(|c| c.nest(key)));
            }
            leaf => contributions.push(Contribution::new(key.as_str(), leaf.clone())),
        }
    }

    Ok(contributions)
}

/// Flatten a whole document.
///
/// Unlike [`flatten`], the root must be a container: translations placed
/// directly at the root have no key path to live under.
pub fn flatten_document(tree: &Tree) -> Result<Vec<Contribution>, FlattenError> {
    let contributions = flatten(tree)?;

    if let Some(unkeyed) = contributions.iter().find(|c| c.value.is_scalar_like()) {
        return Err(FlattenError::UnkeyedValue {
            property: unkeyed.language.clone(),
        });
    }

    Ok(contributions)
}
