//! Translation tree model.
//!
//! Parsed YAML is converted into a closed recursive [`Node`] type so the
//! hierarchy check and the deep merge can match on it exhaustively. Mappings
//! keep their insertion order, which is also the order languages and keys
//! appear in the compiled JSON.

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value as YamlValue;

use super::error::ParseError;

/// An insertion-ordered mapping of child keys to nodes.
pub type Tree = IndexMap<String, Node>;

/// A scalar leaf value, restricted to what JSON can represent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

/// A node of a translation tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(Scalar),
    /// Sequences are opaque values: they are never treated as containers.
    Sequence(Vec<Node>),
    Tree(Tree),
}

impl Node {
    /// Returns true for anything that is not a sub-tree.
    pub fn is_scalar_like(&self) -> bool {
        !matches!(self, Node::Tree(_))
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Node::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    /// Wrap this node one level deeper, under `key`.
    pub fn nest(self, key: &str) -> Node {
        let mut tree = Tree::with_capacity(1);
        tree.insert(key.to_string(), self);
        Node::Tree(tree)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Leaf(Scalar::from(value))
    }
}

impl TryFrom<YamlValue> for Node {
    type Error = ParseError;

    fn try_from(value: YamlValue) -> Result<Self, Self::Error> {
        match value {
            YamlValue::Null => Ok(Node::Leaf(Scalar::Null)),
            YamlValue::Bool(b) => Ok(Node::Leaf(Scalar::Bool(b))),
            YamlValue::Number(n) => Ok(Node::Leaf(convert_number(&n))),
            YamlValue::String(s) => Ok(Node::Leaf(Scalar::String(s))),
            YamlValue::Sequence(items) => items
                .into_iter()
                .map(Node::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Node::Sequence),
            YamlValue::Mapping(mapping) => {
                let mut tree = Tree::with_capacity(mapping.len());
                for (key, value) in mapping {
                    tree.insert(mapping_key(key)?, Node::try_from(value)?);
                }
                Ok(Node::Tree(tree))
            }
            YamlValue::Tagged(tagged) => Err(ParseError::UnsupportedTag(tagged.tag.to_string())),
        }
    }
}

/// Convert the root of a YAML document into a tree.
///
/// An empty document yields an empty tree.
pub fn document_tree(value: YamlValue) -> Result<Tree, ParseError> {
    match Node::try_from(value)? {
        Node::Tree(tree) => Ok(tree),
        Node::Leaf(Scalar::Null) => Ok(Tree::new()),
        _ => Err(ParseError::NonMappingRoot),
    }
}

/// Scalar keys are stringified the way a JSON-schema YAML loader does.
fn mapping_key(key: YamlValue) -> Result<String, ParseError> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => Err(ParseError::UnsupportedTag(tagged.tag.to_string())),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(ParseError::ComplexKey),
    }
}

fn convert_number(n: &serde_yaml::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        return Scalar::Number(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Scalar::Number(u.into());
    }
    // NaN and infinities have no JSON form
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .map_or(Scalar::Null, Scalar::Number)
}
