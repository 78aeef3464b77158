//!
//! Nested role trees and flattening to dotted key paths.
//!

use crate::Color;
use indexmap::IndexMap;
use std::borrow::Cow;

/// One node of a [StyleTree].
#[derive(Debug, Clone)]
pub enum StyleNode {
    Color(Color),
    Tree(Box<StyleTree>),
}

impl From<Color> for StyleNode {
    fn from(value: Color) -> Self {
        StyleNode::Color(value)
    }
}

impl From<StyleTree> for StyleNode {
    fn from(value: StyleTree) -> Self {
        StyleNode::Tree(Box::new(value))
    }
}

/// Nested mapping from role names to colors.
///
/// Entries keep their insertion order. A key may be the empty
/// string, such an entry collapses onto the parent path when
/// flattening. Keys may also contain dots of their own, those
/// count as a single key.
#[derive(Debug, Default, Clone)]
pub struct StyleTree {
    nodes: IndexMap<Cow<'static, str>, StyleNode>,
}

impl StyleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. Replaces an existing entry for the key.
    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, node: impl Into<StyleNode>) {
        self.nodes.insert(key.into(), node.into());
    }

    /// Flattens the tree to a map of dot-joined paths to hex colors.
    ///
    /// Walks depth-first in insertion order. This is a pure
    /// transformation, flattening the same tree twice gives the
    /// same map.
    pub fn flatten(&self) -> IndexMap<String, String> {
        let mut flat = IndexMap::new();
        self.flatten_into(None, &mut flat);
        flat
    }

    fn flatten_into(&self, prefix: Option<&str>, flat: &mut IndexMap<String, String>) {
        for (key, node) in &self.nodes {
            let path = match prefix {
                Some(prefix) if !key.is_empty() => format!("{}.{}", prefix, key),
                Some(prefix) => prefix.to_string(),
                None => key.to_string(),
            };
            match node {
                StyleNode::Color(color) => {
                    flat.insert(path, color.hex());
                }
                StyleNode::Tree(tree) => {
                    tree.flatten_into(Some(&path), flat);
                }
            }
        }
    }
}

/// Builds a [StyleTree](crate::style::StyleTree) from key/value pairs.
///
/// Values can be [Color](crate::Color)s or nested `styles!` blocks.
#[macro_export]
macro_rules! styles {
    ($($k:expr => $v:expr),* $(,)?) => {{
        let mut tree = $crate::style::StyleTree::new();
        $(tree.insert($k, $v);)*
        tree
    }};
}
