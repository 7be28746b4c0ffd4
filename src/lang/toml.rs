//! TOML support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// TOML documents.
pub struct Toml;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &["string"],
    identifier: &["bare_key"],
    namespace: &[],
    class: &[],
    comment: &["comment"],
};

impl Language for Toml {
    fn name(&self) -> &'static str {
        "toml"
    }

    fn extensions(&self) -> &[&'static str] {
        &["toml"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_toml_ng::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
