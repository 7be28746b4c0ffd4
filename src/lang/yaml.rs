//! YAML support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// YAML documents.
pub struct Yaml;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &[
        "string_scalar",
        "double_quote_scalar",
        "single_quote_scalar",
        "block_scalar",
    ],
    identifier: &["flow_node"],
    namespace: &[],
    class: &[],
    comment: &["comment"],
};

impl Language for Yaml {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn extensions(&self) -> &[&'static str] {
        &["yaml", "yml"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_yaml::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
