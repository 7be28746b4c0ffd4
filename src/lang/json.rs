//! JSON support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// JSON documents. Only string values and keys are eligible.
pub struct Json;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &["string", "string_content"],
    ..NodeTypes::EMPTY
};

impl Language for Json {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_json::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
