//! Rust language support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// Rust programming language.
pub struct Rust;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &["string_literal", "raw_string_literal", "string_content"],
    identifier: &["identifier", "type_identifier", "field_identifier"],
    namespace: &["mod_item"],
    class: &["struct_item", "enum_item", "trait_item"],
    comment: &["line_comment", "block_comment"],
};

impl Language for Rust {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn extensions(&self) -> &[&'static str] {
        &["rs"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_rust::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
