//! Go language support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// Go programming language.
pub struct Go;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &["raw_string_literal", "interpreted_string_literal"],
    identifier: &[
        "identifier",
        "type_identifier",
        "field_identifier",
        "package_identifier",
    ],
    namespace: &["package_clause"],
    class: &["type_declaration"],
    comment: &["comment"],
};

impl Language for Go {
    fn name(&self) -> &'static str {
        "go"
    }

    fn extensions(&self) -> &[&'static str] {
        &["go"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_go::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
