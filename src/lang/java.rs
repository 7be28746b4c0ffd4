//! Java language support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// Java programming language.
pub struct Java;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &["string_literal", "string_fragment"],
    identifier: &["identifier"],
    namespace: &["package_declaration"],
    class: &["class_declaration"],
    comment: &["line_comment", "block_comment"],
};

impl Language for Java {
    fn name(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &[&'static str] {
        &["java"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_java::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
