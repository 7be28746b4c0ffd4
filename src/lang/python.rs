//! Python language support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// Python programming language.
pub struct Python;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &["string", "string_content"],
    identifier: &["identifier"],
    namespace: &[],
    class: &["class_definition"],
    comment: &["comment"],
};

impl Language for Python {
    fn name(&self) -> &'static str {
        "python"
    }

    fn extensions(&self) -> &[&'static str] {
        &["py", "pyi"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_python::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
