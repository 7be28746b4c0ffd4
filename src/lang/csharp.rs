//! C# language support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// C# programming language.
pub struct CSharp;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &[
        "string_literal",
        "string_literal_content",
        "verbatim_string_literal",
    ],
    identifier: &["identifier"],
    namespace: &["namespace_declaration", "file_scoped_namespace_declaration"],
    class: &["class_declaration"],
    comment: &["comment", "multiline_comment"],
};

impl Language for CSharp {
    fn name(&self) -> &'static str {
        "csharp"
    }

    fn extensions(&self) -> &[&'static str] {
        &["cs", "csx"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_c_sharp::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
