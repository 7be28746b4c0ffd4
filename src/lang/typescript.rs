//! TypeScript and TSX language support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// Node types shared by the TypeScript, TSX and JavaScript grammars.
pub(super) const ECMASCRIPT_NODE_TYPES: NodeTypes = NodeTypes {
    string: &["string", "string_fragment", "template_string"],
    identifier: &["identifier", "property_identifier"],
    namespace: &[],
    class: &["class_declaration"],
    comment: &["comment"],
};

/// TypeScript programming language.
pub struct TypeScript;

impl Language for TypeScript {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn extensions(&self) -> &[&'static str] {
        &["ts", "mts", "cts"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &ECMASCRIPT_NODE_TYPES
    }
}

/// TypeScript with JSX.
pub struct Tsx;

impl Language for Tsx {
    fn name(&self) -> &'static str {
        "tsx"
    }

    fn extensions(&self) -> &[&'static str] {
        &["tsx"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_typescript::LANGUAGE_TSX.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &ECMASCRIPT_NODE_TYPES
    }
}
