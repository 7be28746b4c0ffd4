//! JavaScript language support.

use super::typescript::ECMASCRIPT_NODE_TYPES;
use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// JavaScript programming language.
pub struct JavaScript;

impl Language for JavaScript {
    fn name(&self) -> &'static str {
        "javascript"
    }

    fn extensions(&self) -> &[&'static str] {
        &["js", "jsx", "mjs", "cjs"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_javascript::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &ECMASCRIPT_NODE_TYPES
    }
}
