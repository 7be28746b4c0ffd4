//! Files without a grammar, substituted as whole buffers.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// Plain text and other files that should always be substituted verbatim.
pub struct PlainText;

impl Language for PlainText {
    fn name(&self) -> &'static str {
        "plaintext"
    }

    fn extensions(&self) -> &[&'static str] {
        &["txt", "sln"]
    }

    fn filenames(&self) -> &[&'static str] {
        &[
            "LICENSE",
            "LICENCE",
            "NOTICE",
            "AUTHORS",
            "CODEOWNERS",
            ".env.example",
        ]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        None
    }

    fn node_types(&self) -> &NodeTypes {
        &NodeTypes::EMPTY
    }
}
