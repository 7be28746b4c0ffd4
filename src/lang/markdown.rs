//! Markdown language support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// Markdown documents, parsed with the block grammar.
///
/// Paragraph and heading text arrive as single `inline` nodes. Fenced code
/// block contents classify as nothing and are never rewritten.
pub struct Markdown;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &["inline", "text", "code_span", "link_text"],
    identifier: &["link_destination"],
    namespace: &[],
    class: &[],
    comment: &["html_comment"],
};

impl Language for Markdown {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extensions(&self) -> &[&'static str] {
        &["md", "markdown", "mdx"]
    }

    fn filenames(&self) -> &[&'static str] {
        &["README", "CHANGELOG", "CONTRIBUTING"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_md::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
