//! Syntax tree dumps for writing and debugging transform rules.

use crate::error::{Result, StencilError};
use crate::lang::Language;
use std::fmt::Write;
use std::path::Path;
use tree_sitter::Node;

const MAX_TEXT: usize = 60;

/// Renders the syntax tree of `source`, one node per line.
///
/// Each line shows the node kind, its semantic category if it has one, the
/// (shortened, escaped) node text and its 1-based line and 0-based column. Without a
/// `pattern`, nodes deeper than `max_depth` are omitted. With a `pattern`,
/// only nodes whose text contains it are shown, at any depth.
pub fn render_tree(
    lang: &dyn Language,
    source: &str,
    max_depth: usize,
    pattern: Option<&str>,
) -> Result<String> {
    let mut parser = lang.parser()?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| StencilError::Parse {
            path: Path::new("<source>").to_path_buf(),
            message: format!("{} parser produced no tree", lang.name()),
        })?;

    let mut output = String::new();
    let depth_limit = if pattern.is_some() { usize::MAX } else { max_depth };
    render_node(&mut output, tree.root_node(), source, lang, 0, depth_limit, pattern);
    Ok(output)
}

fn render_node(
    output: &mut String,
    node: Node<'_>,
    source: &str,
    lang: &dyn Language,
    depth: usize,
    max_depth: usize,
    pattern: Option<&str>,
) {
    if depth > max_depth {
        return;
    }

    let text = source.get(node.start_byte()..node.end_byte()).unwrap_or("");
    if pattern.is_none_or(|p| text.contains(p)) {
        let category = lang
            .classify(node.kind())
            .map(|c| format!(" :{c}"))
            .unwrap_or_default();
        let position = node.start_position();
        writeln!(
            output,
            "{}[{}{}] {:?} @ L{}:{}",
            "  ".repeat(depth),
            node.kind(),
            category,
            shorten(text),
            position.row + 1,
            position.column
        )
        .unwrap();
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        render_node(output, child, source, lang, depth + 1, max_depth, pattern);
    }
}

/// Truncates to a fixed number of characters.
fn shorten(text: &str) -> String {
    let mut short: String = text.chars().take(MAX_TEXT).collect();
    if short.len() < text.len() {
        short.push_str("...");
    }
    short
}
