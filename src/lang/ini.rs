//! INI language support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// INI-style configuration files.
pub struct Ini;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &["setting_value"],
    identifier: &["setting_name", "section_name"],
    namespace: &[],
    class: &[],
    comment: &["comment"],
};

impl Language for Ini {
    fn name(&self) -> &'static str {
        "ini"
    }

    fn extensions(&self) -> &[&'static str] {
        &["ini"]
    }

    fn filenames(&self) -> &[&'static str] {
        &[".editorconfig", ".gitconfig"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_ini::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
