//! Ruby language support.

use super::{Language, NodeTypes};
use tree_sitter::Language as TsLanguage;

/// Ruby programming language.
pub struct Ruby;

const NODE_TYPES: NodeTypes = NodeTypes {
    string: &["string", "string_content"],
    identifier: &["identifier", "constant"],
    namespace: &["module"],
    class: &["class"],
    comment: &["comment"],
};

impl Language for Ruby {
    fn name(&self) -> &'static str {
        "ruby"
    }

    fn extensions(&self) -> &[&'static str] {
        &["rb", "rake", "gemspec"]
    }

    fn filenames(&self) -> &[&'static str] {
        &["Gemfile", "Rakefile"]
    }

    fn grammar(&self) -> Option<TsLanguage> {
        Some(tree_sitter_ruby::LANGUAGE.into())
    }

    fn node_types(&self) -> &NodeTypes {
        &NODE_TYPES
    }
}
