//! Reusable tree-sitter parsers, one per language.

use super::Language;
use crate::error::{Result, StencilError};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use tree_sitter::{Parser, Tree};

/// Parsers keyed on language name, created on first use.
///
/// A cache is owned by a single execution context. Workers that process files
/// in parallel each keep their own.
#[derive(Default)]
pub struct ParserCache {
    parsers: HashMap<&'static str, Parser>,
}

impl ParserCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `source` with the parser for `lang`, creating it if needed.
    pub fn parse(&mut self, lang: &dyn Language, source: &[u8]) -> Result<Tree> {
        let parser = match self.parsers.entry(lang.name()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(lang.parser()?),
        };

        parser.parse(source, None).ok_or_else(|| StencilError::Parse {
            path: Path::new("<source>").to_path_buf(),
            message: format!("{} parser produced no tree", lang.name()),
        })
    }

    /// Returns the number of parsers created so far.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns true if no parser has been created yet.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{Go, PlainText, Python};

    #[test]
    fn test_parsers_are_reused() {
        let mut cache = ParserCache::new();
        assert!(cache.is_empty());

        cache.parse(&Python, b"x = 1\n").unwrap();
        cache.parse(&Python, b"y = 2\n").unwrap();
        assert_eq!(cache.len(), 1);

        cache.parse(&Go, b"package main\n").unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_grammarless_language_is_rejected() {
        let mut cache = ParserCache::new();
        let err = cache.parse(&PlainText, b"hello").unwrap_err();
        assert!(matches!(err, StencilError::UnsupportedLanguage(_)));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_parse_produces_module_root() {
        let mut cache = ParserCache::new();
        let tree = cache.parse(&Python, b"def main():\n    pass\n").unwrap();
        let root = tree.root_node();
        assert_eq!(root.kind(), "module");
        assert!(!root.has_error());
    }
}
