//! Placeholder substitution over whole files.
//!
//! Files with a grammar are parsed and substituted node by node
//! ([`ast::collect`] then [`splice::apply_replacements`]); files whose profile
//! has no grammar use [`text::apply_plaintext`].

pub mod ast;
pub mod splice;
pub mod text;

pub use ast::{SyntaxNode, collect};
pub use splice::{Replacement, apply_replacements};
pub use text::apply_plaintext;

use crate::lang::{Language, LanguageRegistry, ParserCache};
use crate::rules::TransformRule;
use std::path::Path;
use tracing::{debug, warn};

/// The outcome of transforming one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub content: Vec<u8>,
    /// True if any substitution was made.
    pub changed: bool,
}

impl Transformed {
    /// Returns a copy of `source`, marked unchanged.
    pub fn unchanged(source: &[u8]) -> Self {
        Self {
            content: source.to_vec(),
            changed: false,
        }
    }
}

/// Applies a compiled rule set to files, one at a time.
///
/// Owns the language registry and a parser per language. Transformation
/// never fails: unrecognized or unparseable input comes back unchanged.
pub struct Transformer {
    rules: Vec<TransformRule>,
    registry: LanguageRegistry,
    parsers: ParserCache,
}

impl Transformer {
    /// Creates a transformer with the built-in languages.
    pub fn new(rules: Vec<TransformRule>) -> Self {
        Self::with_registry(rules, LanguageRegistry::new())
    }

    /// Creates a transformer with a custom language registry.
    pub fn with_registry(rules: Vec<TransformRule>, registry: LanguageRegistry) -> Self {
        Self {
            rules,
            registry,
            parsers: ParserCache::new(),
        }
    }

    /// Returns the compiled rules, in evaluation order.
    pub fn rules(&self) -> &[TransformRule] {
        &self.rules
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Resolves the language profile for a file path.
    pub fn resolve_language(&self, path: &Path) -> Option<&dyn Language> {
        self.registry.resolve(path)
    }

    /// Transforms one file's content, dispatching on its language profile.
    pub fn transform_file(&mut self, path: &Path, content: &[u8]) -> Transformed {
        let Some(lang) = self.registry.resolve(path) else {
            debug!(path = %path.display(), "no language profile, copying verbatim");
            return Transformed::unchanged(content);
        };

        let result = if lang.grammar().is_some() {
            transform_syntax(&mut self.parsers, lang, &self.rules, path, content)
        } else {
            apply_plaintext(content, &self.rules)
        };

        debug!(
            path = %path.display(),
            language = lang.name(),
            changed = result.changed,
            "transformed file"
        );
        result
    }
}

/// Parses `content` and applies the collected replacements.
fn transform_syntax(
    parsers: &mut ParserCache,
    lang: &dyn Language,
    rules: &[TransformRule],
    path: &Path,
    content: &[u8],
) -> Transformed {
    let tree = match parsers.parse(lang, content) {
        Ok(tree) => tree,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "parse failed, copying verbatim");
            return Transformed::unchanged(content);
        }
    };

    let replacements = collect(&tree.root_node(), content, lang, rules, false);
    apply_replacements(content, replacements)
}
