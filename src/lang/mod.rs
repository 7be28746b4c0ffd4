//! Language profiles: file selection, grammars and semantic node categories.

mod cache;
mod csharp;
mod go;
mod ini;
mod java;
mod javascript;
mod json;
mod markdown;
mod plaintext;
mod python;
mod ruby;
mod rust;
mod toml;
mod typescript;
mod xml;
mod yaml;

pub use cache::ParserCache;
pub use csharp::CSharp;
pub use go::Go;
pub use ini::Ini;
pub use java::Java;
pub use javascript::JavaScript;
pub use json::Json;
pub use markdown::Markdown;
pub use plaintext::PlainText;
pub use python::Python;
pub use ruby::Ruby;
pub use rust::Rust;
pub use toml::Toml;
pub use typescript::{Tsx, TypeScript};
pub use xml::Xml;
pub use yaml::Yaml;

use crate::error::{Result, StencilError};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tree_sitter::{Language as TsLanguage, Parser};

/// Language-agnostic classification of a grammar node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    String,
    Identifier,
    Namespace,
    Class,
    Comment,
    /// Matches every concrete category. Never produced by classification.
    Any,
}

impl NodeCategory {
    /// The concrete categories, in classification order.
    pub const CONCRETE: [NodeCategory; 5] = [
        NodeCategory::String,
        NodeCategory::Identifier,
        NodeCategory::Namespace,
        NodeCategory::Class,
        NodeCategory::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::String => "string",
            NodeCategory::Identifier => "identifier",
            NodeCategory::Namespace => "namespace",
            NodeCategory::Class => "class",
            NodeCategory::Comment => "comment",
            NodeCategory::Any => "any",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeCategory {
    type Err = StencilError;

    /// Parses a category name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        let all = NodeCategory::CONCRETE
            .iter()
            .chain(std::iter::once(&NodeCategory::Any));
        for category in all {
            if category.as_str().eq_ignore_ascii_case(s.trim()) {
                return Ok(*category);
            }
        }
        Err(StencilError::InvalidConfig(format!(
            "unknown node category '{s}' (expected one of string, identifier, namespace, class, comment, any)"
        )))
    }
}

/// Grammar node-type names for each semantic category of one language.
#[derive(Debug, Clone, Copy)]
pub struct NodeTypes {
    pub string: &'static [&'static str],
    pub identifier: &'static [&'static str],
    pub namespace: &'static [&'static str],
    pub class: &'static [&'static str],
    pub comment: &'static [&'static str],
}

impl NodeTypes {
    /// A table that classifies nothing.
    pub const EMPTY: NodeTypes = NodeTypes {
        string: &[],
        identifier: &[],
        namespace: &[],
        class: &[],
        comment: &[],
    };

    /// Returns the node types declared for a category. `Any` has none of its own.
    pub fn get(&self, category: NodeCategory) -> &'static [&'static str] {
        match category {
            NodeCategory::String => self.string,
            NodeCategory::Identifier => self.identifier,
            NodeCategory::Namespace => self.namespace,
            NodeCategory::Class => self.class,
            NodeCategory::Comment => self.comment,
            NodeCategory::Any => &[],
        }
    }

    /// Classifies a node type. The first category (in [`NodeCategory::CONCRETE`]
    /// order) that lists the type wins.
    pub fn classify(&self, kind: &str) -> Option<NodeCategory> {
        NodeCategory::CONCRETE
            .into_iter()
            .find(|category| self.get(*category).contains(&kind))
    }
}

/// A language profile supported by the template generator.
pub trait Language: Send + Sync {
    /// Returns the name of the language.
    fn name(&self) -> &'static str;

    /// Returns the file extensions (lowercase, without dot) that select this language.
    fn extensions(&self) -> &[&'static str];

    /// Returns exact file names that select this language.
    fn filenames(&self) -> &[&'static str] {
        &[]
    }

    /// Returns the tree-sitter grammar, or `None` for plaintext handling.
    fn grammar(&self) -> Option<TsLanguage>;

    /// Returns the node-type table used to classify syntax nodes.
    fn node_types(&self) -> &NodeTypes;

    /// Classifies a grammar node type into a semantic category.
    fn classify(&self, kind: &str) -> Option<NodeCategory> {
        self.node_types().classify(kind)
    }

    /// Returns true if the node type classifies into one of `wanted`, or
    /// `wanted` contains [`NodeCategory::Any`] and the node type classifies at all.
    fn matches_any(&self, kind: &str, wanted: &[NodeCategory]) -> bool {
        let Some(category) = self.classify(kind) else {
            return false;
        };
        wanted
            .iter()
            .any(|w| *w == NodeCategory::Any || *w == category)
    }

    /// Creates a parser configured for this language's grammar.
    fn parser(&self) -> Result<Parser> {
        let grammar = self
            .grammar()
            .ok_or_else(|| StencilError::UnsupportedLanguage(self.name().to_string()))?;
        let mut parser = Parser::new();
        parser
            .set_language(&grammar)
            .map_err(|e| StencilError::Parse {
                path: Path::new("<source>").to_path_buf(),
                message: format!("Failed to set language {}: {e}", self.name()),
            })?;
        Ok(parser)
    }

    /// Checks if this language handles the given file extension.
    fn matches_extension(&self, ext: &str) -> bool {
        self.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Checks if this language handles the given exact file name.
    fn matches_filename(&self, name: &str) -> bool {
        self.filenames().contains(&name)
    }
}

/// Registry of supported language profiles.
#[derive(Default)]
pub struct LanguageRegistry {
    languages: Vec<Box<dyn Language>>,
}

impl LanguageRegistry {
    /// Creates a new registry with all built-in languages.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(Box::new(Python));
        registry.register(Box::new(Java));
        registry.register(Box::new(CSharp));
        registry.register(Box::new(TypeScript));
        registry.register(Box::new(Tsx));
        registry.register(Box::new(JavaScript));
        registry.register(Box::new(Go));
        registry.register(Box::new(Rust));
        registry.register(Box::new(Ruby));
        registry.register(Box::new(Yaml));
        registry.register(Box::new(Toml));
        registry.register(Box::new(Json));
        registry.register(Box::new(Xml));
        registry.register(Box::new(Markdown));
        registry.register(Box::new(Ini));
        registry.register(Box::new(PlainText));
        registry
    }

    /// Registers a new language.
    pub fn register(&mut self, lang: Box<dyn Language>) {
        self.languages.push(lang);
    }

    /// Finds a language by file extension.
    pub fn by_extension(&self, ext: &str) -> Option<&dyn Language> {
        self.languages
            .iter()
            .find(|l| l.matches_extension(ext))
            .map(|l| l.as_ref())
    }

    /// Finds a language by exact file name.
    pub fn by_filename(&self, name: &str) -> Option<&dyn Language> {
        self.languages
            .iter()
            .find(|l| l.matches_filename(name))
            .map(|l| l.as_ref())
    }

    /// Finds a language by name.
    pub fn by_name(&self, name: &str) -> Option<&dyn Language> {
        self.languages
            .iter()
            .find(|l| l.name().eq_ignore_ascii_case(name))
            .map(|l| l.as_ref())
    }

    /// Resolves the language for a file path: exact file name first, then
    /// lowercase extension.
    pub fn resolve(&self, path: &Path) -> Option<&dyn Language> {
        let by_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| self.by_filename(name));
        if by_name.is_some() {
            return by_name;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.by_extension(&ext.to_lowercase()))
    }

    /// Returns all registered languages.
    pub fn all(&self) -> &[Box<dyn Language>] {
        &self.languages
    }
}
