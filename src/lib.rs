//! # Stencil
//!
//! Turns a working source tree into a [Copier](https://copier.readthedocs.io)
//! template by replacing concrete names with placeholder expressions.
//!
//! Replacement is syntax-aware: each rule targets semantic node categories
//! (strings, identifiers, namespaces, classes, comments) and is evaluated
//! against tree-sitter nodes, so a rule meant for string literals never
//! rewrites an import or a keyword. Once a node is replaced its subtree is
//! off limits, which keeps substitutions from overlapping.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stencil::prelude::*;
//!
//! let spec = TemplateSpec::load("./my-project/.stencil.yml")?;
//! let report = Generator::new("./my-project", "./template-output", spec).run()?;
//!
//! println!("{} of {} files templated", report.files_transformed, report.files_processed);
//! # Ok::<(), stencil::error::StencilError>(())
//! ```
//!
//! ## Transforming a Single File
//!
//! ```rust
//! use std::path::Path;
//! use stencil::prelude::*;
//!
//! let rules = vec![TransformRule::new("acme", "{{ project_name }}")];
//! let mut transformer = Transformer::new(rules);
//!
//! let result = transformer.transform_file(
//!     Path::new("setup.py"),
//!     b"import acme\nNAME = \"acme\"\n",
//! );
//!
//! assert!(result.changed);
//! assert_eq!(result.content, b"import acme\nNAME = \"{{ project_name }}\"\n");
//! ```
//!
//! ## Supported Languages
//!
//! Python, Java, C#, TypeScript/TSX, JavaScript, Go, Rust, Ruby, YAML, TOML,
//! JSON, XML, Markdown and INI are parsed. Plain-text files (`LICENSE`,
//! `.sln`, ...) are substituted as whole buffers. Anything else is copied
//! verbatim.

pub mod config;
pub mod copier;
pub mod diff;
pub mod error;
pub mod generate;
pub mod inspect;
pub mod lang;
pub mod rules;
pub mod transform;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{TemplateSpec, TransformConfig, ValidationReport, VariableConfig};
    pub use crate::copier::{copier_config, write_copier_config};
    pub use crate::diff::DiffSummary;
    pub use crate::error::{Result, StencilError};
    pub use crate::generate::{FileChange, GenerateReport, Generator, PathPatterns};
    pub use crate::lang::{Language, LanguageRegistry, NodeCategory, NodeTypes, ParserCache};
    pub use crate::rules::{MatchMode, TransformRule};
    pub use crate::transform::{Replacement, SyntaxNode, Transformed, Transformer};
}

pub use prelude::*;
