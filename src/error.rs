//! Error types for template generation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for template generation.
///
/// Only the driver layer and the configuration loader produce these. Per-file
/// transformation problems never surface as errors; the file is copied
/// through unchanged instead.
#[derive(Error, Debug)]
pub enum StencilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Glob pattern error: {0}")]
    Glob(#[from] globset::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Tree-sitter parse error for {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Template spec not found at path: {0}")]
    SpecNotFound(PathBuf),
}

/// A specialized Result type for template generation.
pub type Result<T> = std::result::Result<T, StencilError>;
