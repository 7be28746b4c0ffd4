//! Template description file (`.stencil.yml`).

use crate::error::{Result, StencilError};
use crate::lang::NodeCategory;
use crate::rules::{self, TransformRule};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the source root when no spec path is given.
pub const DEFAULT_SPEC_FILE: &str = ".stencil.yml";

/// Describes how a source tree becomes a template.
///
/// # Example YAML
///
/// ```yaml
/// name: python-package
/// variables:
///   project_name:
///     type: str
///     description: Name of the package
///     default: mypackage
///     transforms:
///       - match: mypackage
///         node_types: [string, identifier]
///       - match: MyPackage
///         filter: title
///         case_sensitive: false
/// conditional_paths:
///   docs/: include_docs
/// exclude:
///   - "*.log"
/// no_transform:
///   - "*.png"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSpec {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Template variables, in declaration order.
    #[serde(default)]
    pub variables: IndexMap<String, VariableConfig>,

    /// Path pattern to the condition under which it is kept.
    #[serde(default)]
    pub conditional_paths: IndexMap<String, String>,

    /// Extra exclusion patterns, added to [`default_excludes`].
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Patterns of files copied without transformation.
    #[serde(default)]
    pub no_transform: Vec<String>,
}

fn default_name() -> String {
    "template".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

/// A template variable and the transforms that introduce it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariableConfig {
    #[serde(rename = "type", default = "default_variable_type")]
    pub var_type: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub default: Option<serde_yaml::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,

    #[serde(default)]
    pub transforms: Vec<TransformConfig>,
}

fn default_variable_type() -> String {
    "str".to_string()
}

/// One match/replace declaration for a variable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformConfig {
    #[serde(rename = "match")]
    pub pattern: String,

    /// Semantic categories, matched case-insensitively. Empty means strings only.
    #[serde(default)]
    pub node_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    #[serde(default)]
    pub exact_match: bool,
}

impl TemplateSpec {
    /// Loads a spec from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(StencilError::SpecNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses a spec from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Checks the spec and returns non-fatal warnings.
    ///
    /// Unknown node categories are an error; empty match literals and
    /// variables without transforms are warnings.
    pub fn validate(&self) -> Result<Vec<String>> {
        let mut warnings = Vec::new();

        for (name, variable) in &self.variables {
            if variable.transforms.is_empty() {
                warnings.push(format!("variable '{name}' has no transforms"));
            }
            for (index, transform) in variable.transforms.iter().enumerate() {
                if transform.pattern.is_empty() {
                    warnings.push(format!(
                        "variable '{name}' transform #{} has an empty match and never applies",
                        index + 1
                    ));
                }
                for node_type in &transform.node_types {
                    if node_type.trim().is_empty() {
                        continue;
                    }
                    node_type.parse::<NodeCategory>().map_err(|e| {
                        StencilError::InvalidConfig(format!(
                            "variable '{name}' transform #{}: {e}",
                            index + 1
                        ))
                    })?;
                }
            }
        }

        Ok(warnings)
    }

    /// Validates the spec and compiles its rules.
    pub fn check(&self) -> Result<ValidationReport> {
        let warnings = self.validate()?;
        Ok(ValidationReport {
            name: self.name.clone(),
            version: self.version.clone(),
            variables: self.variables.keys().cloned().collect(),
            warnings,
            rules: self.compile_rules()?,
        })
    }

    /// Compiles the variable transforms into executable rules.
    pub fn compile_rules(&self) -> Result<Vec<TransformRule>> {
        rules::compile(&self.variables)
    }

    /// Returns the built-in exclusions followed by the spec's own.
    pub fn excludes(&self) -> Vec<String> {
        let mut patterns = default_excludes();
        patterns.extend(self.exclude.iter().cloned());
        patterns
    }
}

/// Outcome of validating and compiling a spec.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub name: String,
    pub version: String,
    pub variables: Vec<String>,
    pub warnings: Vec<String>,
    /// Compiled rules, in evaluation order.
    pub rules: Vec<TransformRule>,
}

impl ValidationReport {
    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Paths never copied into a template.
pub fn default_excludes() -> Vec<String> {
    [
        ".git",
        ".git/**",
        "__pycache__",
        "__pycache__/**",
        "*.pyc",
        ".stencil.yml",
        ".stencil.yaml",
        ".template-spec.yaml",
        "node_modules",
        "node_modules/**",
        "bin",
        "obj",
        ".vs",
        ".vs/**",
        ".idea",
        ".idea/**",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
