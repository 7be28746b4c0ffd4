//! Companion `copier.yaml` generation.

use crate::config::TemplateSpec;
use crate::error::Result;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Name of the generated Copier configuration file.
pub const COPIER_FILE: &str = "copier.yaml";

/// Subdirectory of the output that holds the template files.
pub const TEMPLATE_SUBDIR: &str = "template";

const MIN_COPIER_VERSION: &str = "9.0.0";
const JINJA_EXTENSIONS: &[&str] = &["jinja2_time.TimeExtension"];

/// Builds the Copier configuration for a spec.
///
/// Variables keep their declaration order. Conditional paths become
/// `_exclude` entries that drop the path unless the condition holds.
pub fn copier_config(spec: &TemplateSpec) -> Mapping {
    let mut config = Mapping::new();
    config.insert("_min_copier_version".into(), MIN_COPIER_VERSION.into());
    config.insert("_subdirectory".into(), TEMPLATE_SUBDIR.into());
    config.insert(
        "_jinja_extensions".into(),
        Value::Sequence(JINJA_EXTENSIONS.iter().map(|e| Value::from(*e)).collect()),
    );

    for (name, variable) in &spec.variables {
        let mut question = Mapping::new();
        question.insert("type".into(), variable.var_type.as_str().into());
        question.insert("help".into(), variable.description.as_str().into());
        question.insert(
            "default".into(),
            variable.default.clone().unwrap_or(Value::Null),
        );
        if !variable.choices.is_empty() {
            question.insert(
                "choices".into(),
                Value::Sequence(variable.choices.iter().map(|c| Value::from(c.as_str())).collect()),
            );
        }
        config.insert(name.as_str().into(), Value::Mapping(question));
    }

    if !spec.conditional_paths.is_empty() {
        let excludes = spec
            .conditional_paths
            .iter()
            .map(|(path, condition)| {
                Value::from(format!("{{% if not {condition} %}}{path}{{% endif %}}"))
            })
            .collect();
        config.insert("_exclude".into(), Value::Sequence(excludes));
    }

    config
}

/// Writes `copier.yaml` into `output_dir` and returns its path.
pub fn write_copier_config(spec: &TemplateSpec, output_dir: &Path) -> Result<PathBuf> {
    let content = serde_yaml::to_string(&copier_config(spec))?;
    let path = output_dir.join(COPIER_FILE);
    std::fs::write(&path, content)?;
    Ok(path)
}
