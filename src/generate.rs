//! Template generation over a source tree.

use crate::config::TemplateSpec;
use crate::copier::{self, TEMPLATE_SUBDIR};
use crate::diff::{DiffSummary, unified_diff};
use crate::error::{Result, StencilError};
use crate::transform::Transformer;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Suffix appended to files that received placeholders.
pub const TEMPLATE_SUFFIX: &str = ".jinja";

/// Path patterns matched against paths relative to the source root.
///
/// A pattern matches a path when it equals the path, when it ends in `/` or
/// `/**` and the path is that directory or lies beneath it, or when it
/// glob-matches the path or its file name.
#[derive(Debug, Clone)]
pub struct PathPatterns {
    patterns: Vec<String>,
    globs: GlobSet,
}

impl PathPatterns {
    /// Compiles the patterns.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(GlobBuilder::new(pattern.as_ref()).literal_separator(true).build()?);
        }
        Ok(Self {
            patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
            globs: builder.build()?,
        })
    }

    /// Returns true if a relative path should be left out of the template.
    pub fn excludes(&self, rel_path: &Path) -> bool {
        let path = slash_path(rel_path);
        for pattern in &self.patterns {
            if path == *pattern {
                return true;
            }
            if pattern.ends_with('/') || pattern.ends_with("/**") {
                let prefix = pattern.trim_end_matches("/**").trim_end_matches('/');
                if path == prefix || path.starts_with(&format!("{prefix}/")) {
                    return true;
                }
            }
        }
        self.matches_glob(rel_path)
    }

    /// Returns true if the path or its file name matches one of the globs.
    pub fn matches_glob(&self, rel_path: &Path) -> bool {
        if self.globs.is_match(slash_path(rel_path)) {
            return true;
        }
        rel_path
            .file_name()
            .is_some_and(|name| self.globs.is_match(Path::new(name)))
    }
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// A file whose templated form differs from the source, kept for dry runs.
#[derive(Debug, Clone)]
pub struct FileChange {
    /// Path relative to the source root.
    pub path: PathBuf,
    /// Path relative to the template directory.
    pub target: PathBuf,
    pub original: String,
    pub transformed: String,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub files_processed: usize,
    pub files_transformed: usize,
    pub warnings: Vec<String>,
    pub output_dir: PathBuf,
    pub copier_file: Option<PathBuf>,
    /// Transformed files, collected only in dry-run mode.
    pub changes: Vec<FileChange>,
    pub summary: DiffSummary,
}

impl GenerateReport {
    /// Renders diffs of every collected change.
    pub fn diff(&self, color: bool) -> String {
        self.changes
            .iter()
            .map(|c| unified_diff(&c.original, &c.transformed, &c.path, &c.target, color))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Appends `key=value` lines for CI consumers to `path`.
    pub fn write_github_output(&self, path: &Path) -> Result<()> {
        let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "files-processed={}", self.files_processed)?;
        writeln!(file, "files-transformed={}", self.files_transformed)?;
        writeln!(file, "template-path={}", self.output_dir.display())?;
        Ok(())
    }
}

/// Builds a template from a source tree.
pub struct Generator {
    source: PathBuf,
    output: PathBuf,
    spec: TemplateSpec,
    dry_run: bool,
}

impl Generator {
    /// Creates a generator reading `source` and writing into `output`.
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>, spec: TemplateSpec) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            spec,
            dry_run: false,
        }
    }

    /// Enables dry-run mode (collect changes without writing anything).
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Runs the generation.
    ///
    /// Per-file problems (unreadable, unrecognized or unparseable files) never
    /// abort the run. Failures to write the output do.
    pub fn run(&self) -> Result<GenerateReport> {
        let source = std::path::absolute(&self.source)?;
        let output = std::path::absolute(&self.output)?;
        if source.starts_with(&output) {
            return Err(StencilError::InvalidConfig(format!(
                "output directory {} would contain the source tree",
                output.display()
            )));
        }

        let excludes = PathPatterns::new(&self.spec.excludes()[..])?;
        let no_transform = PathPatterns::new(&self.spec.no_transform[..])?;
        let mut transformer = Transformer::new(self.spec.compile_rules()?);

        info!(source = %source.display(), output = %output.display(), "generating template");

        let template_dir = output.join(TEMPLATE_SUBDIR);
        if !self.dry_run {
            if output.exists() {
                fs::remove_dir_all(&output)?;
            }
            fs::create_dir_all(&template_dir)?;
        }

        let mut report = GenerateReport {
            output_dir: output.clone(),
            ..Default::default()
        };

        let walker = WalkDir::new(&source)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let path = entry.path();
                if entry.depth() == 0 {
                    return true;
                }
                if path.starts_with(&output) {
                    return false;
                }
                let rel = path.strip_prefix(&source).unwrap_or(path);
                !excludes.excludes(rel)
            });

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            let path = entry.path();
            let rel = path.strip_prefix(&source).unwrap_or(path).to_path_buf();
            report.files_processed += 1;

            let content = match fs::read(path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %rel.display(), error = %e, "could not read file");
                    report.warnings.push(format!("Could not read {}: {e}", rel.display()));
                    continue;
                }
            };

            if no_transform.matches_glob(&rel) {
                debug!(path = %rel.display(), "copying without transformation");
                self.write(&template_dir.join(&rel), &content)?;
                continue;
            }

            let result = transformer.transform_file(&rel, &content);
            if !result.changed {
                self.write(&template_dir.join(&rel), &content)?;
                continue;
            }

            report.files_transformed += 1;
            let mut target = rel.clone().into_os_string();
            target.push(TEMPLATE_SUFFIX);
            let target = PathBuf::from(target);

            if self.dry_run {
                // Lossy only for display; the template itself keeps the original bytes.
                let original = String::from_utf8_lossy(&content).into_owned();
                let transformed = String::from_utf8_lossy(&result.content).into_owned();
                report.summary.merge(&DiffSummary::from_diff(&original, &transformed));
                report.changes.push(FileChange {
                    path: rel,
                    target,
                    original,
                    transformed,
                });
            } else {
                self.write(&template_dir.join(&target), &result.content)?;
            }
        }

        if !self.dry_run {
            report.copier_file = Some(copier::write_copier_config(&self.spec, &output)?);
        }

        info!(
            processed = report.files_processed,
            transformed = report.files_transformed,
            "template generation finished"
        );
        Ok(report)
    }

    fn write(&self, dest: &Path, content: &[u8]) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(dest, content)?;
        Ok(())
    }
}
