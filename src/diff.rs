//! Diff rendering for dry runs.

use similar::{ChangeTag, TextDiff};
use std::fmt::{self, Write};
use std::path::Path;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Renders a unified diff between a source file and its templated form.
///
/// `path` is the source path; the `+++` side shows `target`, the name the
/// file gets in the template.
pub fn unified_diff(original: &str, modified: &str, path: &Path, target: &Path, color: bool) -> String {
    let diff = TextDiff::from_lines(original, modified);
    let mut output = String::new();
    let (header, reset) = if color { (CYAN, RESET) } else { ("", "") };

    writeln!(&mut output, "{header}--- a/{}{reset}", path.display()).unwrap();
    writeln!(&mut output, "{header}+++ b/{}{reset}", target.display()).unwrap();

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            output.push('\n');
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, tint) = match change.tag() {
                    ChangeTag::Delete => ("-", RED),
                    ChangeTag::Insert => ("+", GREEN),
                    ChangeTag::Equal => (" ", ""),
                };
                if color && !tint.is_empty() {
                    write!(&mut output, "{tint}{sign}{}{RESET}", change.value()).unwrap();
                } else {
                    write!(&mut output, "{sign}{}", change.value()).unwrap();
                }
                if change.missing_newline() {
                    output.push('\n');
                }
            }
        }
    }

    output
}

/// Line counts of a set of changes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiffSummary {
    pub files_changed: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl DiffSummary {
    /// Creates a summary from original and modified content.
    pub fn from_diff(original: &str, modified: &str) -> Self {
        let diff = TextDiff::from_lines(original, modified);
        let mut summary = Self::default();

        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => summary.insertions += 1,
                ChangeTag::Delete => summary.deletions += 1,
                ChangeTag::Equal => {}
            }
        }
        if summary.insertions > 0 || summary.deletions > 0 {
            summary.files_changed = 1;
        }
        summary
    }

    /// Combines two summaries.
    pub fn merge(&mut self, other: &DiffSummary) {
        self.files_changed += other.files_changed;
        self.insertions += other.insertions;
        self.deletions += other.deletions;
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s) changed, {} insertions(+), {} deletions(-)",
            self.files_changed, self.insertions, self.deletions
        )
    }
}
