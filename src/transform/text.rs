//! Whole-buffer substitution for files without a grammar.

use super::Transformed;
use crate::rules::TransformRule;

/// Applies every rule as a global substring replacement over the buffer.
///
/// Rules run in order, each on the previous rule's output. Exact-mode rules
/// degrade to substring replacement since there is no node to compare.
/// Bytes that are not valid UTF-8 are kept as they are and never match.
pub fn apply_plaintext(source: &[u8], rules: &[TransformRule]) -> Transformed {
    let mut content = source.to_vec();
    let mut changed = false;
    for rule in rules {
        if let Some(next) = replace_in_utf8_runs(&content, rule) {
            content = next;
            changed = true;
        }
    }

    Transformed { content, changed }
}

/// Runs `rule` over each valid UTF-8 run of `buffer`. Returns `None` when
/// nothing changed.
fn replace_in_utf8_runs(buffer: &[u8], rule: &TransformRule) -> Option<Vec<u8>> {
    let mut output = Vec::with_capacity(buffer.len());
    let mut changed = false;
    for chunk in buffer.utf8_chunks() {
        let replaced = rule.replace_all(chunk.valid());
        changed |= replaced != chunk.valid();
        output.extend_from_slice(replaced.as_bytes());
        output.extend_from_slice(chunk.invalid());
    }
    changed.then_some(output)
}
