//! Transform rules: compilation from variable declarations and match semantics.

use crate::config::VariableConfig;
use crate::error::Result;
use crate::lang::NodeCategory;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

/// How a rule's literal is compared against node text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The literal may occur anywhere; every occurrence is replaced.
    #[default]
    Substring,
    /// The whole text must equal the literal; the whole text is replaced.
    Exact,
}

/// A compiled match/replace directive bound to semantic categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformRule {
    pattern: String,
    replacement: String,
    categories: Vec<NodeCategory>,
    case_sensitive: bool,
    mode: MatchMode,
}

impl TransformRule {
    /// Creates a case-sensitive substring rule applying to string nodes.
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            categories: vec![NodeCategory::String],
            case_sensitive: true,
            mode: MatchMode::Substring,
        }
    }

    /// Sets the categories this rule applies to.
    pub fn categories(mut self, categories: impl IntoIterator<Item = NodeCategory>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Sets whether matching is case sensitive.
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    /// Requires the whole node text to equal the literal.
    pub fn exact(mut self) -> Self {
        self.mode = MatchMode::Exact;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn node_categories(&self) -> &[NodeCategory] {
        &self.categories
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Tests the match predicate against a node's text.
    ///
    /// An empty literal never matches.
    pub fn matches(&self, text: &str) -> bool {
        if self.pattern.is_empty() {
            return false;
        }
        match (self.mode, self.case_sensitive) {
            (MatchMode::Exact, true) => text == self.pattern,
            (MatchMode::Exact, false) => eq_ignore_case(text, &self.pattern),
            (MatchMode::Substring, true) => text.contains(&self.pattern),
            (MatchMode::Substring, false) => find_ignore_case(text, &self.pattern).is_some(),
        }
    }

    /// Computes the replacement text for a matching node.
    pub fn rewrite(&self, text: &str) -> String {
        match self.mode {
            MatchMode::Exact => self.replacement.clone(),
            MatchMode::Substring => self.replace_all(text),
        }
    }

    /// Returns the new text for `text` if the rule matches and changes it.
    pub fn apply_to(&self, text: &str) -> Option<String> {
        if !self.matches(text) {
            return None;
        }
        let rewritten = self.rewrite(text);
        (rewritten != text).then_some(rewritten)
    }

    /// Replaces every occurrence of the literal, ignoring the match mode.
    pub fn replace_all(&self, text: &str) -> String {
        if self.pattern.is_empty() {
            return text.to_string();
        }
        if self.case_sensitive {
            text.replace(&self.pattern, &self.replacement)
        } else {
            replace_all_ignore_case(text, &self.pattern, &self.replacement)
        }
    }

    /// Returns a description of the rule.
    pub fn describe(&self) -> String {
        let categories: Vec<&str> = self.categories.iter().map(|c| c.as_str()).collect();
        format!(
            "{} '{}' -> '{}' in [{}]{}",
            match self.mode {
                MatchMode::Exact => "exact",
                MatchMode::Substring => "substring",
            },
            self.pattern,
            self.replacement,
            categories.join(", "),
            if self.case_sensitive { "" } else { " (ignore case)" }
        )
    }
}

/// Builds the templating expression for a variable, optionally piped through a filter.
pub fn replacement_expression(variable: &str, filter: Option<&str>) -> String {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(filter) => format!("{{{{ {variable} | {filter} }}}}"),
        None => format!("{{{{ {variable} }}}}"),
    }
}

/// Expands variable transform declarations into a flat, ordered rule list.
///
/// Variables and their transforms keep their declaration order. Transforms
/// without node types default to string nodes.
pub fn compile(variables: &IndexMap<String, VariableConfig>) -> Result<Vec<TransformRule>> {
    let mut rules = Vec::new();

    for (name, variable) in variables {
        for transform in &variable.transforms {
            let mut categories = Vec::with_capacity(transform.node_types.len());
            for node_type in &transform.node_types {
                if node_type.trim().is_empty() {
                    continue;
                }
                categories.push(node_type.parse::<NodeCategory>()?);
            }
            if categories.is_empty() {
                categories.push(NodeCategory::String);
            }

            if transform.pattern.is_empty() {
                warn!(variable = %name, "transform has an empty match and will never apply");
            }

            let mut rule = TransformRule::new(
                transform.pattern.clone(),
                replacement_expression(name, transform.filter.as_deref()),
            )
            .categories(categories)
            .case_sensitive(transform.case_sensitive.unwrap_or(true));
            if transform.exact_match {
                rule = rule.exact();
            }
            rules.push(rule);
        }
    }

    Ok(rules)
}

/// Compares two characters ignoring case.
fn char_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Returns the byte length of the prefix of `haystack` that matches `needle`
/// ignoring case, consuming one haystack character per needle character.
fn prefix_len_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.chars();
    let mut consumed = 0;
    for n in needle.chars() {
        let h = hay.next()?;
        if !char_eq_ignore_case(h, n) {
            return None;
        }
        consumed += h.len_utf8();
    }
    Some(consumed)
}

fn eq_ignore_case(text: &str, needle: &str) -> bool {
    prefix_len_ignore_case(text, needle) == Some(text.len())
}

/// Finds the first case-insensitive occurrence of `needle`, as a byte range.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    haystack.char_indices().find_map(|(start, _)| {
        prefix_len_ignore_case(&haystack[start..], needle).map(|len| (start, start + len))
    })
}

/// Replaces every case-insensitive occurrence of `needle`, keeping all other
/// bytes of `haystack` as they were.
pub fn replace_all_ignore_case(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }

    let mut result = String::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some((start, end)) = find_ignore_case(rest, needle) {
        result.push_str(&rest[..start]);
        result.push_str(replacement);
        rest = &rest[end..];
    }
    result.push_str(rest);
    result
}
