//! Tree-aware match collection.

use super::splice::Replacement;
use crate::lang::Language;
use crate::rules::TransformRule;
use std::ops::Range;

/// A node of a concrete syntax tree, as consumed by the collector.
pub trait SyntaxNode: Sized {
    /// Grammar-specific node type name.
    fn kind(&self) -> &str;

    /// Half-open byte range of the node in the parsed source.
    fn byte_range(&self) -> Range<usize>;

    /// Child nodes, in source order.
    fn children(&self) -> Vec<Self>;
}

impl SyntaxNode for tree_sitter::Node<'_> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn byte_range(&self) -> Range<usize> {
        self.start_byte()..self.end_byte()
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        tree_sitter::Node::children(self, &mut cursor).collect()
    }
}

/// Collects the replacements for a tree, outermost match first.
///
/// Nodes are visited in pre-order. A node is evaluated only when no ancestor
/// was replaced; the first rule (in declaration order) that matches and
/// changes the node's text claims the node's whole range. The returned
/// ranges are therefore pairwise disjoint.
///
/// Rules only see nodes whose text is valid UTF-8. A node holding stray
/// non-UTF-8 bytes is passed over, but its children are still visited.
pub fn collect<N: SyntaxNode>(
    root: &N,
    source: &[u8],
    lang: &dyn Language,
    rules: &[TransformRule],
    ancestor_matched: bool,
) -> Vec<Replacement> {
    let mut replacements = Vec::new();
    let mut pending: Vec<(N, bool)> = Vec::new();
    let matched = !ancestor_matched && evaluate(root, source, lang, rules, &mut replacements);
    push_children(&mut pending, root, ancestor_matched || matched);

    while let Some((node, claimed)) = pending.pop() {
        let matched = !claimed && evaluate(&node, source, lang, rules, &mut replacements);
        push_children(&mut pending, &node, claimed || matched);
    }

    replacements
}

/// Pushes children in reverse so they pop in source order.
fn push_children<N: SyntaxNode>(pending: &mut Vec<(N, bool)>, node: &N, claimed: bool) {
    pending.extend(node.children().into_iter().rev().map(|child| (child, claimed)));
}

/// Evaluates the rules against one node, recording at most one replacement.
fn evaluate<N: SyntaxNode>(
    node: &N,
    source: &[u8],
    lang: &dyn Language,
    rules: &[TransformRule],
    replacements: &mut Vec<Replacement>,
) -> bool {
    let kind = node.kind();
    let mut eligible = rules
        .iter()
        .filter(|rule| lang.matches_any(kind, rule.node_categories()))
        .peekable();
    if eligible.peek().is_none() {
        return false;
    }

    let range = node.byte_range();
    let Some(Ok(original)) = source.get(range.clone()).map(std::str::from_utf8) else {
        return false;
    };

    for rule in eligible {
        if let Some(rewritten) = rule.apply_to(original) {
            replacements.push(Replacement::new(range, original, rewritten));
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{NodeCategory, NodeTypes, ParserCache, Python};

    /// In-memory tree for exercising the collector without a grammar.
    #[derive(Debug, Clone)]
    struct TestNode {
        kind: &'static str,
        range: Range<usize>,
        children: Vec<TestNode>,
    }

    impl SyntaxNode for TestNode {
        fn kind(&self) -> &str {
            self.kind
        }

        fn byte_range(&self) -> Range<usize> {
            self.range.clone()
        }

        fn children(&self) -> Vec<Self> {
            self.children.clone()
        }
    }

    fn node(kind: &'static str, range: Range<usize>, children: Vec<TestNode>) -> TestNode {
        TestNode { kind, range, children }
    }

    struct TestLang;

    const TEST_TYPES: NodeTypes = NodeTypes {
        string: &["str", "str_content"],
        identifier: &["ident"],
        namespace: &["ns"],
        class: &["class"],
        comment: &["comment"],
    };

    impl Language for TestLang {
        fn name(&self) -> &'static str {
            "test"
        }

        fn extensions(&self) -> &[&'static str] {
            &["test"]
        }

        fn grammar(&self) -> Option<tree_sitter::Language> {
            None
        }

        fn node_types(&self) -> &NodeTypes {
            &TEST_TYPES
        }
    }

    const SRC: &str = "class Acme { s = \"Acme app\" } // Acme";

    fn tree() -> TestNode {
        node(
            "root",
            0..37,
            vec![
                node(
                    "class",
                    0..29,
                    vec![
                        node("ident", 6..10, vec![]),
                        node(
                            "str",
                            17..27,
                            vec![node("str_content", 18..26, vec![])],
                        ),
                    ],
                ),
                node("comment", 30..37, vec![]),
            ],
        )
    }

    fn assert_disjoint(replacements: &[Replacement]) {
        let mut ranges: Vec<_> = replacements.iter().map(|r| r.range()).collect();
        ranges.sort_by_key(|r| r.start);
        for pair in ranges.windows(2) {
            assert!(pair[0].end <= pair[1].start, "overlap: {:?}", pair);
        }
    }

    #[test]
    fn test_string_rule_claims_outer_string() {
        let rules = vec![TransformRule::new("Acme", "{{ c }}")];
        let replacements = collect(&tree(), SRC.as_bytes(), &TestLang, &rules, false);

        assert_eq!(replacements.len(), 1);
        assert_eq!(replacements[0].range(), 17..27);
        assert_eq!(replacements[0].original(), "\"Acme app\"");
        assert_eq!(replacements[0].replacement(), "\"{{ c }} app\"");
    }

    #[test]
    fn test_outermost_match_wins() {
        let rules = vec![
            TransformRule::new("Acme", "{{ c }}").categories([NodeCategory::Class]),
            TransformRule::new("Acme", "{{ c }}")
                .categories([NodeCategory::String, NodeCategory::Identifier]),
        ];
        let replacements = collect(&tree(), SRC.as_bytes(), &TestLang, &rules, false);

        // The class claims its range, so the identifier and string inside are skipped.
        assert_eq!(replacements.len(), 1);
        assert_eq!(replacements[0].range(), 0..29);
        assert_eq!(
            replacements[0].replacement(),
            "class {{ c }} { s = \"{{ c }} app\" }"
        );
    }

    #[test]
    fn test_first_rule_wins_per_node() {
        let rules = vec![
            TransformRule::new("Acme", "{{ first }}"),
            TransformRule::new("app", "{{ second }}"),
        ];
        let replacements = collect(&tree(), SRC.as_bytes(), &TestLang, &rules, false);

        assert_eq!(replacements.len(), 1);
        assert_eq!(replacements[0].replacement(), "\"{{ first }} app\"");
    }

    #[test]
    fn test_identity_rule_falls_through_to_next_rule() {
        let rules = vec![
            TransformRule::new("Acme", "Acme"),
            TransformRule::new("app", "{{ second }}"),
        ];
        let replacements = collect(&tree(), SRC.as_bytes(), &TestLang, &rules, false);

        assert_eq!(replacements.len(), 1);
        assert_eq!(replacements[0].range(), 17..27);
        assert_eq!(replacements[0].replacement(), "\"Acme {{ second }}\"");
    }

    #[test]
    fn test_inner_node_matches_when_outer_does_not() {
        // Only the inner content classifies as a match target for this rule.
        let rules = vec![TransformRule::new("Acme app", "{{ c }}").exact()];
        let replacements = collect(&tree(), SRC.as_bytes(), &TestLang, &rules, false);

        assert_eq!(replacements.len(), 1);
        assert_eq!(replacements[0].range(), 18..26);
        assert_eq!(replacements[0].replacement(), "{{ c }}");
    }

    #[test]
    fn test_any_category_and_multiple_disjoint_matches() {
        let rules = vec![
            TransformRule::new("Acme", "{{ c }}")
                .categories([NodeCategory::Identifier, NodeCategory::Comment]),
            TransformRule::new("Acme", "{{ c }}").categories([NodeCategory::Any]),
        ];
        let replacements = collect(&tree(), SRC.as_bytes(), &TestLang, &rules, false);

        let ranges: Vec<_> = replacements.iter().map(|r| r.range()).collect();
        // Pre-order: class (via `any`) claims its subtree, then the comment.
        assert_eq!(ranges, vec![0..29, 30..37]);
        assert_disjoint(&replacements);
    }

    #[test]
    fn test_ancestor_matched_suppresses_everything() {
        let rules = vec![TransformRule::new("Acme", "{{ c }}").categories([NodeCategory::Any])];
        assert!(collect(&tree(), SRC.as_bytes(), &TestLang, &rules, true).is_empty());
    }

    #[test]
    fn test_unclassified_nodes_are_untouchable() {
        let rules = vec![TransformRule::new("Acme", "{{ c }}").categories([NodeCategory::Namespace])];
        assert!(collect(&tree(), SRC.as_bytes(), &TestLang, &rules, false).is_empty());
    }

    #[test]
    fn test_node_with_invalid_utf8_is_passed_over() {
        let source = b"[Acme \xff] Acme";
        let tree = node(
            "root",
            0..13,
            vec![
                node("str", 0..8, vec![node("str_content", 1..5, vec![])]),
                node("comment", 9..13, vec![]),
            ],
        );
        let rules = vec![
            TransformRule::new("Acme", "{{ c }}")
                .categories([NodeCategory::String, NodeCategory::Comment]),
        ];

        let replacements = collect(&tree, source, &TestLang, &rules, false);
        let ranges: Vec<_> = replacements.iter().map(|r| r.range()).collect();
        assert_eq!(ranges, vec![1..5, 9..13]);
    }

    #[test]
    fn test_no_overlap_on_nested_string_nodes() {
        let mut cache = ParserCache::new();
        let source = "NAME = \"acme\"\nOTHER = f\"acme {NAME} acme\"\n# acme\n";
        let tree = cache.parse(&Python, source.as_bytes()).unwrap();
        let rules = vec![
            TransformRule::new("acme", "{{ x }}")
                .categories([NodeCategory::String, NodeCategory::Comment]),
            TransformRule::new("NAME", "{{ y }}").categories([NodeCategory::Any]),
        ];

        let replacements = collect(&tree.root_node(), source.as_bytes(), &Python, &rules, false);
        assert!(!replacements.is_empty());
        assert_disjoint(&replacements);
    }
}
