//! Tree builder: turns the flat paragraph stream into a section tree.
//!
//! Construction keeps a cursor into an index arena instead of live
//! parent back-pointers. Each arena entry stores its parent index only
//! for the duration of the build; the finished tree is an
//! exclusive-ownership [`SectionNode`] hierarchy with no back-edges.

use std::collections::BTreeMap;

use crate::styles::{self, SECTION_TITLE, UNCLASSIFIED};
use crate::types::{NodeKind, ParagraphKind, ParagraphUnit, SectionNode, TableBlock};

/// Result of building the section tree for one document.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    /// Synthetic level-0 root; its children are the top-level sections.
    pub root: SectionNode,

    /// Concatenated judicial panel text, newline-separated.
    pub decision_body: String,

    /// Table attachments referenced from the tree by synthetic tag.
    pub attachments: BTreeMap<String, TableBlock>,
}

/// Arena entry used during construction.
struct ArenaNode {
    content: String,
    level: i32,
    kind: NodeKind,
    parent: usize,
    children: Vec<usize>,
}

/// Build the section tree from an ordered paragraph/table stream.
///
/// `tables` holds the raw content of embedded tables keyed by the
/// position-stable synthetic tag (`table-0`, `table-1`, ... in stream
/// order). Tables present in the stream but absent from `tables` still
/// produce a tree node; the renderer falls back to the literal tag for
/// them.
///
/// A document with no structural heading at all yields a root with no
/// children. That is a signal for the caller, not an error here.
#[must_use]
pub fn build(paragraphs: &[ParagraphUnit], tables: &BTreeMap<String, TableBlock>) -> BuildOutput {
    let mut arena = vec![ArenaNode {
        content: String::new(),
        level: 0,
        kind: NodeKind::Text,
        parent: 0,
        children: Vec::new(),
    }];
    let mut cursor = 0usize;

    let mut decision_body = String::new();
    let mut attachments = BTreeMap::new();
    let mut table_count = 0usize;

    // Tables interleave between headed paragraphs and carry no style of
    // their own; they take the level of the last paragraph style seen.
    let mut last_paragraph_level = UNCLASSIFIED;

    for unit in paragraphs {
        let (content, kind, level) = match unit.kind {
            ParagraphKind::Paragraph => {
                if unit.text.trim().is_empty() {
                    continue;
                }
                last_paragraph_level = styles::level_for_style(&unit.style);
                (unit.text.clone(), NodeKind::Text, last_paragraph_level)
            }
            ParagraphKind::Table => {
                let tag = format!("table-{table_count}");
                table_count += 1;
                if let Some(block) = tables.get(&tag) {
                    attachments.insert(tag.clone(), block.clone());
                } else {
                    tracing::warn!(tag = %tag, "Table marker without attached content");
                }
                (tag, NodeKind::Table, last_paragraph_level)
            }
        };

        if level > 0 {
            let at_untouched_root = cursor == 0 && arena[0].children.is_empty();
            if at_untouched_root && level > SECTION_TITLE {
                // Front-matter sub-heading before any top-level title.
                continue;
            }

            // Close deeper or equal siblings before attaching.
            if level < arena[cursor].level {
                while arena[cursor].level > level - 1 {
                    cursor = arena[cursor].parent;
                }
            } else if level == arena[cursor].level {
                cursor = arena[cursor].parent;
            }

            let index = arena.len();
            arena.push(ArenaNode {
                content,
                level,
                kind,
                parent: cursor,
                children: Vec::new(),
            });
            arena[cursor].children.push(index);
            cursor = index;
        } else if level < 0 {
            if !decision_body.is_empty() && !decision_body.ends_with('\n') {
                decision_body.push('\n');
            }
            decision_body.push_str(&content);
        }
        // level == 0: non-structural, not attached to the tree.
    }

    BuildOutput {
        root: freeze(&arena, 0),
        decision_body,
        attachments,
    }
}

/// Convert an arena subtree into the owned node representation.
fn freeze(arena: &[ArenaNode], index: usize) -> SectionNode {
    let entry = &arena[index];
    SectionNode {
        content: entry.content.clone(),
        level: entry.level,
        kind: entry.kind,
        section_name: None,
        elements: entry
            .children
            .iter()
            .map(|&child| freeze(arena, child))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn para(text: &str, style: &str) -> ParagraphUnit {
        ParagraphUnit::text(text, style)
    }

    #[test]
    fn test_build_title_heading_paragraph_chain() {
        // Verifies the ascend/descend cursor logic with no siblings:
        // level 1 -> 2 -> 5 must nest, not flatten.
        let paragraphs = [
            para("PROCEDURE", "ECHR_Title_1"),
            para("I.  Background", "ECHR_Heading_1"),
            para("1.  The case originated in an application.", "ECHR_Para"),
        ];
        let output = build(&paragraphs, &BTreeMap::new());

        assert_eq!(output.root.elements.len(), 1);
        let title = &output.root.elements[0];
        assert_eq!(title.content, "PROCEDURE");
        assert_eq!(title.level, 1);
        assert_eq!(title.elements.len(), 1);
        let heading = &title.elements[0];
        assert_eq!(heading.level, 2);
        assert_eq!(heading.elements.len(), 1);
        assert_eq!(heading.elements[0].level, 5);
    }

    #[test]
    fn test_build_siblings_replace_not_nest() {
        let paragraphs = [
            para("PROCEDURE", "ECHR_Title_1"),
            para("THE FACTS", "ECHR_Title_1"),
            para("THE LAW", "ECHR_Title_1"),
        ];
        let output = build(&paragraphs, &BTreeMap::new());

        let titles: Vec<&str> = output
            .root
            .elements
            .iter()
            .map(|e| e.content.as_str())
            .collect();
        assert_eq!(titles, vec!["PROCEDURE", "THE FACTS", "THE LAW"]);
    }

    #[test]
    fn test_build_ascends_multiple_levels() {
        let paragraphs = [
            para("THE FACTS", "ECHR_Title_1"),
            para("I.  Circumstances", "ECHR_Heading_1"),
            para("A.  Arrest", "ECHR_Heading_2"),
            para("Some paragraph.", "ECHR_Para"),
            para("THE LAW", "ECHR_Title_1"),
        ];
        let output = build(&paragraphs, &BTreeMap::new());

        assert_eq!(output.root.elements.len(), 2);
        assert_eq!(output.root.elements[1].content, "THE LAW");
        assert!(output.root.elements[1].is_leaf());
    }

    #[test]
    fn test_build_discards_front_matter_subheadings() {
        // A sub-heading before any top-level title is stray front matter.
        let paragraphs = [
            para("In the case of X v. Y,", "ECHR_Para"),
            para("PROCEDURE", "ECHR_Title_1"),
            para("1.  First paragraph.", "ECHR_Para"),
        ];
        let output = build(&paragraphs, &BTreeMap::new());

        assert_eq!(output.root.elements.len(), 1);
        assert_eq!(output.root.elements[0].content, "PROCEDURE");
    }

    #[test]
    fn test_build_skips_blank_paragraphs() {
        let paragraphs = [
            para("   ", "ECHR_Para"),
            para("PROCEDURE", "ECHR_Title_1"),
            para("", "ECHR_Para"),
        ];
        let output = build(&paragraphs, &BTreeMap::new());
        assert_eq!(output.root.elements.len(), 1);
    }

    #[test]
    fn test_build_collects_decision_body_with_newlines() {
        let paragraphs = [
            para("PROCEDURE", "ECHR_Title_1"),
            para("András Sajó, President,", "ECHR_Decision_Body"),
            para("Paulo Pinto de Albuquerque,", "Ju_Judges"),
        ];
        let output = build(&paragraphs, &BTreeMap::new());

        assert_eq!(
            output.decision_body,
            "András Sajó, President,\nPaulo Pinto de Albuquerque,"
        );
    }

    #[test]
    fn test_build_no_decision_body_is_empty_string() {
        let paragraphs = [para("PROCEDURE", "ECHR_Title_1")];
        let output = build(&paragraphs, &BTreeMap::new());
        assert!(output.decision_body.is_empty());
    }

    #[test]
    fn test_build_unstructured_document_yields_childless_root() {
        let paragraphs = [
            para("Some text", "UnknownStyle"),
            para("More text", "AnotherStyle"),
        ];
        let output = build(&paragraphs, &BTreeMap::new());
        assert!(output.root.elements.is_empty());
        assert_eq!(output.root.level, 0);
    }

    #[test]
    fn test_build_tables_get_monotonic_tags_and_last_paragraph_level() {
        let mut tables = BTreeMap::new();
        tables.insert(
            "table-0".to_string(),
            TableBlock {
                headers: vec!["Applicant".to_string()],
                rows: Vec::new(),
            },
        );

        let paragraphs = [
            para("APPENDIX", "ECHR_Title_1"),
            para("1.  List of applicants.", "ECHR_Para"),
            ParagraphUnit::table(),
        ];
        let output = build(&paragraphs, &tables);

        assert_eq!(output.attachments.len(), 1);
        assert!(output.attachments.contains_key("table-0"));

        // The table node takes the level of the preceding paragraph
        // style (5), so it becomes a sibling of the list paragraph.
        let appendix = &output.root.elements[0];
        assert_eq!(appendix.elements.len(), 2);
        let table_node = &appendix.elements[1];
        assert_eq!(table_node.content, "table-0");
        assert_eq!(table_node.kind, NodeKind::Table);
        assert_eq!(table_node.level, 5);
    }

    #[test]
    fn test_build_table_without_attachment_still_creates_node() {
        let paragraphs = [
            para("APPENDIX", "ECHR_Title_1"),
            para("1.  List of applicants.", "ECHR_Para"),
            ParagraphUnit::table(),
        ];
        let output = build(&paragraphs, &BTreeMap::new());

        assert!(output.attachments.is_empty());
        let appendix = &output.root.elements[0];
        assert_eq!(appendix.elements[1].content, "table-0");
    }

    #[test]
    fn test_build_deep_level_attaches_under_shallow_cursor() {
        // A level-5 paragraph directly after a level-1 title attaches as
        // its child even though the depth gap is more than one.
        let paragraphs = [
            para("PROCEDURE", "ECHR_Title_1"),
            para("Plain paragraph.", "ECHR_Para"),
        ];
        let output = build(&paragraphs, &BTreeMap::new());
        let title = &output.root.elements[0];
        assert_eq!(title.elements.len(), 1);
        assert_eq!(title.elements[0].level, 5);
    }
}
