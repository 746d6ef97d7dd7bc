//! Text renderer: flattens a tagged section tree back to plain text.
//!
//! The rendering feeds downstream text analysis, so headings with
//! children contribute structure only; the emitted lines are the leaf
//! paragraphs in document order.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{NodeKind, SectionName, SectionNode, TableBlock};

/// Leading paragraph numbering such as `"12."` or `"I."`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMBERING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\w+\.)(.+)").expect("valid regex"));

/// Render the tree to newline-joined plain text.
///
/// Depth-first, document order. A node whose `section_name` is in
/// `exclude` is skipped together with its entire subtree, tagged or
/// not. Leaf text nodes emit their content with the numbering prefix
/// stripped; leaf table nodes emit the attached table, or the literal
/// tag when no attachment matches.
#[must_use]
pub fn render(
    tree: &SectionNode,
    exclude: &HashSet<SectionName>,
    attachments: &BTreeMap<String, TableBlock>,
) -> String {
    let mut lines = Vec::new();
    collect(tree, exclude, attachments, &mut lines);
    lines.join("\n")
}

fn collect(
    node: &SectionNode,
    exclude: &HashSet<SectionName>,
    attachments: &BTreeMap<String, TableBlock>,
    lines: &mut Vec<String>,
) {
    if node.section_name.is_some_and(|name| exclude.contains(&name)) {
        return;
    }

    if node.is_leaf() {
        match node.kind {
            NodeKind::Table => match attachments.get(&node.content) {
                Some(block) => render_table(block, lines),
                None => {
                    tracing::warn!(tag = %node.content, "Rendering table tag without attachment");
                    lines.push(node.content.clone());
                }
            },
            NodeKind::Text => {
                if !node.content.is_empty() {
                    lines.push(strip_numbering(&node.content));
                }
            }
        }
        return;
    }

    for child in &node.elements {
        collect(child, exclude, attachments, lines);
    }
}

/// Emit a table as a header line plus one line per row.
fn render_table(block: &TableBlock, lines: &mut Vec<String>) {
    if !block.headers.is_empty() {
        lines.push(block.headers.join(" "));
    }
    for row in &block.rows {
        let cells: Vec<&str> = block
            .headers
            .iter()
            .map(|header| row.get(header).map_or("", String::as_str))
            .collect();
        lines.push(cells.join(" "));
    }
}

/// Strip a leading `"<token>. "` numbering prefix from a paragraph.
fn strip_numbering(text: &str) -> String {
    match NUMBERING_PREFIX.captures(text) {
        Some(captures) => captures[1].trim().to_string(),
        None => text.to_string(),
    }
}
