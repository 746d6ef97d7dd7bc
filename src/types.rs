//! Core data types for the structuring engine.
//!
//! These types model a HUDOC judgment after document extraction: an
//! ordered stream of styled paragraphs (plus embedded tables), the
//! section tree built from it, the judicial panel, and the parsed
//! conclusion elements that accompany the case metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whether an input unit is a text paragraph or an embedded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphKind {
    /// Regular styled paragraph.
    #[default]
    Paragraph,

    /// Embedded table; its content lives in the attachments map.
    Table,
}

/// One ordered unit of the input stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphUnit {
    /// Paragraph text. Empty for tables.
    #[serde(default)]
    pub text: String,

    /// Word-processor style label (e.g., "ECHR_Heading_1").
    #[serde(default)]
    pub style: String,

    /// Unit kind.
    #[serde(default)]
    pub kind: ParagraphKind,
}

impl ParagraphUnit {
    /// Create a text paragraph unit.
    #[must_use]
    pub fn text(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
            kind: ParagraphKind::Paragraph,
        }
    }

    /// Create a table marker unit.
    #[must_use]
    pub fn table() -> Self {
        Self {
            text: String::new(),
            style: String::new(),
            kind: ParagraphKind::Table,
        }
    }
}

/// An embedded table: column headers plus one record per row.
///
/// Rows map column header to cell text; `headers` fixes the column
/// order, which row maps cannot carry on their own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableBlock {
    /// Column headers in table order.
    #[serde(default)]
    pub headers: Vec<String>,

    /// Rows, each mapping a column header to the cell text.
    #[serde(default)]
    pub rows: Vec<BTreeMap<String, String>>,
}

/// Whether a section node carries paragraph text or a table tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Node content is paragraph text.
    #[default]
    Text,

    /// Node content is a synthetic table tag (e.g., "table-0").
    Table,
}

/// Canonical top-level section categories of an ECHR judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Toc,
    Abbreviations,
    Introduction,
    Procedure,
    Facts,
    Law,
    Conclusion,
    RelevantLaw,
    Opinion,
    Appendix,
    Submission,
    Schedule,
}

impl SectionName {
    /// Get the string value used in serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toc => "toc",
            Self::Abbreviations => "abbreviations",
            Self::Introduction => "introduction",
            Self::Procedure => "procedure",
            Self::Facts => "facts",
            Self::Law => "law",
            Self::Conclusion => "conclusion",
            Self::RelevantLaw => "relevant_law",
            Self::Opinion => "opinion",
            Self::Appendix => "appendix",
            Self::Submission => "submission",
            Self::Schedule => "schedule",
        }
    }
}

/// A node of the section tree.
///
/// The root is a synthetic level-0 node with empty content; its direct
/// children are the top-level sections of the judgment. Children are
/// owned exclusively by their parent, so the tree serializes as plain
/// nested JSON with no back-edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNode {
    /// Paragraph text, or the synthetic table tag for table nodes.
    pub content: String,

    /// Heading depth (0 = synthetic root, 1..5 per the style tables).
    pub level: i32,

    /// Text or table node.
    #[serde(default, skip_serializing_if = "is_text_kind")]
    pub kind: NodeKind,

    /// Canonical section category, assigned post-hoc by the tagger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_name: Option<SectionName>,

    /// Child nodes in document order.
    #[serde(default)]
    pub elements: Vec<SectionNode>,
}

fn is_text_kind(kind: &NodeKind) -> bool {
    *kind == NodeKind::Text
}

impl SectionNode {
    /// Create a new node with text content.
    #[must_use]
    pub fn new(content: impl Into<String>, level: i32) -> Self {
        Self {
            content: content.into(),
            level,
            kind: NodeKind::Text,
            section_name: None,
            elements: Vec::new(),
        }
    }

    /// Create the synthetic level-0 root.
    #[must_use]
    pub fn root() -> Self {
        Self::new("", 0)
    }

    /// Whether this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Reference data for one judge in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeInfo {
    /// Full display name (e.g., "András SAJÓ").
    pub full_name: String,

    /// First year of service.
    pub start: String,

    /// Last year of service, if no longer serving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// One matched member of the judicial panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionBodyMember {
    /// Normalized roster name (uppercase, diacritics preserved).
    pub name: String,

    /// Roster data for the matched judge.
    pub info: JudgeInfo,

    /// Panel role. Matched members are always judges.
    pub role: String,
}

/// Classification of one conclusion clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConclusionType {
    #[serde(rename = "violation")]
    Violation,

    #[serde(rename = "no-violation")]
    NoViolation,

    #[serde(rename = "other")]
    Other,
}

impl ConclusionType {
    /// Get the string value used in serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Violation => "violation",
            Self::NoViolation => "no-violation",
            Self::Other => "other",
        }
    }
}

/// One parsed outcome clause from a case's free-text conclusion field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConclusionElement {
    /// Verbatim clause text.
    pub element: String,

    /// Outcome classification.
    #[serde(rename = "type")]
    pub kind: ConclusionType,

    /// Base legal article code, lower-cased, protocol-prefixed when
    /// applicable (e.g., "p4", "6"). Only for violation/no-violation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,

    /// Parenthesised detail annotations belonging to this clause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,

    /// Trailing parenthesised mentions attached to this clause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<String>>,
}

impl ConclusionElement {
    /// Create an element with only its verbatim text, typed `other`.
    #[must_use]
    pub fn other(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            kind: ConclusionType::Other,
            article: None,
            details: None,
            mentions: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_name_as_str() {
        assert_eq!(SectionName::Facts.as_str(), "facts");
        assert_eq!(SectionName::RelevantLaw.as_str(), "relevant_law");
    }

    #[test]
    fn test_section_name_serialization() {
        assert_eq!(
            serde_json::to_string(&SectionName::RelevantLaw).unwrap(),
            "\"relevant_law\""
        );
    }

    #[test]
    fn test_conclusion_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ConclusionType::NoViolation).unwrap(),
            "\"no-violation\""
        );
        assert_eq!(ConclusionType::NoViolation.as_str(), "no-violation");
    }

    #[test]
    fn test_conclusion_element_type_field_name() {
        let element = ConclusionElement::other("Just satisfaction reserved");
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "other");
        assert!(json.get("article").is_none());
    }

    #[test]
    fn test_section_node_skips_default_fields() {
        let node = SectionNode::new("PROCEDURE", 1);
        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("kind").is_none());
        assert!(json.get("section_name").is_none());
        assert_eq!(json["content"], "PROCEDURE");
    }

    #[test]
    fn test_paragraph_unit_deserializes_with_defaults() {
        let unit: ParagraphUnit =
            serde_json::from_str(r#"{"text": "PROCEDURE", "style": "ECHR_Title_1"}"#).unwrap();
        assert_eq!(unit.kind, ParagraphKind::Paragraph);

        let table: ParagraphUnit = serde_json::from_str(r#"{"kind": "table"}"#).unwrap();
        assert_eq!(table.kind, ParagraphKind::Table);
        assert!(table.text.is_empty());
    }
}
