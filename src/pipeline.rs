//! Document pipeline: wires the structuring stages together.
//!
//! One call to [`structure_document`] takes a raw paragraph/table
//! stream plus case metadata and produces the full structured record:
//! tagged section tree, judicial panel, table attachments and parsed
//! conclusion. Every stage is a pure transformation over owned inputs,
//! so documents can be processed on any number of threads with only the
//! roster shared between them.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::body;
use crate::conclusion;
use crate::error::{Result, StructuringError};
use crate::render;
use crate::roster::JudgeRoster;
use crate::styles::{self, ParserKind};
use crate::tagger;
use crate::tree;
use crate::types::{
    ConclusionElement, DecisionBodyMember, ParagraphKind, ParagraphUnit, SectionName, SectionNode,
    TableBlock,
};

/// Sections excluded from the rendered text by default.
///
/// The law discussion and the operative conclusion quote the outcome
/// verbatim, which would leak the label into text handed to downstream
/// classifiers.
pub const DEFAULT_EXCLUDED_SECTIONS: &[SectionName] = &[SectionName::Law, SectionName::Conclusion];

/// Raw per-document input as produced by the document extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Ordered paragraph/table stream.
    pub paragraphs: Vec<ParagraphUnit>,

    /// Embedded table content keyed by synthetic tag.
    #[serde(default)]
    pub tables: BTreeMap<String, TableBlock>,

    /// Raw conclusion string from the case metadata.
    #[serde(default)]
    pub conclusion: String,
}

/// Fully structured document, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct StructuredDocument {
    /// Document identifier (HUDOC item id).
    pub id: String,

    /// Tagged section tree. The root is synthetic; its children are the
    /// top-level sections.
    pub tree: SectionNode,

    /// Judicial panel members matched against the roster.
    pub decision_body: Vec<DecisionBodyMember>,

    /// Panel tokens that matched no roster entry, kept for review.
    pub unmatched_tokens: Vec<String>,

    /// Embedded tables referenced from the tree.
    pub attachments: BTreeMap<String, TableBlock>,

    /// Structured outcome elements parsed from the conclusion string.
    pub conclusion: Vec<ConclusionElement>,
}

impl StructuredDocument {
    /// Render the document to plain text, excluding `exclude` sections.
    #[must_use]
    pub fn rendered_text(&self, exclude: &HashSet<SectionName>) -> String {
        render::render(&self.tree, exclude, &self.attachments)
    }

    /// Render the text handed to downstream feature extraction, with
    /// the outcome-revealing sections left out.
    #[must_use]
    pub fn analysis_text(&self) -> String {
        let exclude = DEFAULT_EXCLUDED_SECTIONS.iter().copied().collect();
        self.rendered_text(&exclude)
    }
}

/// Structure one document end to end.
///
/// Fails with [`StructuringError::LegacyFormat`] when the style
/// inventory predates the named ECHR styles, and with
/// [`StructuringError::NoStructure`] when no structural heading is
/// found anywhere in the stream. All other irregularities degrade to
/// explicit markers in the output rather than errors.
pub fn structure_document(
    id: &str,
    input: &DocumentInput,
    roster: &JudgeRoster,
) -> Result<StructuredDocument> {
    let paragraph_styles = input
        .paragraphs
        .iter()
        .filter(|unit| unit.kind == ParagraphKind::Paragraph)
        .map(|unit| unit.style.as_str());
    if styles::select_parser(paragraph_styles) == ParserKind::Old {
        return Err(StructuringError::LegacyFormat {
            document: id.to_string(),
        });
    }

    let output = tree::build(&input.paragraphs, &input.tables);
    if output.root.is_leaf() {
        return Err(StructuringError::NoStructure {
            document: id.to_string(),
        });
    }

    let mut root = output.root;
    tagger::tag(&mut root);

    let (decision_body, unmatched_tokens) = body::parse_body(&output.decision_body, roster);
    let conclusion = conclusion::parse_conclusion(&input.conclusion);

    tracing::debug!(
        document = %id,
        sections = root.elements.len(),
        judges = decision_body.len(),
        unmatched = unmatched_tokens.len(),
        "Structured document"
    );

    Ok(StructuredDocument {
        id: id.to_string(),
        tree: root,
        decision_body,
        unmatched_tokens,
        attachments: output.attachments,
        conclusion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConclusionType;
    use pretty_assertions::assert_eq;

    fn roster() -> JudgeRoster {
        JudgeRoster::from_listing("HUNGARY / HONGRIE\n2008 - 2017 András SAJÓ\n")
    }

    fn input() -> DocumentInput {
        DocumentInput {
            paragraphs: vec![
                ParagraphUnit::text("András Sajó, President,", "ECHR_Decision_Body"),
                ParagraphUnit::text("PROCEDURE", "ECHR_Title_1"),
                ParagraphUnit::text("1.  The case originated in an application.", "ECHR_Para"),
                ParagraphUnit::text("THE FACTS", "ECHR_Title_1"),
                ParagraphUnit::text("2.  The applicant was born in 1950.", "ECHR_Para"),
                ParagraphUnit::text("THE LAW", "ECHR_Title_1"),
                ParagraphUnit::text("3.  The Court considers.", "ECHR_Para"),
            ],
            tables: BTreeMap::new(),
            conclusion: "Violation of Art. 6".to_string(),
        }
    }

    #[test]
    fn test_structure_document_end_to_end() {
        let doc = structure_document("001-12345", &input(), &roster()).unwrap();

        assert_eq!(doc.id, "001-12345");
        assert_eq!(doc.tree.elements.len(), 3);
        assert_eq!(
            doc.tree.elements[0].section_name,
            Some(SectionName::Procedure)
        );
        assert_eq!(doc.tree.elements[1].section_name, Some(SectionName::Facts));
        assert_eq!(doc.tree.elements[2].section_name, Some(SectionName::Law));

        assert_eq!(doc.decision_body.len(), 1);
        assert_eq!(doc.decision_body[0].name, "SAJÓ");
        assert!(doc.unmatched_tokens.is_empty());

        assert_eq!(doc.conclusion.len(), 1);
        assert_eq!(doc.conclusion[0].kind, ConclusionType::Violation);
        assert_eq!(doc.conclusion[0].article.as_deref(), Some("6"));
    }

    #[test]
    fn test_structure_document_legacy_format() {
        let legacy = DocumentInput {
            paragraphs: vec![
                ParagraphUnit::text("Header text", "header"),
                ParagraphUnit::text("Some body", "Normal"),
            ],
            ..DocumentInput::default()
        };
        let err = structure_document("001-200", &legacy, &roster()).unwrap_err();
        assert!(matches!(err, StructuringError::LegacyFormat { .. }));
    }

    #[test]
    fn test_structure_document_no_structure() {
        let flat = DocumentInput {
            paragraphs: vec![ParagraphUnit::text("Only body text.", "ECHR_Para")],
            ..DocumentInput::default()
        };
        let err = structure_document("001-300", &flat, &roster()).unwrap_err();
        assert!(matches!(err, StructuringError::NoStructure { .. }));
    }

    #[test]
    fn test_analysis_text_excludes_law_and_conclusion() {
        let doc = structure_document("001-12345", &input(), &roster()).unwrap();
        let text = doc.analysis_text();
        assert!(text.contains("The applicant was born in 1950."));
        assert!(!text.contains("The Court considers."));
    }

    #[test]
    fn test_rendered_text_idempotent_over_paragraphs() {
        // Rendering with no exclusions reproduces the leaf paragraph
        // texts in order, numbering prefixes stripped.
        let doc = structure_document("001-12345", &input(), &roster()).unwrap();
        let text = doc.rendered_text(&HashSet::new());
        assert_eq!(
            text,
            "The case originated in an application.\n\
             The applicant was born in 1950.\n\
             The Court considers."
        );
    }

    #[test]
    fn test_document_input_deserializes_with_defaults() {
        let input: DocumentInput = serde_json::from_str(
            r#"{"paragraphs": [{"text": "PROCEDURE", "style": "ECHR_Title_1"}]}"#,
        )
        .unwrap();
        assert_eq!(input.paragraphs.len(), 1);
        assert!(input.tables.is_empty());
        assert!(input.conclusion.is_empty());
    }
}
