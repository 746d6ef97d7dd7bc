//! ECHR Structuring - Turn HUDOC judgment exports into structured records.
//!
//! This crate structures European Court of Human Rights judgments after
//! document extraction: it builds a section tree from the styled
//! paragraph stream, tags top-level sections, matches the judicial
//! panel against a judge roster, parses the free-text conclusion into
//! outcome elements and renders the tree back to plain text for
//! downstream analysis.
//!
//! # Example
//!
//! ```
//! use echr_structuring::styles::{level_for_style, SECTION_TITLE};
//! use echr_structuring::tagger::classify_section;
//! use echr_structuring::types::SectionName;
//!
//! assert_eq!(level_for_style("ECHR_Title_1"), SECTION_TITLE);
//! assert_eq!(classify_section("THE FACTS"), Some(SectionName::Facts));
//! ```
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//!
//! - [`types`]: Core data types (ParagraphUnit, SectionNode, etc.)
//! - [`error`]: Error types and Result alias
//! - [`styles`]: Style label to heading level classification
//! - [`tree`]: Section tree construction from the paragraph stream
//! - [`tagger`]: Canonical section name tagging
//! - [`roster`]: Judge roster loading and listing extraction
//! - [`body`]: Decision-body panel matching
//! - [`conclusion`]: Conclusion string parsing
//! - [`render`]: Plain-text rendering of the section tree
//! - [`pipeline`]: End-to-end per-document pipeline
//! - [`cli`]: Command-line interface

pub mod body;
pub mod cli;
pub mod conclusion;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod roster;
pub mod styles;
pub mod tagger;
pub mod tree;
pub mod types;

// Re-export main functions
pub use pipeline::structure_document;

// Re-export commonly used items
pub use error::{Result, StructuringError};
pub use pipeline::{DocumentInput, StructuredDocument};
pub use roster::JudgeRoster;
pub use types::{
    ConclusionElement, ConclusionType, DecisionBodyMember, ParagraphUnit, SectionName, SectionNode,
    TableBlock,
};
