//! Style classification: maps word-processor style labels to heading levels.
//!
//! HUDOC judgments are exported with named paragraph styles. The tables
//! below are static configuration, not derived logic: downstream
//! behavior depends on their exact membership, so they reproduce the
//! known style inventory verbatim.

/// Heading level for section titles.
pub const SECTION_TITLE: i32 = 1;
/// Heading level for first-level headings (Roman numerals).
pub const HEADING_1: i32 = 2;
/// Heading level for second-level headings (letters).
pub const HEADING_2: i32 = 3;
/// Heading level for third-level headings (numbers).
pub const HEADING_3: i32 = 4;
/// Level for body paragraphs.
pub const HEADING_PARA: i32 = 5;
/// Pseudo-level for the judicial panel listing.
pub const DECISION_BODY: i32 = -1;
/// Level for styles that play no structural role.
pub const UNCLASSIFIED: i32 = 0;

/// Styles marking a top-level section title.
const SECTION_TITLE_STYLES: &[&str] = &["ECHR_Title_1", "Ju_H_Head"];

/// Styles marking a first-level heading.
const HEADING_1_STYLES: &[&str] = &["ECHR_Heading_1", "Ju_H_I_Roman"];

/// Styles marking a second-level heading.
const HEADING_2_STYLES: &[&str] = &["ECHR_Heading_2", "Ju_H_A", "Ju_H_a"];

/// Styles marking a third-level heading.
const HEADING_3_STYLES: &[&str] = &["ECHR_Heading_3", "Ju_H_1.", "Ju_H_1"];

/// Styles marking a body paragraph.
const HEADING_PARA_STYLES: &[&str] = &[
    "ECHR_Para",
    "ECHR_Para_Quote",
    "Ju_List",
    "Ju_List_a",
    "Ju_Para",
    "Normal",
    "Ju_Quot",
    "Ju_H_Article",
    "Ju_Para Char Char",
    "Ju_Para Char",
    "Ju_Para_Last",
    "Opi_Para",
];

/// Styles marking the judicial panel listing.
const DECISION_BODY_STYLES: &[&str] = &["ECHR_Decision_Body", "Ju_Judges"];

/// Style inventory of documents that predate the named ECHR styles.
///
/// Documents whose every paragraph carries one of these styles cannot
/// be structured by the level tables above.
const OLD_PARSER_STYLES: &[&str] = &[
    "header",
    "Normal",
    "Body Text 2",
    "Body Text Indent 3",
    "OldCommission",
    "Heading 6",
    "Heading 5",
    "Heading 4",
];

/// Map a paragraph style label to its heading level.
///
/// Unrecognized labels map to [`UNCLASSIFIED`] and play no structural
/// role in the tree.
///
/// # Examples
/// ```
/// use echr_structuring::styles::{level_for_style, HEADING_1, UNCLASSIFIED};
///
/// assert_eq!(level_for_style("ECHR_Heading_1"), HEADING_1);
/// assert_eq!(level_for_style("SomeUnknownStyle"), UNCLASSIFIED);
/// ```
#[must_use]
pub fn level_for_style(style: &str) -> i32 {
    if SECTION_TITLE_STYLES.contains(&style) {
        SECTION_TITLE
    } else if HEADING_1_STYLES.contains(&style) {
        HEADING_1
    } else if HEADING_2_STYLES.contains(&style) {
        HEADING_2
    } else if HEADING_3_STYLES.contains(&style) {
        HEADING_3
    } else if HEADING_PARA_STYLES.contains(&style) {
        HEADING_PARA
    } else if DECISION_BODY_STYLES.contains(&style) {
        DECISION_BODY
    } else {
        UNCLASSIFIED
    }
}

/// Which parser generation a document requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    /// Legacy commission-era documents; not supported.
    Old,

    /// Documents with named ECHR styles.
    New,
}

/// Select the parser generation for a paragraph stream.
///
/// A document is legacy when every paragraph style belongs to the old
/// inventory; a single named ECHR style is enough to use the
/// structural parser. An empty stream is vacuously legacy.
#[must_use]
pub fn select_parser<'a>(styles: impl IntoIterator<Item = &'a str>) -> ParserKind {
    if styles.into_iter().all(|s| OLD_PARSER_STYLES.contains(&s)) {
        ParserKind::Old
    } else {
        ParserKind::New
    }
}
