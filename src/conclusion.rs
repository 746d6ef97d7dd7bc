//! Conclusion parser: structures the free-text conclusion field of a
//! case into outcome elements.
//!
//! Conclusion strings are semicolon-and-parenthesis-delimited free
//! text, e.g.:
//!
//! ```text
//! Violation of Art. 2 (substantive aspect);Violation of Art. 13+2
//! ```
//!
//! Parsing is best-effort: clauses that cannot be classified are kept
//! with `type = other`, and violation clauses with no locatable article
//! keep their type but no article code. Nothing is discarded.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ConclusionElement, ConclusionType};

/// Historical and irregular article forms that bypass the generic
/// token scan. Checked in order; first match wins.
///
/// The corpus writes protocol sub-clauses without an "Art." marker
/// ("Violation of P1-1"), so the generic scan cannot find them.
const IRREGULAR_ARTICLES: &[(&str, &str)] = &[
    ("p1-1", "p1"),
    ("p1-2", "p1"),
    ("p1-3", "p1"),
    ("p4-2", "p4"),
    ("p4-4", "p4"),
    ("p7-1", "p7"),
    ("p7-2", "p7"),
    ("p7-4", "p7"),
    ("p7-5", "p7"),
    ("p12-1", "p12"),
    ("p6-3-c", "p6"),
    ("6-1", "6"),
];

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("valid regex"));

/// One clause isolated from the raw string, before classification.
struct Clause {
    text: String,
    details: Option<Vec<String>>,
    mentions: Option<Vec<String>>,
    /// Procedural remark preceding a substantive clause; never
    /// classified and never given an article.
    procedural: bool,
}

/// Parse a raw conclusion string into structured outcome elements.
///
/// Primary elements preserve encounter order; clones produced by
/// `+`-joined article lists are appended after all primary elements.
/// Each clone is an independent value copy of its source element.
#[must_use]
pub fn parse_conclusion(raw: &str) -> Vec<ConclusionElement> {
    let clauses = isolate_clauses(raw);

    let mut elements = Vec::with_capacity(clauses.len());
    let mut clones = Vec::new();

    for clause in clauses {
        let mut element = ConclusionElement::other(clause.text);
        element.details = clause.details;
        element.mentions = clause.mentions;

        if !clause.procedural {
            let normalized = normalize_clause(&element.element);
            element.kind = classify(&normalized);
            if element.kind != ConclusionType::Other {
                extract_articles(&normalized, &mut element, &mut clones);
            }
        }

        elements.push(element);
    }

    elements.extend(clones);
    elements
}

/// Split the raw string into clauses, resolving parenthesised groups.
///
/// Splitting on `)` isolates the parenthesis-enclosed detail groups;
/// fragments without any `(` are re-split on `;`. A parenthetical with
/// no clause text of its own carries additional mentions for the
/// previously isolated clause.
fn isolate_clauses(raw: &str) -> Vec<Clause> {
    let mut candidates: Vec<&str> = Vec::new();
    for chunk in raw.split(')') {
        if chunk.is_empty() {
            continue;
        }
        if chunk.contains('(') {
            candidates.push(chunk);
        } else {
            candidates.extend(chunk.split(';'));
        }
    }
    candidates.retain(|c| !c.is_empty());

    let mut clauses: Vec<Clause> = Vec::new();
    for candidate in candidates {
        let (head, tail) = match candidate.split_once('(') {
            Some((head, tail)) => (head, Some(tail)),
            None => (candidate, None),
        };
        let details: Option<Vec<String>> =
            tail.map(|t| t.split(';').map(str::to_string).collect());

        let phrases: Vec<&str> = head
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let Some((last, earlier)) = phrases.split_last() else {
            // Orphan parenthetical: its content belongs to the clause
            // before it as extra mentions.
            if let Some(extra) = details {
                match clauses.last_mut() {
                    Some(previous) => match &mut previous.mentions {
                        Some(mentions) => mentions.extend(extra),
                        None => previous.mentions = Some(extra),
                    },
                    None => {
                        tracing::warn!("Orphan parenthetical with no preceding clause");
                    }
                }
            }
            continue;
        };

        for phrase in earlier {
            clauses.push(Clause {
                text: (*phrase).to_string(),
                details: None,
                mentions: None,
                procedural: true,
            });
        }
        clauses.push(Clause {
            text: (*last).to_string(),
            details,
            mentions: None,
            procedural: false,
        });
    }

    clauses
}

/// Lowercase, trim and collapse runs of spaces for classification.
fn normalize_clause(text: &str) -> String {
    MULTI_SPACE
        .replace_all(text.to_lowercase().trim(), " ")
        .into_owned()
}

/// Classify a normalized clause by its leading words.
fn classify(normalized: &str) -> ConclusionType {
    if normalized.starts_with("violation") {
        ConclusionType::Violation
    } else if normalized.starts_with("no-violation") || normalized.starts_with("no violation") {
        ConclusionType::NoViolation
    } else {
        ConclusionType::Other
    }
}

/// Extract the article code(s) for a violation/no-violation clause.
///
/// `+`-joined article lists yield one clone per extra operand; clones
/// are pushed onto `clones` so the caller can append them after all
/// primary elements.
fn extract_articles(
    normalized: &str,
    element: &mut ConclusionElement,
    clones: &mut Vec<ConclusionElement>,
) {
    // "Art. 5 and Art. 6", "of 5 and of 6", "5 and 6" all mean a joined
    // article list.
    let connected = normalized
        .replace(" and art. ", "+")
        .replace(" and of ", "+")
        .replace(" and ", "+");

    if let Some(base) = irregular_article(&connected) {
        element.article = Some(base.to_string());
        return;
    }

    let Some(code) = locate_article_code(&connected) else {
        // Type is known but the article is not; the caller must
        // tolerate a missing article.
        return;
    };

    let mut operands = code.split('+');
    if let Some(first) = operands.next() {
        element.article = Some(base_article(first));
    }
    for operand in operands {
        let mut clone = element.clone();
        clone.article = Some(base_article(operand));
        clones.push(clone);
    }
}

/// Look up a hard-coded irregular article form in the clause.
fn irregular_article(connected: &str) -> Option<&'static str> {
    IRREGULAR_ARTICLES
        .iter()
        .find(|(form, _)| {
            connected.contains(&format!("violation of {form}"))
                || connected.contains(&format!("violations of {form}"))
        })
        .map(|(_, base)| *base)
}

/// Locate the article code following the first "art" token.
fn locate_article_code(connected: &str) -> Option<String> {
    let tokens: Vec<&str> = connected.split_whitespace().collect();
    for (i, token) in tokens.iter().enumerate() {
        if token.starts_with("art") {
            // "art.6" carries the code inline; "art." and "article"
            // are followed by the code as the next token.
            if token.starts_with("art.") && token.len() > 4 {
                return Some(token[4..].to_string());
            }
            return tokens.get(i + 1).map(|t| (*t).to_string());
        }
    }
    None
}

/// Strip the sub-clause suffix and stray dots from one article operand.
fn base_article(operand: &str) -> String {
    operand
        .split('-')
        .next()
        .unwrap_or(operand)
        .trim()
        .replace('.', "")
}

/// Format the raw semicolon-separated article list of a case.
///
/// Splits on `;` and `+`, strips sub-clause suffixes of convention
/// articles, and de-duplicates. Protocol codes (`p1-3`) are atomic:
/// their suffix is the article within the protocol, not a sub-clause.
#[must_use]
pub fn format_article(article: &str) -> Vec<String> {
    let mut articles: Vec<String> = Vec::new();
    for part in article.split(';').flat_map(|s| s.split('+')) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let base = if part.to_lowercase().starts_with('p') {
            part.to_string()
        } else {
            part.split('-').next().unwrap_or(part).trim().to_string()
        };
        if !articles.contains(&base) {
            articles.push(base);
        }
    }
    articles
}

/// Format the raw article list keeping sub-clause suffixes.
#[must_use]
pub fn format_subarticle(article: &str) -> Vec<String> {
    let mut articles: Vec<String> = Vec::new();
    for part in article.split(';').flat_map(|s| s.split('+')) {
        let part = part.trim().to_string();
        if !part.is_empty() && !articles.contains(&part) {
            articles.push(part);
        }
    }
    articles
}

/// Base article of the first operand of each `+`-joined article list.
#[must_use]
pub fn find_base_articles<S: AsRef<str>>(articles: &[S]) -> Vec<String> {
    articles
        .iter()
        .filter_map(|a| a.as_ref().split('+').next())
        .map(|a| a.split('-').next().unwrap_or(a).trim().to_string())
        .collect()
}

/// Extract the party names from a case title.
///
/// Strips the leading "CASE OF " marker and a trailing parenthesised
/// qualifier, then splits on " v. ".
#[must_use]
pub fn format_parties(title: &str) -> Vec<String> {
    let mut parties = title.strip_prefix("CASE OF ").unwrap_or(title);
    if parties.ends_with(')') {
        parties = parties.split('(').next().unwrap_or(parties);
    }
    parties.split(" v. ").map(|p| p.trim().to_string()).collect()
}
