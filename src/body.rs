//! Decision-body matcher: parses the judicial panel text against the
//! judge roster.
//!
//! Panel listings are free text of the form:
//!
//! ```text
//! András Sajó, President,
//! Vincent A. De Gaetano,
//! Paulo Pinto de Albuquerque, judges,
//! and Marialena Tsirli, Registrar,
//! ```
//!
//! Every line either matches a roster entry or is reported back as an
//! unmatched token; nothing is silently dropped, since unmatched tokens
//! feed manual review of the corpus.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::roster::JudgeRoster;
use crate::types::DecisionBodyMember;

/// Substrings stripped from every candidate token before matching.
const NOISE: &[&str] = &["President", " Registrar", "judges", ","];

/// Parse the raw decision-body text into panel members.
///
/// Tokens are the newline-separated lines of `raw_text` after noise
/// stripping. Each token is scanned against the roster for a case- and
/// diacritic-insensitive substring match of the indexed judge name
/// (hyphens normalized to spaces). Roster names are tried longest
/// first, so the most specific entry wins when one judge's name is a
/// substring of another's.
///
/// Returns the matched members in token order plus the raw lines that
/// matched nothing (noise included, for manual review).
#[must_use]
pub fn parse_body(
    raw_text: &str,
    roster: &JudgeRoster,
) -> (Vec<DecisionBodyMember>, Vec<String>) {
    let mut members = Vec::new();
    let mut unmatched = Vec::new();

    let candidates = roster.judges_longest_first();
    let text = raw_text.replace("\nand ", "\n").replace('\t', "");

    for line in text.lines() {
        let mut token = line.to_string();
        for noise in NOISE {
            token = token.replace(noise, "");
        }
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let haystack = fold_for_match(token);
        let matched = candidates.iter().find(|(name, _)| {
            let needle = fold_for_match(&name.replace('-', " "));
            haystack.contains(&needle)
        });

        match matched {
            Some((name, info)) => members.push(DecisionBodyMember {
                name: (*name).to_string(),
                info: (*info).clone(),
                role: "judge".to_string(),
            }),
            None => {
                // Keep the raw line, noise included: the unmatched list
                // feeds manual review and the stripped form loses context.
                tracing::warn!(token = %line, "Unmatched decision-body token");
                unmatched.push(line.to_string());
            }
        }
    }

    (members, unmatched)
}

/// Lowercase and strip diacritics for comparison purposes.
fn fold_for_match(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
