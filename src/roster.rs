//! Judge roster: per-country reference data for panel matching.
//!
//! The roster is loaded once per process and shared read-only across
//! workers. First access goes through a one-time initialization guard;
//! after that the data is immutable, so no locking is needed.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{LazyLock, OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StructuringError};
use crate::types::JudgeInfo;

/// Lines of the judge listing that open a service record start with a year.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static YEAR_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d").expect("valid regex"));

static SHARED: OnceLock<JudgeRoster> = OnceLock::new();

/// Roster of judges per country.
///
/// Maps country name to a map from normalized judge name (uppercase,
/// hyphens replaced with spaces, diacritics preserved) to the judge's
/// service record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JudgeRoster {
    countries: BTreeMap<String, BTreeMap<String, JudgeInfo>>,
}

impl JudgeRoster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a roster from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let roster: Self = serde_json::from_str(json)?;
        if roster.countries.values().any(BTreeMap::is_empty) {
            return Err(StructuringError::RosterFormat(
                "roster contains a country with no judges".to_string(),
            ));
        }
        Ok(roster)
    }

    /// Load a roster from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Extract a roster from the plain-text judge listing.
    ///
    /// The listing alternates country headers and service records:
    ///
    /// ```text
    /// HUNGARY / HONGRIE
    /// 2008 - 2017 András SAJÓ
    /// 2017 Péter PACZOLAY
    /// ```
    ///
    /// A country header is an all-caps line without digits; only its
    /// first `/`-separated segment is kept, title-cased. A record line
    /// starts with the first year of service, optionally followed by a
    /// separator and the last year, then the full name. The index name
    /// is built from the all-caps tokens of the full name (plus `Mc...`
    /// surname particles), uppercased with hyphens replaced by spaces.
    #[must_use]
    pub fn from_listing(text: &str) -> Self {
        let mut countries: BTreeMap<String, BTreeMap<String, JudgeInfo>> = BTreeMap::new();
        let mut country: Option<String> = None;

        for line in text.lines() {
            let content = line.trim();
            if content.is_empty() {
                continue;
            }
            if content == content.to_uppercase() && !content.chars().any(|c| c.is_ascii_digit()) {
                let name = normalize_country(content);
                countries.entry(name.clone()).or_default();
                country = Some(name);
                continue;
            }
            let Some(country) = country.as_deref() else {
                continue;
            };
            if !YEAR_LINE.is_match(content) {
                continue;
            }
            if let Some((index, info)) = parse_record(content) {
                if let Some(judges) = countries.get_mut(country) {
                    judges.insert(index, info);
                }
            }
        }

        // Header-only countries are listing noise, not roster entries.
        countries.retain(|_, judges| !judges.is_empty());
        Self { countries }
    }

    /// Number of judges across all countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.values().map(BTreeMap::len).sum()
    }

    /// Whether the roster holds no judges at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a judge by country and normalized name.
    #[must_use]
    pub fn get(&self, country: &str, name: &str) -> Option<&JudgeInfo> {
        self.countries.get(country)?.get(name)
    }

    /// Iterate over all `(name, info)` pairs across countries.
    pub fn judges(&self) -> impl Iterator<Item = (&str, &JudgeInfo)> {
        self.countries
            .values()
            .flat_map(|judges| judges.iter().map(|(name, info)| (name.as_str(), info)))
    }

    /// All judges sorted by descending name length.
    ///
    /// Source roster iteration order is unspecified, and judge names may
    /// be substrings of one another (e.g. "LOPES" inside "LOPES
    /// GUERRA"). Matching longest names first makes panel matching
    /// deterministic and prefers the most specific roster entry.
    #[must_use]
    pub fn judges_longest_first(&self) -> Vec<(&str, &JudgeInfo)> {
        let mut judges: Vec<(&str, &JudgeInfo)> = self.judges().collect();
        judges.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
        judges
    }
}

/// Process-wide roster, loaded from `path` on first access.
///
/// Concurrent first calls race on the file read, but only one result is
/// published; later calls ignore `path` and return the shared instance.
pub fn shared_roster(path: impl AsRef<Path>) -> Result<&'static JudgeRoster> {
    if let Some(roster) = SHARED.get() {
        return Ok(roster);
    }
    let roster = JudgeRoster::load(path)?;
    Ok(SHARED.get_or_init(|| roster))
}

/// Normalize a country header line to its canonical display name.
fn normalize_country(line: &str) -> String {
    let english = line.split('/').next().unwrap_or(line);
    title_case(english.trim())
        .replace(" And ", " and ")
        .replace(" Of ", " of ")
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse one service record line into `(index_name, info)`.
fn parse_record(line: &str) -> Option<(String, JudgeInfo)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let start = (*tokens.first()?).to_string();

    // "2008 - 2017 András SAJÓ" carries an end year after the dash;
    // "2017 - Péter PACZOLAY" and "2017 Péter PACZOLAY" do not.
    let mut rest = tokens.get(1..)?;
    if matches!(rest.first(), Some(&"-" | &"–" | &"—")) {
        rest = rest.get(1..)?;
    }
    let (end, name_tokens) = match rest.first() {
        Some(year) if year.chars().all(|c| c.is_ascii_digit()) => {
            (Some((*year).to_string()), rest.get(1..)?)
        }
        _ => (None, rest),
    };

    let mut full_name = name_tokens.join(" ");
    let index = name_tokens
        .iter()
        .filter(|n| {
            (n.to_uppercase() == **n || n.starts_with("Mc"))
                && !n.contains('.')
                && !n.starts_with('(')
                && !n.chars().any(|c| c.is_ascii_digit())
        })
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    if index.len() < 2 || index.starts_with('/') {
        return None;
    }
    // Presidency annotations like "(P 2010-2012)" are not part of the name.
    if full_name.contains("(P") {
        if let Some(base) = full_name.split(" (").next() {
            full_name = base.to_string();
        }
    }

    Some((
        index.to_uppercase().replace('-', " "),
        JudgeInfo {
            full_name,
            start,
            end,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LISTING: &str = "\
HUNGARY / HONGRIE

2008 - 2017 András SAJÓ (P 2015-2017)
2017 Péter PACZOLAY

BOSNIA AND HERZEGOVINA / BOSNIE-HERZÉGOVINE
2004 - 2012 Ljiljana MIJOVIĆ

IRELAND / IRLANDE
1980 - 1998 Brian WALSH
1998 - 2008 John HEDIGAN
";

    #[test]
    fn test_from_listing_countries() {
        let roster = JudgeRoster::from_listing(LISTING);
        assert!(roster.get("Hungary", "SAJÓ").is_some());
        assert!(roster.get("Bosnia and Herzegovina", "MIJOVIĆ").is_some());
        assert!(roster.get("Ireland", "WALSH").is_some());
    }

    #[test]
    fn test_from_listing_record_fields() {
        let roster = JudgeRoster::from_listing(LISTING);
        let sajo = roster.get("Hungary", "SAJÓ").unwrap();
        assert_eq!(sajo.start, "2008");
        assert_eq!(sajo.end.as_deref(), Some("2017"));
        // Presidency annotation stripped from the display name.
        assert_eq!(sajo.full_name, "András SAJÓ");

        let paczolay = roster.get("Hungary", "PACZOLAY").unwrap();
        assert_eq!(paczolay.start, "2017");
        assert_eq!(paczolay.end, None);
    }

    #[test]
    fn test_from_listing_index_is_uppercase_surname() {
        let roster = JudgeRoster::from_listing("IRELAND\n1998 - 2008 John HEDIGAN\n");
        assert!(roster.get("Ireland", "HEDIGAN").is_some());
        assert!(roster.get("Ireland", "John HEDIGAN").is_none());
    }

    #[test]
    fn test_from_listing_hyphenated_surname_normalized() {
        let roster =
            JudgeRoster::from_listing("UNITED KINGDOM / ROYAUME-UNI\n1998 Jean SPIELMANN-SMITH\n");
        assert!(roster.get("United Kingdom", "SPIELMANN SMITH").is_some());
    }

    #[test]
    fn test_from_listing_skips_header_only_country() {
        let roster = JudgeRoster::from_listing("MONACO / MONACO\n");
        assert!(roster.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let roster = JudgeRoster::from_listing(LISTING);
        let json = serde_json::to_string(&roster).unwrap();
        let back = JudgeRoster::from_json_str(&json).unwrap();
        assert_eq!(roster, back);
    }

    #[test]
    fn test_from_json_str_rejects_empty_country() {
        let err = JudgeRoster::from_json_str(r#"{"Hungary": {}}"#).unwrap_err();
        assert!(err.to_string().contains("no judges"));
    }

    #[test]
    fn test_judges_longest_first() {
        let roster = JudgeRoster::from_listing(
            "SPAIN / ESPAGNE\n1990 Luis LOPES\n1995 Ana LOPES GUERRA\n",
        );
        let judges = roster.judges_longest_first();
        assert_eq!(judges[0].0, "LOPES GUERRA");
        assert_eq!(judges[1].0, "LOPES");
    }

    #[test]
    fn test_shared_roster_single_initialization() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        let roster = JudgeRoster::from_listing(LISTING);
        std::fs::write(&path, serde_json::to_string(&roster).unwrap()).unwrap();

        let first = shared_roster(&path).unwrap();
        // Once initialized, the path is ignored.
        let second = shared_roster("does-not-exist.json").unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, &roster);
    }

    #[test]
    fn test_len_counts_all_countries() {
        let roster = JudgeRoster::from_listing(LISTING);
        assert_eq!(roster.len(), 5);
        assert!(!roster.is_empty());
    }
}
