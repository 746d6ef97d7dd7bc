//! Section tagger: annotates top-level tree nodes with canonical
//! section categories.
//!
//! The phrase tables below were collected from the historical corpus,
//! misspellings and stray punctuation included. They are configuration,
//! not derived logic: tagging quality depends on their exact content.
//! Categories are checked in declared order and the first category with
//! a case-insensitive prefix match wins, so `procedure` outranks
//! `facts`, `facts` outranks `law`, and so on, matching legal document
//! convention.

use crate::types::{SectionName, SectionNode};

/// Recognized leading phrases per canonical section, in priority order.
const SECTION_PHRASES: &[(SectionName, &[&str])] = &[
    (SectionName::Toc, &["Table of contents"]),
    (SectionName::Abbreviations, &["ABBREVIATIONS AND ACRONYMS"]),
    (SectionName::Introduction, &["INTRODUCTION"]),
    (
        SectionName::Procedure,
        &[
            "CLAIMS MADE BY THE APPLICANTS",
            "I.  Locus standı",
            "PROCEDURE",
            "PROCEDURE”",
            "AS TO PROCEDURE",
            "PROCEDURE AND FACTS",
            "FACTS AND PROCEDURE",
            "I.   THE GOVERNMENT’S PRELIMINARY OBJECTION",
        ],
    ),
    (
        SectionName::Facts,
        &[
            "THE FACTS",
            "AS TO THE FACTS",
            "COMPLAINTS",
            "COMPLAINT",
            "FACTS",
            "THE FACT",
            "THE FACTSITMarkFactsComplaintsStart",
            "THE CIRCUMSTANCES OF THE CASE",
            "I.  THE CIRCUMSTANCES OF THE CASE",
            "I. THE PARTICULAR CIRCUMSTANCES OF THE CASE",
            "PROCEEDINGS",
            "PROCEEDINGS BEFORE THE COMMISSION",
            "II. PROCEEDINGS BEFORE THE COMMISSION",
            "PROCEEDINGS BEFORE THE COMMISSION  17.",
        ],
    ),
    (
        SectionName::Law,
        &[
            "THE LAW",
            "LAW",
            "IV.  COMPLIANCE WITH THE EXHAUSTION RULE",
            "THE LAWS ON THE USE OF LANGUAGES IN EDUCATION IN",
            "AS TO THE LAW",
            "TO THE LAW",
            "III. THE LAW",
            "IN LAW",
            "APPLICATION OF ARTICLE",
            "II.  APPLICATION OF ARTICLE",
            "IV.  OTHER COMPLAINTS UNDER ARTICLE",
            "I. ALLEGED LACK OF STANDING AS",
            "ITMarkFactsComplaintsEndTHE LAW",
            "ALLEGED VIOLATION OF ARTICLE",
            "AS TO THE  ALLEGED VIOLATION OF ARTICLE",
            "I.  ALLEGED VIOLATION OF ARTICLE",
            "II.   ALLEGED VIOLATION OF ARTICLE",
            "III.  ALLEGED VIOLATION OF ARTICLE",
            "THE ALLEGED BREACHES OF ARTICLE",
            "MERITS",
            "II.  MERITS",
            "III.  MERITS",
        ],
    ),
    (
        SectionName::Conclusion,
        &[
            "CONCLUSION",
            "THE COURT UNANIMOUSLY",
            "REASONS, THE COURT, UNANIMOUSLY,",
            "FOR THESE REASONS, THE COURT UNANIMOUSLY",
            "FOR THESE REASONS, THE COURT ,UNANIMOUSLY,",
            "FOR THESE REASONS, THE COURT, UNANIMOUSLY,",
            "FOR THESE REASONS, THE COURT UNANIMOUSLY,",
            "FOR THESE REASONS, THE COURT,UNANIMOUSLY,",
            "FOR THESE REASONS, THE COURT, UNANIMOUSLY",
            "FOR THESE REASONS THE COURT UNANIMOUSLY",
            "FOR THESE REASONS, THE COURT UNANIMOUSLY:",
            "FOR THESE REASONS, THE COUR, UNANIMOUSLY,",
            "FOR THESE REASONS THE COURT",
            "FOR THESE RASONS, THE COURT UNANIMOUSLY",
            "FOR THESE REASONS, THE COURT:",
            "FOR THE REASONS, THE COURT",
            "THE COURT",
            "FOR THESE REASONS, THE COURT,",
            "FOR THESE REASONS, THE COURT",
        ],
    ),
    (
        SectionName::RelevantLaw,
        &[
            "RELEVANT DOMESTIC LAW",
            "II.  RELEVANT DOMESTIC LAW",
            "RELEVANT DOMESTIC LEGAL FRAMEWORK",
            "III.  RELEVANT ELEMENTS OF COMPARATIVE LAW",
            "II. RELEVANT DOMESTIC LAW",
            "II. RELEVANT DOMESTIC LAW AND PRACTICE",
            "RELEVANT DOMESTIC LAW AND CASE-LAW",
            "III.  RELEVANT INTERNATIONAL MATERIALS",
            "RELEVANT international material",
            "II.  RELEVANT DOMESTIC LAW AND PRACTICE",
            "RELEVANT DOMESTIC AND INTERNATIONAL LAW",
            "III.  RELEVANT INTERNATIONAL MATERIAL",
            "II.  RELEVANT DOMESTIC LAW AND PRACTICE AND INTERNATIONAL MATERIALS",
            "RELEVANT DOMESTIC LAW AND PRACTICE",
            "RELEVANT EUROPEAN UNION LAW",
            "relevant legal framework",
            "RELEVANT LEGAL FRAMEWORK AND PRACTICE",
            "III.  COMPARATIVE LAW AND PRACTICE",
            "RELEVANT LEGAL FRAMEWORK AND INTERNATIONAL MATERIAL",
            "RELEVANT LEGAL and factual FRAMEWORK",
            "RELEVANT LEGAL FRAMEWORK and the council of europe material",
            "Council of europe material",
            "LEGAL FRAMEWORK",
            "III.  RELEVANT INTERNATIONAL LAW",
            "RELEVANT COUNCIL OF EUROPE DOCUMENTS",
            "III.  RELEVANT COUNCIL OF EUROPE INSTRUMENTS",
            "II.  RELEVANT INTERNATIONAL MATERIAL",
        ],
    ),
    (
        SectionName::Opinion,
        &[
            "STATEMENT OF DISSENT BY JUDGE KŪRIS",
            "JOINT CONCURRING OPINION OF JUDGES YUDKIVSKA, VUČINIĆ, TURKOVIĆ AND HÜSEYNOV",
            "JOINT PARTLY DISSENTING OPINION OF JUDGES RAIMONDI, SICILIANOS, KARAKAS, VUČINIĆ AND HARUTYUNYAN",
            "PARTLY DISSENTING OPINION OF JUDGE DE GAETANO, JOINED BY JUDGE VUČINIĆ",
            "PARTLY DISSENTING OPINION OF JUDGE KŪRIS",
            "PARTLY DISSENTING OPINION OF JUDGE GROZEV",
            "DISSENTING OPINION OF JUDGE KOSKELO",
            "CONCURRING OPINION OF JUDGE PINTO DE ALBUQUERQUE",
            "DISSENTING OPINION OF JUDGE BAKA",
            "PARTLY DISSENTING OPINION OF JUDGE SICILIANOS",
            "PARTLY DISSENTING OPINION OF JUDGE EICKE",
            "CONCURRING OPINION OF JUDGE JEBENS",
            "CONCURRING OPINION OF JUDGE GÖLCÜKLÜ",
            "ConcurRing opinion of Judge Bonello",
            "CONCURRING OPINION OF JUDGE SERGHIDES",
            "DISSENTING OPINION OF JUDGE SERGHIDES",
            "DISSENTING OPINION OF JUDGE ROZAKIS",
            "PARTLY DISSENTING OPINION OF JUDGE GÖLCÜKLÜ",
            "JOINT DISSENTING OPINION OF JUDGES GROZEV AND O’LEARY",
            "JOINT PARTLY DISSENTING OPINION OF JUDGES LOUCAIDES AND TULKENS",
        ],
    ),
    (
        SectionName::Appendix,
        &[
            "APPENDIX",
            "APPENDIX: LIST OF APPLICANTS",
            "APPENDIX 1",
            "ANNEX",
            "APPENDIX 2",
            "ANNEX 1:",
            "ANNEX 2:",
            "Annex I",
            "Annex II",
            "Appendix to the judgment",
        ],
    ),
    (
        SectionName::Submission,
        &[
            "FINAL SUBMISSIONS TO THE COURT",
            "THE GOVERNMENT’S FINAL SUBMISSIONS TO THE COURT",
            "FINAL SUBMISSIONS BY THE GOVERNMENT TO THE COURT",
            "FINAL SUBMISSIONS SUBMITTED TO THE COURT BY THE GOVERNMERNT",
            "DISSENTING OPINION OF JUDGE SCHEMBRI ORLAND",
            "GOVERNMENT’S FINAL SUBMISSIONS TO THE COURT",
            "FINAL SUBMISSIONS TO THE COURT BY THE GOVERNMENT",
            "FINAL SUBMISSIONS MADE TO THE COURT",
            "FOR THESE REASONS, THE COUR",
            "SUBMISSIONS OF THE PARTIES",
            "CONCLUDING SUBMISSIONS MADE TO THE COURT",
            "THE GOVERNMENT’S SUBMISSIONS TO THE COURT",
            "THE GOVERNMENT’S FINAL SUBMISSIONS",
            "FINAL SUBMISSIONS PRESENTED BY THE GOVERNMENT",
            "FINAL SUBMISSIONS PRESENTED TO THE COURT",
            "FINAL SUBMISSIONS AND OBSERVATIONS MADE TO THE COURT",
            "FINAL SUBMISSIONS MADE TO THE COURT BY THE GOVERNMENT",
            "FINAL SUBMISSIONS MADE BY THE GOVERNMENT TO THE COURT",
            "SUBMISSIONS MADE BY THE GOVERNMENT TO THE COURT",
            "CONCLUDING SUBMISSIONS BY THE GOVERNMENT",
            "FINAL SUBMISSIONS MADE BY THE GOVERNMENT",
            "FINAL SUBMISSIONS BY THOSE APPEARING BEFORE THE COURT",
        ],
    ),
    (SectionName::Schedule, &["SCHEDULE"]),
];

/// Classify a single section title, if any phrase table matches it.
///
/// Comparison upper-cases both sides, so mixed-case phrases in the
/// tables still match all-caps titles and vice versa.
#[must_use]
pub fn classify_section(content: &str) -> Option<SectionName> {
    let title = content.trim().to_uppercase();
    for (name, phrases) in SECTION_PHRASES {
        if phrases
            .iter()
            .any(|phrase| title.starts_with(&phrase.to_uppercase()))
        {
            return Some(*name);
        }
    }
    None
}

/// Tag the direct children of the root with canonical section names.
///
/// Only top-level nodes are tagged; grandchildren keep their
/// `section_name` untouched. Nodes matching no phrase remain untagged.
pub fn tag(root: &mut SectionNode) {
    for child in &mut root.elements {
        child.section_name = classify_section(&child.content);
        if child.section_name.is_none() {
            tracing::debug!(content = %child.content, "Could not tag top-level section");
        }
    }
}
