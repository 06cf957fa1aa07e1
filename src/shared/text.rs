use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use titlecase::titlecase;

/// A compiled "match a pattern, substitute a replacement" helper. The
/// building blocks for every name-cleaning pipeline in the crate.
pub struct Cleaner {
    regex: Regex,
    replacement: String,
}

impl Cleaner {
    pub fn new(pattern: &str, replacement: &str) -> Self {
        Self::build(pattern, replacement, false)
    }

    pub fn case_insensitive(pattern: &str, replacement: &str) -> Self {
        Self::build(pattern, replacement, true)
    }

    fn build(pattern: &str, replacement: &str, case_insensitive: bool) -> Self {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .unwrap_or_else(|err| panic!("invalid cleaner pattern {pattern:?}: {err}"));
        Self {
            regex,
            replacement: replacement.to_string(),
        }
    }

    pub fn clean(&self, input: &str) -> String {
        self.regex
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }
}

/// Word-boundary pattern for a literal word.
pub fn match_words(word: &str) -> String {
    format!(r"\b(?:{})\b", regex::escape(word))
}

pub fn is_digits_only(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref ORDINAL_SUFFIX: Regex = RegexBuilder::new(r"\b(\d+)(st|nd|rd|th)\b")
        .case_insensitive(true)
        .build()
        .unwrap();
    static ref LEADING_ZEROS: Regex = Regex::new(r"\b0+(\d+)\b").unwrap();
    static ref STREET_TYPES: Vec<Cleaner> = vec![
        Cleaner::case_insensitive(r"\bstreet\b", "St"),
        Cleaner::case_insensitive(r"\bavenue\b", "Ave"),
        Cleaner::case_insensitive(r"\bboulevard\b", "Blvd"),
        Cleaner::case_insensitive(r"\bdrive\b", "Dr"),
        Cleaner::case_insensitive(r"\broad\b", "Rd"),
        Cleaner::case_insensitive(r"\bhighway\b", "Hwy"),
        Cleaner::case_insensitive(r"\blane\b", "Ln"),
        Cleaner::case_insensitive(r"\bcrescent\b", "Cres"),
        Cleaner::case_insensitive(r"\bcourt\b", "Crt"),
        Cleaner::case_insensitive(r"\bplace\b", "Pl"),
        Cleaner::case_insensitive(r"\bterrace\b", "Ter"),
        Cleaner::case_insensitive(r"\bsquare\b", "Sq"),
        Cleaner::case_insensitive(r"\bpoint\b", "Pt"),
        Cleaner::case_insensitive(r"\bparkway\b", "Pkwy"),
        Cleaner::case_insensitive(r"\bgate\b", "Gt"),
    ];
    static ref BOUNDS: Vec<Cleaner> = vec![
        Cleaner::case_insensitive(r"\bnorth\s?bound\b", "NB"),
        Cleaner::case_insensitive(r"\bsouth\s?bound\b", "SB"),
        Cleaner::case_insensitive(r"\beast\s?bound\b", "EB"),
        Cleaner::case_insensitive(r"\bwest\s?bound\b", "WB"),
    ];
}

/// Trims, collapses interior whitespace runs, and title-cases for display.
/// Title casing keeps short function words lowercase and only touches ASCII
/// input so non-Latin names pass through untouched.
pub fn clean_label(input: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(input.trim(), " ");
    if collapsed.is_ascii() {
        titlecase(&collapsed)
    } else {
        collapsed.into_owned()
    }
}

/// Replaces spelled-out street qualifiers with their canonical
/// abbreviations (Street -> St, Avenue -> Ave, ...).
pub fn clean_street_types(input: &str) -> String {
    STREET_TYPES
        .iter()
        .fold(input.to_string(), |acc, cleaner| cleaner.clean(&acc))
}

/// Normalizes directional suffixes (Northbound -> NB, ...).
pub fn clean_bounds(input: &str) -> String {
    BOUNDS
        .iter()
        .fold(input.to_string(), |acc, cleaner| cleaner.clean(&acc))
}

/// Normalizes embedded digit clusters: ordinal suffixes attached to digits
/// are lowercased (101ST -> 101st) and standalone leading zeros stripped.
pub fn clean_numbers(input: &str) -> String {
    let pass = ORDINAL_SUFFIX.replace_all(input, |caps: &regex::Captures| {
        format!("{}{}", &caps[1], caps[2].to_lowercase())
    });
    LEADING_ZEROS.replace_all(&pass, "$1").into_owned()
}

#[test]
fn label_trims_and_collapses() {
    assert_eq!(clean_label("  capital   line "), "Capital Line");
}

#[test]
fn label_keeps_small_words_lowercase() {
    assert_eq!(clean_label("university of alberta"), "University of Alberta");
}

#[test]
fn label_leaves_non_ascii_alone() {
    assert_eq!(clean_label("gare centrale de montréal"), "gare centrale de montréal");
}

#[test]
fn street_types_whole_words_only() {
    assert_eq!(clean_street_types("Jasper Avenue"), "Jasper Ave");
    assert_eq!(clean_street_types("Streetcar Loop"), "Streetcar Loop");
}

#[test]
fn bounds_spaced_and_joined() {
    assert_eq!(clean_bounds("104 Ave Northbound"), "104 Ave NB");
    assert_eq!(clean_bounds("104 Ave north bound"), "104 Ave NB");
}

#[test]
fn numbers_ordinals_and_zeros() {
    assert_eq!(clean_numbers("101ST Street"), "101st Street");
    assert_eq!(clean_numbers("Stop 007"), "Stop 7");
}

#[test]
fn match_words_is_bounded() {
    let cleaner = Cleaner::case_insensitive(&match_words("edmonton"), "Edm");
    assert_eq!(cleaner.clean("Edmonton South"), "Edm South");
    assert_eq!(cleaner.clean("Edmontonian"), "Edmontonian");
}

#[test]
fn digits_only_rejects_empty_and_mixed() {
    assert!(is_digits_only("1234"));
    assert!(!is_digits_only(""));
    assert!(!is_digits_only("A12"));
}
