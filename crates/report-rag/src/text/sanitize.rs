//! Whitespace normalization and boilerplate removal

use once_cell::sync::Lazy;
use regex::Regex;

static MULTI_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("valid regex"));
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid regex"));
static NON_TEXT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\W]+$").expect("valid regex"));
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s\-–•]*(?:[A-Za-z0-9]{1,2}[.)]\s+)?").expect("valid regex"));

/// Normalize whitespace: collapse newline runs, turn remaining line breaks
/// into spaces, collapse space runs, and trim.
///
/// Idempotent: `sanitize(sanitize(x)) == sanitize(x)`. Never adds
/// non-whitespace characters.
pub fn sanitize(text: &str) -> String {
    let text = MULTI_NEWLINE.replace_all(text, "\n");
    let text = text.replace(['\n', '\r', '\t'], " ");
    let text = MULTI_SPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Remove boilerplate lines from a loaded page.
///
/// Drops lines containing any of `markers` (case-insensitive) and lines made
/// up entirely of digits, whitespace, and punctuation (page numbers, rules).
/// Called by the document loader before chunking, never per query.
pub fn strip_boilerplate(text: &str, markers: &[String]) -> String {
    let markers: Vec<String> = markers.iter().map(|m| m.to_lowercase()).collect();

    text.lines()
        .map(str::trim)
        .filter(|line| {
            let lower = line.to_lowercase();
            if markers.iter().any(|m| lower.contains(m)) {
                return false;
            }
            !NON_TEXT_LINE.is_match(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip a leading enumeration marker (`"a."`, `"1)"`) or bullet glyph from a
/// selected sentence. Applied only to final answer sentences, after scoring.
pub fn normalize_list_marker(sentence: &str) -> String {
    LIST_MARKER.replace(sentence, "").trim().to_string()
}
