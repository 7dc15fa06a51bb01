//! Function and method name extraction
//!
//! Given a snippet and its language tag, collect the set of function/method
//! names defined in it. Python snippets get a structured parse with a regex
//! fallback; every other tag goes through a composite scan of declaration
//! shapes. The raw result here is deduplicated, keyword-filtered, and sorted —
//! the `"All Code"` sentinel is prepended by the caller-facing wrapper in
//! [`crate::analysis`], not by this module.

pub mod patterns;
pub mod python;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::language::Language;

/// Control-flow keywords the declaration shapes can capture by accident
/// (`if (...) {` looks like a bare definition). Subtracted from every result.
pub const EXCLUDED_KEYWORDS: &[&str] =
    &["for", "if", "while", "switch", "catch", "do", "class", "new"];

/// A call-shaped `main(` occurrence preceded by whitespace.
static MAIN_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+main\s*\(").expect("MAIN_CALL regex is invalid"));

/// How symbols are discovered for a given language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Parse the snippet into a syntax tree and collect definition nodes.
    /// Falls back to [`PatternMatch`](Strategy::PatternMatch) when the snippet
    /// is not a standalone-valid module.
    StructuredParse,
    /// Scan the snippet with declaration-shape patterns only.
    PatternMatch,
}

impl Strategy {
    /// Select the extraction strategy for a language tag.
    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::Python => Strategy::StructuredParse,
            _ => Strategy::PatternMatch,
        }
    }
}

/// Extract the function and method names defined in a snippet.
///
/// The result is deduplicated, filtered against [`EXCLUDED_KEYWORDS`], and
/// sorted ascending. A snippet with no recognizable definitions yields an
/// empty vector — never an error.
///
/// # Examples
///
/// ```
/// use codesniff::{extract_symbols, Language};
///
/// let names = extract_symbols("function greet(name) { return name; }", Language::JavaScript);
/// assert_eq!(names, vec!["greet"]);
/// ```
pub fn extract_symbols(snippet: &str, lang: Language) -> Vec<String> {
    extract_symbols_with(snippet, lang, EXCLUDED_KEYWORDS)
}

/// Extract symbols with an explicit keyword blocklist.
///
/// The blocklist is a configuration input rather than hidden state so it can
/// vary per dialect without touching the extraction logic.
pub fn extract_symbols_with(snippet: &str, lang: Language, excluded: &[&str]) -> Vec<String> {
    let mut names: BTreeSet<String> = match Strategy::for_language(lang) {
        Strategy::StructuredParse => python::extract(snippet),
        Strategy::PatternMatch => patterns::extract(snippet),
    };

    // Surface the entry point even when the declaration shapes missed the
    // exact spacing (e.g. `int main()` in an unclassified snippet).
    if MAIN_CALL.is_match(snippet) {
        names.insert("main".to_string());
    }

    names.retain(|name| !excluded.contains(&name.as_str()));
    names.into_iter().collect()
}
