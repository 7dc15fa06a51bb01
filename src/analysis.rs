//! Snippet analysis: the language guess plus the discovered functions
//!
//! This is the caller-facing wrapper around the classifier and the extractor.
//! The `"All Code"` sentinel is prepended here, not in the extractor — the
//! extractor's raw result stays a plain sorted name set.

use serde::Serialize;

use crate::extract::extract_symbols;
use crate::language::Language;

/// Synthetic first entry denoting "the whole snippet" rather than one function.
pub const ALL_CODE: &str = "All Code";

/// Result of analyzing a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Best-guess language tag
    pub language: Language,
    /// Discovered function names, with [`ALL_CODE`] always first and the
    /// remainder sorted ascending without duplicates
    pub functions: Vec<String>,
}

/// Classify a snippet and list the functions it defines.
///
/// # Examples
///
/// ```
/// use codesniff::{detect_and_extract, Language};
///
/// let analysis = detect_and_extract("");
/// assert_eq!(analysis.language, Language::Plaintext);
/// assert_eq!(analysis.functions, vec!["All Code"]);
/// ```
pub fn detect_and_extract(snippet: &str) -> Analysis {
    extract_as(snippet, Language::classify(snippet))
}

/// Like [`detect_and_extract`], but with the language supplied by the caller.
pub fn extract_as(snippet: &str, language: Language) -> Analysis {
    let mut functions = vec![ALL_CODE.to_string()];
    functions.extend(extract_symbols(snippet, language));

    Analysis {
        language,
        functions,
    }
}
