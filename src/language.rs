//! Source language classification for code snippets
//!
//! A cheap lexical sniff over raw text, not a parse: classification only has to
//! be good enough to pick an extraction strategy. The checks run in a fixed
//! priority order because the signatures overlap; the most specific signal wins
//! and anything unrecognized degrades to plaintext.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A `def` or `class` declaration at statement position.
static PYTHON_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:def|class)\s+").expect("PYTHON_DECL regex is invalid")
});

/// Access-modifier qualified class or entry-point declarations.
static JAVA_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*public\s+(?:class\b|static\s+void\s+main\b)")
        .expect("JAVA_DECL regex is invalid")
});

/// Preprocessor includes, a C-style entry point, or a namespace import.
static CPP_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:#\s*include\b|int\s+main\b|using\s+namespace\b)")
        .expect("CPP_DECL regex is invalid")
});

/// Line-leading `function`, module imports/exports, or assignment-style
/// `const`/`let`/`var` bindings.
static JS_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:function\s|import\s|export\s|(?:const|let|var)\s+\w+\s*=)")
        .expect("JS_DECL regex is invalid")
});

/// Best-guess language tag for a snippet.
///
/// The set is closed: a snippet that matches nothing is `Plaintext`, never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
    Cpp,
    JavaScript,
    Plaintext,
}

impl Language {
    /// Classify a snippet by its content.
    ///
    /// Total function: always returns one of the five tags. The cascade is
    /// ordered most-specific-first, so a C++ file that happens to contain a
    /// token matching a looser rule still lands on `Cpp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use codesniff::Language;
    ///
    /// assert_eq!(Language::classify("def greet():\n    pass"), Language::Python);
    /// assert_eq!(Language::classify("#include <iostream>"), Language::Cpp);
    /// assert_eq!(Language::classify("hello world"), Language::Plaintext);
    /// ```
    pub fn classify(snippet: &str) -> Self {
        if PYTHON_DECL.is_match(snippet) {
            return Language::Python;
        }
        if JAVA_DECL.is_match(snippet) {
            return Language::Java;
        }
        if CPP_DECL.is_match(snippet) {
            return Language::Cpp;
        }
        if JS_DECL.is_match(snippet) {
            return Language::JavaScript;
        }
        Language::Plaintext
    }

    /// Returns the canonical lowercase tag for this language.
    ///
    /// This is the same string the JSON output carries.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::JavaScript => "javascript",
            Language::Plaintext => "plaintext",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "cpp" | "c++" => Ok(Language::Cpp),
            "javascript" | "js" => Ok(Language::JavaScript),
            "plaintext" | "text" => Ok(Language::Plaintext),
            other => Err(format!("unrecognized language tag: {}", other)),
        }
    }
}
