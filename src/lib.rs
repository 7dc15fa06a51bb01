//! Codesniff - Guess the language of a code snippet and list the functions it defines
//!
//! Two pure components composed sequentially: a language classifier that sniffs
//! raw snippet text against a closed tag set, and a symbol extractor that pulls
//! function/method names out of the snippet with a language-specific strategy.
//! An annotation boundary defines the contract for the external service that
//! writes the actual comments; this crate never generates comments itself.
//!
//! # Example
//!
//! ```
//! use codesniff::{detect_and_extract, Language};
//!
//! let analysis = detect_and_extract("def add(a, b):\n    return a + b");
//! assert_eq!(analysis.language, Language::Python);
//! assert_eq!(analysis.functions, vec!["All Code", "add"]);
//! ```

pub mod analysis;
pub mod annotate;
pub mod extract;
pub mod language;
pub mod output;

pub use analysis::{ALL_CODE, Analysis, detect_and_extract, extract_as};
pub use annotate::{AnnotateError, Annotated, AnnotationService, Scope, annotate};
pub use extract::{EXCLUDED_KEYWORDS, Strategy, extract_symbols};
pub use language::Language;
pub use output::{FileAnalysis, print_analysis, print_json, print_json_many};
