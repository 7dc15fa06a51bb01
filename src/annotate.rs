//! Annotation boundary: the external service that writes the comments
//!
//! The crate never generates comments itself. It validates the request,
//! supplies the language guess and the scope, and checks that the service
//! response actually carries a commented code block. This is the one seam
//! where errors are reported instead of degraded: classification and
//! extraction always produce a value, but a failed annotation has no local
//! fallback.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::analysis::ALL_CODE;
use crate::language::Language;

/// A fenced code block in a service response, with an optional language tag
/// after the opening fence.
static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:[a-zA-Z]+)?\n([\s\S]*?)```").expect("CODE_BLOCK regex is invalid")
});

/// What part of the snippet annotation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Annotate the whole snippet.
    AllCode,
    /// Annotate only the body of the named function.
    Function(String),
}

impl Scope {
    /// Parse a scope from a function-list entry, mapping the `"All Code"`
    /// sentinel to whole-snippet scope.
    pub fn from_name(name: &str) -> Self {
        if name == ALL_CODE {
            Scope::AllCode
        } else {
            Scope::Function(name.to_string())
        }
    }
}

/// Errors surfaced at the annotation boundary.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// The operation requires a snippet and none was supplied. Distinct from
    /// a snippet that merely produced zero symbols, which is a valid result.
    #[error("missing code snippet")]
    MissingSnippet,

    /// The external service was unreachable or reported a failure.
    #[error("annotation service failed: {0}")]
    Service(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service responded, but without a recognizable commented code block.
    #[error("no commented code block in annotation response")]
    MissingCodeBlock,
}

/// The external collaborator that generates the comments.
///
/// Implementations must preserve the original code structure, whitespace and
/// line breaks exactly, inserting only comment lines or tokens, scoped either
/// to the whole snippet or to the body of the named function.
pub trait AnnotationService {
    /// Produce an annotated rendition of the snippet.
    fn annotate(
        &self,
        snippet: &str,
        language: Language,
        scope: &Scope,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

/// An annotated snippet returned from the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    /// The commented code, as extracted from the service response
    pub code: String,
    /// The language supplied to the service
    pub language: Language,
}

/// Run a snippet through an annotation service.
///
/// Classifies the snippet, forwards it with the requested scope, and
/// validates that the response carries a fenced code block. Failures are
/// reported to the caller, never retried.
pub fn annotate<S: AnnotationService>(
    service: &S,
    snippet: &str,
    scope: &Scope,
) -> Result<Annotated, AnnotateError> {
    if snippet.is_empty() {
        return Err(AnnotateError::MissingSnippet);
    }

    let language = Language::classify(snippet);
    let response = service
        .annotate(snippet, language, scope)
        .map_err(AnnotateError::Service)?;

    let code = extract_code_block(&response).ok_or(AnnotateError::MissingCodeBlock)?;

    Ok(Annotated { code, language })
}

/// Pull the first fenced code block out of a service response.
///
/// The block's indentation and line breaks are preserved as-is.
pub fn extract_code_block(response: &str) -> Option<String> {
    CODE_BLOCK
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
