//! Declaration-shape patterns for the non-python extraction branch
//!
//! The scan is one pass of a combined pattern built from named shapes joined
//! by ordered alternation. Order matters: an assignment like
//! `const f = function() {}` must be consumed by the assignment shape before
//! the bare-definition shape can capture the `function` keyword out of it.
//! Keyword filtering happens in the caller, so a shape is allowed to capture
//! control-flow keywords (`if (...) {`) that only look like definitions.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// A declaration shape the composite scan recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclShape {
    /// Access-modifier / return-type qualified methods ending in an opening
    /// brace: `public static void main(String[] args) {`, `int main() {`.
    MethodDecl,
    /// Qualified-name definitions, `Type::name(...) {`, with the qualifier
    /// optional so bare `name(...) {` definitions match as well.
    QualifiedDef,
    /// `function name(...)` declarations.
    FunctionDecl,
    /// Assignment-style declarations: `const name = function (...)`,
    /// `let name = (...) => ...`.
    FunctionExpr,
}

impl DeclShape {
    /// Every shape, in alternation order.
    pub const ALL: [DeclShape; 4] = [
        DeclShape::MethodDecl,
        DeclShape::QualifiedDef,
        DeclShape::FunctionDecl,
        DeclShape::FunctionExpr,
    ];

    /// The pattern source for this shape. Each fragment carries exactly one
    /// capture group holding the declared name.
    fn fragment(&self) -> &'static str {
        match self {
            DeclShape::MethodDecl => {
                r"(?:(?:public|private|protected)\s+)?(?:static\s+)?(?:final\s+)?(?:void|[A-Za-z_][A-Za-z0-9_]*)\s+([A-Za-z_][A-Za-z0-9_]*)\s*\([^)]*\)\s*\{"
            }
            DeclShape::QualifiedDef => {
                r"(?:[A-Za-z_][A-Za-z0-9_]*::)?([A-Za-z_][A-Za-z0-9_]*)\s*\([^)]*\)\s*(?:const|noexcept)?\s*\{"
            }
            DeclShape::FunctionDecl => r"function\s+([A-Za-z0-9_]+)\s*\(.*?\)",
            DeclShape::FunctionExpr => {
                r"(?:const|let|var)\s+([A-Za-z0-9_]+)\s*=\s*(?:function)?\s*\(.*?\)"
            }
        }
    }

    /// Compile this shape's pattern on its own.
    ///
    /// Useful for auditing one shape in isolation; extraction always runs the
    /// combined alternation so that consumption order is preserved.
    pub fn pattern(&self) -> Regex {
        Regex::new(self.fragment()).expect("declaration shape pattern is invalid")
    }

    /// Short name for this shape.
    pub fn name(&self) -> &'static str {
        match self {
            DeclShape::MethodDecl => "method",
            DeclShape::QualifiedDef => "qualified",
            DeclShape::FunctionDecl => "function",
            DeclShape::FunctionExpr => "assignment",
        }
    }
}

/// All shapes joined by ordered alternation. Capture group `i + 1` belongs to
/// `DeclShape::ALL[i]`.
static COMPOSITE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation: Vec<String> = DeclShape::ALL
        .iter()
        .map(|shape| format!("(?:{})", shape.fragment()))
        .collect();
    Regex::new(&alternation.join("|")).expect("composite declaration pattern is invalid")
});

/// Collect every declared name a shape can find in the snippet.
pub fn extract(snippet: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    for caps in COMPOSITE.captures_iter(snippet) {
        // Exactly one shape's group participates in each match
        for (idx, _shape) in DeclShape::ALL.iter().enumerate() {
            if let Some(m) = caps.get(idx + 1) {
                names.insert(m.as_str().to_string());
            }
        }
    }

    names
}
