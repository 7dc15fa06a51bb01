//! Python symbol extraction: structured parse with a pattern fallback
//!
//! Python snippets are the one case where a syntax tree is worth building.
//! The parse collects every `function_definition` name, nested and method
//! definitions included. A snippet that is not a standalone-valid module
//! (a fragment pasted out of a larger file) falls back to a line-anchored
//! `def` pattern instead of surfacing an error.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use tree_sitter::{Node, Parser};

/// Line-anchored `def name(...):` for fragments that do not parse.
static DEF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*def\s+(\w+)\s*\(.*?\):").expect("DEF_PATTERN regex is invalid")
});

/// Marker for a snippet the structured parser could not handle.
///
/// Recoverable by construction: the caller falls back to pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFailed;

/// Extract function names from a python snippet.
///
/// Zero discovered names is a valid result, not an error; so is a fragment
/// that only the fallback pattern can read.
pub fn extract(snippet: &str) -> BTreeSet<String> {
    match parse_definitions(snippet) {
        Ok(names) => names,
        Err(ParseFailed) => {
            debug!("structured python parse failed, falling back to pattern match");
            DEF_PATTERN
                .captures_iter(snippet)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .collect()
        }
    }
}

/// Parse the snippet as a python module and collect definition names.
///
/// A tree whose root contains error or missing nodes counts as a failed
/// parse: tree-sitter recovers where a conventional parser would raise, and
/// fragments must reach the fallback path rather than yield partial trees.
fn parse_definitions(snippet: &str) -> Result<BTreeSet<String>, ParseFailed> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|_| ParseFailed)?;

    let tree = parser.parse(snippet, None).ok_or(ParseFailed)?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(ParseFailed);
    }

    let mut names = BTreeSet::new();
    collect_definitions(root, snippet.as_bytes(), &mut names);
    Ok(names)
}

/// Walk the whole tree, collecting every function definition's name.
fn collect_definitions(node: Node, source: &[u8], names: &mut BTreeSet<String>) {
    if node.kind() == "function_definition" {
        if let Some(name_node) = node.child_by_field_name("name") {
            if let Ok(name) = name_node.utf8_text(source) {
                names.insert(name.to_string());
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_definitions(child, source, names);
    }
}
