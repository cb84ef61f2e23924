//! Tree-sitter parser integration for C++ headers.

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// One parsed header together with the source it was parsed from.
pub struct SourceUnit {
    pub path: PathBuf,
    pub source: String,
    pub tree: Tree,
}

/// A parse problem reported while building the syntax tree.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub file: PathBuf,
    /// 1-indexed line of the offending node.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: error: {}",
            self.file.display(),
            self.line,
            self.message
        )
    }
}

/// C++ parser wrapping the tree-sitter grammar.
pub struct CppParser {
    parser: Parser,
}

impl CppParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .context("Failed to set tree-sitter C++ language")?;
        Ok(CppParser { parser })
    }

    /// Parse one header into a source unit.
    pub fn parse_unit(&mut self, path: &Path, source: String) -> Result<SourceUnit> {
        let tree = self
            .parser
            .parse(&source, None)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(SourceUnit {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }
}

/// Source text covered by a node.
pub fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// The raw lexical tokens of a declaration, in source order. Comments are
/// not tokens.
pub fn leaf_tokens(node: Node, source: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    collect_leaves(node, source, &mut tokens);
    tokens
}

fn collect_leaves(node: Node, source: &str, out: &mut Vec<String>) {
    if node.kind() == "comment" {
        return;
    }
    if node.child_count() == 0 {
        let text = node_text(node, source);
        if !text.trim().is_empty() {
            out.push(text.to_string());
        }
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_leaves(child, source, out);
    }
}

/// Parse errors in a unit. Tree-sitter reports every problem as error
/// severity, so any diagnostic aborts the run.
pub fn diagnostics(unit: &SourceUnit) -> Vec<Diagnostic> {
    let mut result = Vec::new();
    if unit.tree.root_node().has_error() {
        collect_errors(unit.tree.root_node(), unit, &mut result);
    }
    result
}

fn collect_errors(node: Node, unit: &SourceUnit, out: &mut Vec<Diagnostic>) {
    if node.is_error() || node.is_missing() {
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            let text: String = node_text(node, &unit.source).chars().take(40).collect();
            format!("unexpected input near `{}`", text.trim())
        };
        out.push(Diagnostic {
            file: unit.path.clone(),
            line: node.start_position().row + 1,
            message,
        });
        return;
    }
    if !node.has_error() {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_errors(child, unit, out);
    }
}
