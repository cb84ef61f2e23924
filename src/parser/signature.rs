//! Signature reconstruction from raw declaration tokens.
//!
//! The syntax tree never exposes a ready-made signature string, so the
//! result type is rebuilt from the token stream and the argument list is
//! sliced out of the composed display name.

use crate::models::{MethodDecl, MethodDescriptor};

/// Qualifier tokens elided from reconstructed result types.
const ELIDED: [&str; 3] = ["virtual", "inline", "volatile"];

/// Rebuild the result-type string of a method from its raw tokens.
///
/// Scans left-to-right and stops at the first occurrence of the method's
/// spelling, or at the literal `operator` keyword (tokenization splits
/// `operator` and its symbol, so the symbol never has to be matched).
/// Tokens are joined without separators except after `const`/`volatile`,
/// which would otherwise fuse with the following token (`constint`).
pub fn result_type(tokens: &[String], spelling: &str) -> String {
    let mut out = String::new();
    for token in tokens {
        if token == spelling || token == "operator" {
            break;
        }
        if !ELIDED.contains(&token.as_str()) {
            out.push_str(token);
        }
        if token == "const" || token == "volatile" {
            out.push(' ');
        }
    }
    out
}

/// Slice the comma-joined parameter type list out of a display name of the
/// form `name(type1, type2)`: the substring between the first `(` after the
/// spelling and the final `)`.
pub fn display_args(display_name: &str, spelling: &str) -> String {
    let start = spelling.len() + 1;
    let end = display_name.len().saturating_sub(1);
    display_name
        .get(start..end)
        .unwrap_or_default()
        .to_string()
}

/// Build the immutable descriptor consumed by the renderer. There is no
/// error path: malformed tokens yield a syntactically broken result type
/// that surfaces when the generated code is compiled.
pub fn build_descriptor(decl: &MethodDecl, is_template: bool) -> MethodDescriptor {
    MethodDescriptor {
        result_type: result_type(&decl.tokens, &decl.spelling),
        name: decl.spelling.clone(),
        is_const: decl.is_const,
        is_template,
        arity: decl.arity,
        args: display_args(&decl.display_name, &decl.spelling),
        arg_prefix: "arg".to_string(),
    }
}
