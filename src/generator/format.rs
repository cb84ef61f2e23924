//! Namespace and template formatting for qualified type expressions.
//!
//! All scanners here are character-level with an explicit bracket-depth
//! counter; `::` separators and commas inside angle brackets are never
//! treated as split points.

/// Split a qualified expression on `::`, ignoring separators nested inside
/// template argument lists.
pub fn split_qualified(expr: &str) -> Vec<String> {
    let mut parts = vec![String::new()];
    let mut depth = 0usize;
    let mut chars = expr.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '<' => {
                depth += 1;
                parts.last_mut().unwrap().push(c);
            }
            '>' => {
                depth = depth.saturating_sub(1);
                parts.last_mut().unwrap().push(c);
            }
            ':' if depth == 0 && chars.peek() == Some(&':') => {
                chars.next();
                parts.push(String::new());
            }
            _ => parts.last_mut().unwrap().push(c),
        }
    }
    parts
}

/// Strip every template argument list from an expression, depth-aware:
/// `n::T<Elem>` becomes `n::T`.
pub fn strip_template_args(expr: &str) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for c in expr.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// The namespace segments of a qualified expression (all but the last).
fn namespaces(expr: &str) -> Vec<String> {
    let mut parts = split_qualified(expr);
    parts.pop();
    parts
}

/// One `namespace X {` line per enclosing namespace, outermost first.
pub fn namespaces_begin(expr: &str) -> String {
    namespaces(expr)
        .iter()
        .map(|ns| format!("namespace {} {{", ns))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The matching `} // namespace X` footers, innermost first.
pub fn namespaces_end(expr: &str) -> String {
    namespaces(expr)
        .iter()
        .rev()
        .map(|ns| format!("}} // namespace {}", ns))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A `template<typename P0, typename P1>\n` declaration line built from the
/// trailing segment's angle-bracket arguments, or the empty string when the
/// expression carries none. Spaces inside the argument list are ignored.
pub fn template_decl(expr: &str) -> String {
    let last = split_qualified(expr).pop().unwrap_or_default();
    let mut names: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for c in last.chars() {
        match c {
            '<' => {
                depth += 1;
                if depth == 1 {
                    continue;
                }
                current.push(c);
            }
            '>' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    names.push(std::mem::take(&mut current));
                    continue;
                }
                current.push(c);
            }
            ',' if depth == 1 => names.push(std::mem::take(&mut current)),
            ' ' => {}
            _ if depth >= 1 => current.push(c),
            _ => {}
        }
    }
    names.retain(|n| !n.is_empty());
    if names.is_empty() {
        return String::new();
    }
    let params: Vec<String> = names.iter().map(|n| format!("typename {}", n)).collect();
    format!("template<{}>\n", params.join(", "))
}

/// The plain interface identifier: the trailing segment with its balanced
/// `<...>` suffix removed. Used for generated file names.
pub fn interface_name(expr: &str) -> String {
    let last = split_qualified(expr).pop().unwrap_or_default();
    strip_template_args(&last)
}
