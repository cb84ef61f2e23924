//! Class extraction — a single top-to-bottom walk of a parsed unit that
//! records every class, struct, and class-template definition as an owned
//! `Interface`, ready for indexing and mock generation.

use tree_sitter::Node;

use super::cpp::{leaf_tokens, node_text, SourceUnit};
use crate::models::{Interface, MethodDecl};

/// Member access tracked while scanning a class body.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Access {
    Public,
    Private,
    Protected,
}

/// Collect all class-like definitions in a unit. Definitions nested inside
/// another class are not collected separately; the walk does not descend
/// below a class node.
pub fn collect_classes(unit: &SourceUnit) -> Vec<Interface> {
    let mut classes = Vec::new();
    let mut scope = Vec::new();
    walk(unit.tree.root_node(), unit, &mut scope, &mut classes);
    classes
}

fn walk(node: Node, unit: &SourceUnit, scope: &mut Vec<String>, out: &mut Vec<Interface>) {
    match node.kind() {
        "namespace_definition" => {
            let pushed = namespace_segments(node, unit);
            scope.extend(pushed.iter().cloned());
            if let Some(body) = node.child_by_field_name("body") {
                let mut cursor = body.walk();
                for child in body.children(&mut cursor) {
                    walk(child, unit, scope, out);
                }
            }
            scope.truncate(scope.len() - pushed.len());
        }
        "class_specifier" | "struct_specifier" => {
            if let Some(iface) = extract_class(node, &[], unit, scope) {
                out.push(iface);
            }
        }
        "template_declaration" => {
            let mut params = Vec::new();
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if child.kind() == "template_parameter_list" {
                    params = template_parameter_names(child, unit);
                }
            }
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if matches!(child.kind(), "class_specifier" | "struct_specifier") {
                    if let Some(iface) = extract_class(child, &params, unit, scope) {
                        out.push(iface);
                    }
                }
            }
        }
        _ => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                walk(child, unit, scope, out);
            }
        }
    }
}

/// Name segments introduced by a namespace node; `namespace a::b` counts as
/// two. Anonymous namespaces introduce none.
fn namespace_segments(node: Node, unit: &SourceUnit) -> Vec<String> {
    match node.child_by_field_name("name") {
        Some(name) => node_text(name, &unit.source)
            .split("::")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => Vec::new(),
    }
}

fn extract_class(
    node: Node,
    template_params: &[String],
    unit: &SourceUnit,
    scope: &[String],
) -> Option<Interface> {
    let name = node.child_by_field_name("name")?;
    // definitions only; `class X;` has no body
    let body = node.child_by_field_name("body")?;

    let type_name = node_text(name, &unit.source).to_string();
    let display = if template_params.is_empty() {
        type_name
    } else {
        format!("{}<{}>", type_name, template_params.join(", "))
    };
    let mut segments = scope.to_vec();
    segments.push(display);

    let default_access = if node.kind() == "struct_specifier" {
        Access::Public
    } else {
        Access::Private
    };

    let mut methods = Vec::new();
    let mut access = default_access;
    let mut cursor = body.walk();
    for member in body.children(&mut cursor) {
        match member.kind() {
            "access_specifier" => {
                let text = node_text(member, &unit.source);
                access = if text.starts_with("public") {
                    Access::Public
                } else if text.starts_with("protected") {
                    Access::Protected
                } else {
                    Access::Private
                };
            }
            "field_declaration" | "declaration" => {
                if access == Access::Public {
                    if let Some(decl) = extract_method(member, unit) {
                        methods.push(decl);
                    }
                }
            }
            _ => {}
        }
    }

    Some(Interface {
        segments,
        file: unit.path.to_path_buf(),
        template_params: template_params.to_vec(),
        bases: base_specifiers(node, unit),
        methods,
    })
}

/// Base specifiers as written, in declaration order. Access and virtuality
/// of the inheritance are irrelevant here; every base is followed.
fn base_specifiers(class_node: Node, unit: &SourceUnit) -> Vec<String> {
    let mut bases = Vec::new();
    let mut cursor = class_node.walk();
    for child in class_node.children(&mut cursor) {
        if child.kind() != "base_class_clause" {
            continue;
        }
        let mut inner = child.walk();
        for base in child.children(&mut inner) {
            if matches!(
                base.kind(),
                "type_identifier" | "qualified_identifier" | "template_type"
            ) {
                bases.push(node_text(base, &unit.source).to_string());
            }
        }
    }
    bases
}

/// Extract a pure virtual method declaration, or `None` for anything else
/// (data members, non-pure methods, constructors, destructors).
fn extract_method(member: Node, unit: &SourceUnit) -> Option<MethodDecl> {
    let tokens = leaf_tokens(member, &unit.source);

    // pure virtual: a function declarator with a trailing `= 0`
    let mut tail: Vec<&str> = tokens.iter().map(String::as_str).collect();
    if tail.last() == Some(&";") {
        tail.pop();
    }
    if tail.len() < 2 || tail[tail.len() - 2] != "=" || tail[tail.len() - 1] != "0" {
        return None;
    }

    let declarator = member.child_by_field_name("declarator")?;
    let func = find_descendant(declarator, "function_declarator")?;

    let name_node = func.child_by_field_name("declarator")?;
    let spelling = match name_node.kind() {
        "field_identifier" | "identifier" => node_text(name_node, &unit.source).to_string(),
        // `operator ==` is legal; the spelling carries no whitespace
        "operator_name" => node_text(name_node, &unit.source)
            .split_whitespace()
            .collect::<String>(),
        _ => return None,
    };

    let (types, arity) = parameter_types(func, unit);
    let display_name = format!("{}({})", spelling, types.join(", "));

    Some(MethodDecl {
        spelling,
        display_name,
        tokens,
        is_const: is_const_method(func, unit),
        arity,
        file: unit.path.to_path_buf(),
    })
}

/// First descendant of the given kind, preorder. For a method declarator
/// this finds the outermost function declarator before any nested
/// function-pointer parameters.
fn find_descendant<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    if node.kind() == kind {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_descendant(child, kind) {
            return Some(found);
        }
    }
    None
}

fn is_const_method(func: Node, unit: &SourceUnit) -> bool {
    let mut cursor = func.walk();
    let is_const = func
        .children(&mut cursor)
        .any(|c| c.kind() == "type_qualifier" && node_text(c, &unit.source) == "const");
    is_const
}

/// Parameter type strings (names and default values dropped) and the formal
/// parameter count. A lone `void` counts as zero parameters.
fn parameter_types(func: Node, unit: &SourceUnit) -> (Vec<String>, usize) {
    let mut types = Vec::new();
    if let Some(list) = func.child_by_field_name("parameters") {
        let mut cursor = list.walk();
        for param in list.children(&mut cursor) {
            if matches!(
                param.kind(),
                "parameter_declaration" | "optional_parameter_declaration"
            ) {
                types.push(parameter_type_text(param, unit));
            }
        }
    }
    if types.len() == 1 && types[0] == "void" {
        types.clear();
    }
    let arity = types.len();
    (types, arity)
}

/// The written type of one parameter: the declaration text minus the
/// parameter name and any default value, whitespace collapsed.
fn parameter_type_text(param: Node, unit: &SourceUnit) -> String {
    let start = param.start_byte();
    let mut end = param.end_byte();
    if param.kind() == "optional_parameter_declaration" {
        let mut cursor = param.walk();
        for child in param.children(&mut cursor) {
            if child.kind() == "=" {
                end = child.start_byte();
                break;
            }
        }
    }

    let mut cut = None;
    if let Some(declarator) = param.child_by_field_name("declarator") {
        if let Some(ident) = find_descendant(declarator, "identifier") {
            if ident.start_byte() >= start && ident.end_byte() <= end {
                cut = Some((ident.start_byte(), ident.end_byte()));
            }
        }
    }

    let text = match cut {
        Some((s, e)) => format!("{}{}", &unit.source[start..s], &unit.source[e..end]),
        None => unit.source[start..end].to_string(),
    };
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Names declared by a template parameter list, e.g. `Elem` and `N` for
/// `template <typename Elem, int N>`.
fn template_parameter_names(list: Node, unit: &SourceUnit) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = list.walk();
    for param in list.children(&mut cursor) {
        let name = match param.kind() {
            "type_parameter_declaration"
            | "optional_type_parameter_declaration"
            | "template_template_parameter_declaration" => {
                find_descendant(param, "type_identifier")
                    .map(|n| node_text(n, &unit.source).to_string())
            }
            "parameter_declaration" | "optional_parameter_declaration" => {
                find_descendant(param, "identifier").map(|n| node_text(n, &unit.source).to_string())
            }
            _ => None,
        };
        if let Some(name) = name {
            names.push(name);
        }
    }
    names
}
