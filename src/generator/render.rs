//! Mock method rendering — macro invocation lines and forwarding operator
//! definitions.

use std::collections::HashSet;

use crate::models::{Interface, MethodDescriptor};
use crate::parser::signature::build_descriptor;
use crate::resolver::HeaderIndex;

/// Indentation for generated class members.
const GAP: &str = "    ";

/// Descriptive identifier for an operator spelling. The mocking macros
/// cannot take operator symbols as method names, so mocked operators are
/// registered under these names and reached through a forwarding
/// definition.
pub fn operator_mock_name(spelling: &str) -> Option<&'static str> {
    let name = match spelling {
        "operator," => "comma_operator",
        "operator!" => "logical_not_operator",
        "operator!=" => "inequality_operator",
        "operator%" => "modulus_operator",
        "operator%=" => "modulus_assignment_operator",
        "operator&" => "address_of_or_bitwise_and_operator",
        "operator&&" => "logical_and_operator",
        "operator&=" => "bitwise_and_assignment_operator",
        "operator()" => "function_call_or_cast_operator",
        "operator*" => "multiplication_or_dereference_operator",
        "operator*=" => "multiplication_assignment_operator",
        "operator+" => "addition_or_unary_plus_operator",
        "operator++" => "increment1_operator",
        "operator+=" => "addition_assignment_operator",
        "operator-" => "subtraction_or_unary_negation_operator",
        "operator--" => "decrement1_operator",
        "operator-=" => "subtraction_assignment_operator",
        "operator->" => "member_selection_operator",
        "operator->*" => "pointer_to_member_selection_operator",
        "operator/" => "division_operator",
        "operator/=" => "division_assignment_operator",
        "operator<" => "less_than_operator",
        "operator<<" => "left_shift_operator",
        "operator<<=" => "left_shift_assignment_operator",
        "operator<=" => "less_than_or_equal_to_operator",
        "operator=" => "assignment_operator",
        "operator==" => "equality_operator",
        "operator>" => "greater_than_operator",
        "operator>=" => "greater_than_or_equal_to_operator",
        "operator>>" => "right_shift_operator",
        "operator>>=" => "right_shift_assignment_operator",
        "operator[]" => "array_subscript_operator",
        "operator^" => "exclusive_or_operator",
        "operator^=" => "exclusive_or_assignment_operator",
        "operator|" => "bitwise_inclusive_or_operator",
        "operator|=" => "bitwise_inclusive_or_assignment_operator",
        "operator||" => "logical_or_operator",
        "operator~" => "complement_operator",
        _ => return None,
    };
    Some(name)
}

/// Synthesized parameter names only: `arg0, arg1`.
fn named_args(d: &MethodDescriptor) -> String {
    (0..d.arity)
        .map(|i| format!("{}{}", d.arg_prefix, i))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The raw type list with a synthesized name appended to each top-level
/// parameter: `std::map<int, int> arg0, int arg1`. Commas nested inside
/// `<...>` or `(...)` are not parameter separators; nesting is tracked
/// with an explicit depth counter.
fn named_args_with_types(d: &MethodDescriptor) -> String {
    if d.args.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    let mut depth = 0usize;
    let mut index = 0usize;
    for c in d.args.chars() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if depth == 0 && c == ',' {
            out.push_str(&format!(" {}{}", d.arg_prefix, index));
            index += 1;
        }
        out.push(c);
    }
    out.push_str(&format!(" {}{}", d.arg_prefix, index));
    out
}

/// Render one method: the mock-macro invocation line, preceded for mapped
/// operators by a forwarding virtual definition whose body delegates to the
/// renamed mock method. The forwarding body returns the call's result
/// unless the result type trims to exactly `void`.
pub fn render_method(d: &MethodDescriptor) -> String {
    let mut out = String::new();
    let mut name = d.name.as_str();

    if let Some(mock_name) = operator_mock_name(&d.name) {
        let ret = if d.result_type.trim() != "void" {
            "return"
        } else {
            ""
        };
        out.push_str(GAP);
        out.push_str(&format!(
            "virtual {} {}({}) {}{{ {} {}({}); }}\n",
            d.result_type,
            d.name,
            named_args_with_types(d),
            if d.is_const { "const " } else { "" },
            ret,
            mock_name,
            named_args(d),
        ));
        name = mock_name;
    }

    out.push_str(GAP);
    out.push_str(&format!(
        "MOCK_{}METHOD{}{}({}, {}({}));",
        if d.is_const { "CONST_" } else { "" },
        d.arity,
        if d.is_template { "_T" } else { "" },
        name,
        d.result_type,
        d.args,
    ));
    out
}

/// Descriptors for every mockable method of an interface, in collection
/// order. Signatures repeated across a multiple-inheritance diamond are
/// dropped after their first occurrence so the generated class compiles.
pub fn descriptors(iface: &Interface, index: &HeaderIndex) -> Vec<MethodDescriptor> {
    let is_template = iface.is_template();
    let mut seen = HashSet::new();
    iface
        .all_pure_virtual_methods(index)
        .iter()
        .filter(|m| seen.insert((m.display_name.clone(), m.is_const)))
        .map(|m| build_descriptor(m, is_template))
        .collect()
}

/// The full method block of a mock class, one rendered method per line.
pub fn render_mock_methods(descriptors: &[MethodDescriptor]) -> String {
    descriptors
        .iter()
        .map(render_method)
        .collect::<Vec<_>>()
        .join("\n")
}
