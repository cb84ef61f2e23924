use std::path::PathBuf;

/// A public pure virtual method declaration collected from a class body.
///
/// Lives only between extraction and descriptor construction; everything the
/// later stages need is copied out of the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    /// Unqualified name, e.g. `Push` or `operator==`.
    pub spelling: String,
    /// Name plus parenthesized parameter type list, e.g. `f(int, double)`.
    /// Parameter names never appear here.
    pub display_name: String,
    /// Raw lexical tokens of the declaration, in source order.
    pub tokens: Vec<String>,
    /// Whether the method is declared `const`.
    pub is_const: bool,
    /// Number of formal parameters.
    pub arity: usize,
    /// File the declaration appears in.
    pub file: PathBuf,
}

/// A reconstructed method signature, ready for rendering.
///
/// Immutable once constructed; see `parser::signature::build_descriptor`.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    /// Result type as written, stripped of `virtual`/`inline`/`volatile`.
    pub result_type: String,
    /// Method name, possibly an operator spelling like `operator==`.
    pub name: String,
    pub is_const: bool,
    /// Whether the owning interface is template-parameterized.
    pub is_template: bool,
    pub arity: usize,
    /// Parameter types joined by `, `, no parameter names.
    pub args: String,
    /// Prefix for synthesized parameter names (`arg0`, `arg1`, ...).
    pub arg_prefix: String,
}
