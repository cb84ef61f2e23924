use std::path::PathBuf;

use super::MethodDecl;
use crate::resolver::HeaderIndex;

/// An abstract interface type discovered in a header.
#[derive(Debug, Clone)]
pub struct Interface {
    /// Name segments ordered outer-to-inner. The last segment is the type
    /// name itself, carrying template arguments when the class is a
    /// template (e.g. `["n", "T<Elem>"]`).
    pub segments: Vec<String>,
    /// File the definition appears in.
    pub file: PathBuf,
    /// Template parameter names, empty for non-template classes.
    pub template_params: Vec<String>,
    /// Base specifiers as written in the base clause, resolved on demand
    /// against the header index.
    pub bases: Vec<String>,
    /// Public pure virtual methods declared directly on this type.
    pub methods: Vec<MethodDecl>,
}

impl Interface {
    /// The type name segment, template arguments included.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// Enclosing namespaces/classes joined with `::`, empty at global scope.
    pub fn namespace(&self) -> String {
        self.segments[..self.segments.len().saturating_sub(1)].join("::")
    }

    /// The fully qualified expression, e.g. `n1::I2` or `n::T<Elem>`.
    pub fn expr(&self) -> String {
        self.segments.join("::")
    }

    pub fn is_template(&self) -> bool {
        !self.template_params.is_empty()
    }

    /// All pure virtual methods this interface must mock: its own methods
    /// first, then each base's methods transitively, in base-declaration
    /// order. Duplicate signatures are kept (a method re-declared pure
    /// virtual in both a base and a derived interface appears twice).
    pub fn all_pure_virtual_methods(&self, index: &HeaderIndex) -> Vec<MethodDecl> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        self.collect_methods(index, &mut path, &mut out);
        out
    }

    /// Display names of all collected methods, for progress reporting.
    pub fn method_display_names(&self, index: &HeaderIndex) -> Vec<String> {
        self.all_pure_virtual_methods(index)
            .into_iter()
            .map(|m| m.display_name)
            .collect()
    }

    fn collect_methods(
        &self,
        index: &HeaderIndex,
        path: &mut Vec<String>,
        out: &mut Vec<MethodDecl>,
    ) {
        let expr = self.expr();
        // Valid C++ inheritance graphs are acyclic; the guard only protects
        // against a malformed index aliasing a class as its own ancestor.
        if path.contains(&expr) {
            log::warn!("inheritance cycle through '{}', skipping", expr);
            return;
        }
        path.push(expr);
        out.extend(self.methods.iter().cloned());
        for base in &self.bases {
            match index.resolve(base, &self.segments) {
                Some(parent) => parent.collect_methods(index, path, out),
                None => log::warn!(
                    "base class '{}' of '{}' was not found in any parsed header",
                    base,
                    self.segments.join("::")
                ),
            }
        }
        path.pop();
    }
}
