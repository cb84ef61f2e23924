//! Header index — include resolution and qualified-name lookup for base
//! classes declared outside the analyzed file.

use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::format::strip_template_args;
use crate::models::Interface;
use crate::parser::cpp::{node_text, CppParser, SourceUnit};

/// All class definitions reachable from an analyzed file, keyed by their
/// qualified name with template arguments stripped.
#[derive(Debug, Default)]
pub struct HeaderIndex {
    classes: HashMap<String, Interface>,
}

impl HeaderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, iface: Interface) {
        let key = strip_template_args(&iface.expr());
        // first definition wins; C++ would reject a genuine redefinition
        self.classes.entry(key).or_insert(iface);
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Resolve a base specifier as written (`I2`, `n1::I2`, `T<int>`) from
    /// the scope of the referencing class: the reference is tried qualified
    /// by each enclosing scope from innermost to global, the way C++ name
    /// lookup walks outward.
    pub fn resolve(&self, base: &str, from_segments: &[String]) -> Option<&Interface> {
        let base_key = strip_template_args(base).split_whitespace().collect::<String>();
        let enclosing: Vec<String> = from_segments[..from_segments.len().saturating_sub(1)]
            .iter()
            .map(|s| strip_template_args(s))
            .collect();
        for depth in (0..=enclosing.len()).rev() {
            let mut candidate = enclosing[..depth].join("::");
            if !candidate.is_empty() {
                candidate.push_str("::");
            }
            candidate.push_str(&base_key);
            if let Some(found) = self.classes.get(&candidate) {
                return Some(found);
            }
        }
        None
    }
}

/// One `#include` directive found in a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct IncludeRef {
    /// The written path, quotes/brackets removed.
    pub raw: String,
    /// Whether the directive used angle brackets.
    pub system: bool,
}

/// Parse the entry header and every reachable include into source units.
/// The entry unit comes first. Quoted includes are looked up relative to
/// the including file, then in the `-I` roots; angle includes only in the
/// roots. Unresolvable includes (system headers, typically) are skipped.
pub fn load_units(
    parser: &mut CppParser,
    entry: &Path,
    include_dirs: &[PathBuf],
) -> Result<Vec<SourceUnit>> {
    let mut units = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = vec![entry.to_path_buf()];

    while let Some(path) = queue.pop() {
        let canonical = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", path.display()))?;
        if !visited.insert(canonical.clone()) {
            continue;
        }
        let source = fs::read_to_string(&canonical)
            .with_context(|| format!("Failed to read {}", canonical.display()))?;
        let unit = parser.parse_unit(&canonical, source)?;

        let including_dir = canonical.parent().map(Path::to_path_buf).unwrap_or_default();
        for include in include_refs(&unit) {
            match resolve_include(&include, &including_dir, include_dirs) {
                Some(found) => queue.push(found),
                None => log::debug!(
                    "include '{}' of {} not found in any search root, skipping",
                    include.raw,
                    canonical.display()
                ),
            }
        }
        units.push(unit);
    }

    Ok(units)
}

/// All include directives in a unit, wherever they sit (include guards nest
/// them under preprocessor conditionals).
pub fn include_refs(unit: &SourceUnit) -> Vec<IncludeRef> {
    let mut refs = Vec::new();
    collect_includes(unit.tree.root_node(), unit, &mut refs);
    refs
}

fn collect_includes(node: tree_sitter::Node, unit: &SourceUnit, out: &mut Vec<IncludeRef>) {
    if node.kind() == "preproc_include" {
        if let Some(path) = node.child_by_field_name("path") {
            let text = node_text(path, &unit.source);
            let system = text.starts_with('<');
            let raw = text
                .trim_matches(|c| c == '"' || c == '<' || c == '>')
                .to_string();
            out.push(IncludeRef { raw, system });
        }
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_includes(child, unit, out);
    }
}

fn resolve_include(
    include: &IncludeRef,
    including_dir: &Path,
    include_dirs: &[PathBuf],
) -> Option<PathBuf> {
    if !include.system {
        let local = including_dir.join(&include.raw);
        if local.is_file() {
            return Some(local);
        }
    }
    for root in include_dirs {
        let candidate = root.join(&include.raw);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
