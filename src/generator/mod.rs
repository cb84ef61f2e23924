//! Mock file synthesis — template substitution and output writing.

pub mod format;
pub mod render;

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Config;
use crate::models::Interface;
use crate::resolver::HeaderIndex;

/// Values fixed once per run and threaded through generation explicitly.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Milliseconds since the Unix epoch. Part of every include guard, so
    /// guards are unique within a run; pinning the value makes output
    /// byte-stable for tests.
    pub timestamp_ms: u64,
}

impl GenerationContext {
    pub fn now() -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        GenerationContext { timestamp_ms }
    }

    pub fn fixed(timestamp_ms: u64) -> Self {
        GenerationContext { timestamp_ms }
    }

    /// Include guard for one output file: the run timestamp in hex plus the
    /// sanitized file name, e.g. `__18F2B3C_MOCKI2_HPP`.
    pub fn guard(&self, file_name: &str) -> String {
        format!(
            "__{:X}_{}",
            self.timestamp_ms,
            file_name.replace('.', "_").to_uppercase()
        )
    }
}

/// Renders the configured header/source pair for discovered interfaces.
pub struct MockGenerator<'a> {
    config: &'a Config,
    out_dir: PathBuf,
    ctx: GenerationContext,
}

impl<'a> MockGenerator<'a> {
    pub fn new(config: &'a Config, out_dir: PathBuf, ctx: GenerationContext) -> Self {
        MockGenerator {
            config,
            out_dir,
            ctx,
        }
    }

    /// Generate the configured files for one interface. Interfaces that
    /// resolve to zero pure virtual methods produce no output. Returns the
    /// paths written.
    pub fn generate(&self, iface: &Interface, index: &HeaderIndex) -> Result<Vec<PathBuf>> {
        let descriptors = render::descriptors(iface, index);
        if descriptors.is_empty() {
            return Ok(Vec::new());
        }

        let expr = iface.expr();
        let interface = format::interface_name(&expr);
        let templates = &self.config.templates;

        let hpp_name = templates
            .mock_file_hpp
            .as_ref()
            .map(|pattern| pattern.replace("{interface}", &interface));
        let cpp_name = templates
            .mock_file_cpp
            .as_ref()
            .map(|pattern| pattern.replace("{interface}", &interface));

        let mock_methods = render::render_mock_methods(&descriptors);
        let template_interface = format::split_qualified(&expr)
            .pop()
            .unwrap_or_default();
        let source_dir = iface
            .file
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let source_file = iface
            .file
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut written = Vec::new();
        let jobs = [
            ("hpp", &templates.file_template_hpp, &hpp_name, "mock_file_hpp"),
            ("cpp", &templates.file_template_cpp, &cpp_name, "mock_file_cpp"),
        ];
        for (kind, body, file_name, pattern_field) in jobs {
            let body = match body {
                Some(b) if !b.is_empty() => b,
                _ => continue,
            };
            let Some(file_name) = file_name else {
                bail!(
                    "config has a {} body template but '{}' is not set",
                    kind,
                    pattern_field
                );
            };

            let substitutions = [
                ("interface", Some(interface.clone())),
                ("template_interface", Some(template_interface.clone())),
                ("template", Some(format::template_decl(&expr))),
                ("namespaces_begin", Some(format::namespaces_begin(&expr))),
                ("namespaces_end", Some(format::namespaces_end(&expr))),
                ("mock_methods", Some(mock_methods.clone())),
                ("guard", Some(self.ctx.guard(file_name))),
                ("dir", Some(source_dir.clone())),
                ("file", Some(source_file.clone())),
                ("generated_dir", Some(self.out_dir.display().to_string())),
                ("mock_file_hpp", hpp_name.clone()),
                ("mock_file_cpp", cpp_name.clone()),
            ];

            let mut content = body.clone();
            for (token, value) in &substitutions {
                let token = format!("{{{}}}", token);
                match value {
                    Some(value) => content = content.replace(&token, value),
                    // late binding: a template may reference a filename
                    // pattern that was never configured
                    None if body.contains(&token) => {
                        bail!("template references {} but that pattern is not configured", token)
                    }
                    None => {}
                }
            }

            written.push(self.write_file(file_name, &content)?);
        }
        Ok(written)
    }

    fn write_file(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.out_dir.join(file_name);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
        }
        println!("Generating {}", path.display());
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
