//! Per-file generation driver: parse, gate on diagnostics, collect,
//! filter, render, write. Files are processed strictly one after another;
//! the first hard failure stops the batch, leaving earlier output on disk.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::generator::{GenerationContext, MockGenerator};
use crate::parser::collector::collect_classes;
use crate::parser::cpp::{diagnostics, CppParser};
use crate::resolver::{load_units, HeaderIndex};

pub struct Pipeline {
    config: Config,
    out_dir: PathBuf,
    expr_filter: String,
    include_dirs: Vec<PathBuf>,
    ctx: GenerationContext,
    verbose: bool,
}

impl Pipeline {
    pub fn new(
        config: Config,
        out_dir: PathBuf,
        expr_filter: String,
        include_dirs: Vec<PathBuf>,
        ctx: GenerationContext,
        verbose: bool,
    ) -> Self {
        Pipeline {
            config,
            out_dir,
            expr_filter,
            include_dirs,
            ctx,
            verbose,
        }
    }

    /// Process every input file in order.
    pub fn run(&self, files: &[PathBuf]) -> Result<()> {
        let mut parser = CppParser::new()?;
        for file in files {
            if !file.exists() {
                bail!("{} does not exist", file.display());
            }
            self.process_file(&mut parser, file)?;
        }
        Ok(())
    }

    fn process_file(&self, parser: &mut CppParser, file: &Path) -> Result<()> {
        let target = file
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", file.display()))?;
        if self.verbose {
            println!("Analyzing {}", target.display());
        }

        let units = load_units(parser, &target, &self.include_dirs)?;

        let mut failed = false;
        for unit in &units {
            for diagnostic in diagnostics(unit) {
                eprintln!("{}", diagnostic);
                failed = true;
            }
        }
        if failed {
            bail!("parse errors while analyzing {}", target.display());
        }

        // every reachable class feeds base resolution; only classes
        // declared in the target file are candidates for emission
        let mut index = HeaderIndex::new();
        let mut candidates = Vec::new();
        for unit in &units {
            for class in collect_classes(unit) {
                if unit.path == target {
                    candidates.push(class.clone());
                }
                index.insert(class);
            }
        }
        if self.verbose {
            println!(
                "Indexed {} classes across {} headers",
                index.len(),
                units.len()
            );
        }

        let generator = MockGenerator::new(&self.config, self.out_dir.clone(), self.ctx.clone());
        for class in &candidates {
            let expr = class.expr();
            if !self.expr_filter.is_empty() && !expr.starts_with(&self.expr_filter) {
                if self.verbose {
                    println!("Skipping '{}' (filtered by --expr)", expr);
                }
                continue;
            }
            let display_names = class.method_display_names(&index);
            if display_names.is_empty() {
                if self.verbose {
                    println!("Skipping '{}' (no pure virtual methods)", expr);
                }
                continue;
            }
            println!(
                "Found class '{}' with pure virtual methods: [{}]",
                expr,
                display_names.join("; ")
            );
            generator.generate(class, &index)?;
        }
        Ok(())
    }
}
