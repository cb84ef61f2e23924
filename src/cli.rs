//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cpp-mockgen",
    about = "Generate Google Mock classes from C++ interface headers",
    version
)]
pub struct Cli {
    /// Header files to analyze
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// TOML config with filename patterns and templates (built-in defaults
    /// when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for generated mocks
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Only emit interfaces whose qualified name starts with this prefix
    #[arg(short, long, default_value = "")]
    pub expr: String,

    /// Path to a native parser library; accepted for compatibility, the
    /// bundled C++ grammar is statically linked
    #[arg(short = 'l', long)]
    pub provider_lib: Option<PathBuf>,

    /// Print discovery details
    #[arg(short, long)]
    pub verbose: bool,

    /// Raw compiler-style arguments (include paths, defines, standard
    /// flags), passed after `--`
    #[arg(last = true)]
    pub compiler_args: Vec<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Include search roots from `-I` entries in the raw compiler
    /// arguments. Everything else is accepted and ignored — there is no
    /// preprocessor behind the grammar.
    pub fn include_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        let mut args = self.compiler_args.iter();
        while let Some(arg) = args.next() {
            if arg == "-I" {
                if let Some(dir) = args.next() {
                    dirs.push(PathBuf::from(dir));
                }
            } else if let Some(dir) = arg.strip_prefix("-I") {
                dirs.push(PathBuf::from(dir));
            } else {
                log::debug!("ignoring compiler argument '{}'", arg);
            }
        }
        dirs
    }
}
