use anyhow::Result;
use cpp_mockgen::cli::Cli;
use cpp_mockgen::config::Config;
use cpp_mockgen::generator::GenerationContext;
use cpp_mockgen::pipeline::Pipeline;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse_args();

    if let Some(lib) = &cli.provider_lib {
        log::warn!(
            "--provider-lib {} has no effect: the C++ grammar is statically linked",
            lib.display()
        );
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default_config(),
    };

    let pipeline = Pipeline::new(
        config,
        cli.dir.clone(),
        cli.expr.clone(),
        cli.include_dirs(),
        GenerationContext::now(),
        cli.verbose,
    );
    pipeline.run(&cli.files)
}
