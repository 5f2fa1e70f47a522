use clap::Parser;

use alchemy_tools::utils::{logger, validation::Validate};
use alchemy_tools::{Cli, FileConfig, LocalInput, ToolEngine};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting alchemy-tools CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(2);
    }

    let defaults = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config file: {}", e);
                eprintln!("error: {}", e);
                std::process::exit(2);
            }
        },
        None => FileConfig::default(),
    };

    let engine = ToolEngine::with_defaults(LocalInput, defaults);

    match engine.run(&cli.command) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Tool run failed: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
