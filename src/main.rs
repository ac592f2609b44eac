use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use content_recommender::{
    cli::{self, Cli},
    config::Config,
    error::AppError,
    store::{ContentStore, JsonFileSource},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only the rendered view
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let database_path = cli.database.clone().unwrap_or(config.database_path);
    tracing::info!(path = %database_path.display(), "Loading content database");

    let source = JsonFileSource::new(database_path);
    let store = ContentStore::load(&source).context("Failed to load content")?;

    Ok(cli::execute(&cli, &store)?)
}
