use std::process::ExitCode;

use clap::Parser;
use gd_app::AppPaths;
use gifdock_lib::bootstrap::resolve_config;
use gifdock_lib::bootstrap::tracing::init_tracing_subscriber;
use gifdock_lib::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = resolve_config(cli.load_config()?);
    cli.apply_overrides(&mut config);

    let paths = AppPaths::from_data_dir(&config.data_dir);
    if let Err(err) = init_tracing_subscriber(&paths.logs_dir) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let output = cli::execute(cli.command, &config).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
