use std::error::Error;
use std::process::ExitCode;

mod app;
mod cli;
mod config;
mod display;
mod error;
mod metadata;
mod models;
mod offers;
mod plot;
mod streaming;

use app::App;
use cli::CliArgs;
use display::{render_json, render_text};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    // Parse CLI arguments
    let cli_args = CliArgs::parse_args();
    cli_args.validate()?;

    // Logs go to stderr so stdout only carries the result
    tracing_subscriber::fmt()
        .with_max_level(cli_args.tracing_level())
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::load_with_cli_args(&cli_args)?;
    let app = App::new_with_config(&config, cli_args.max_sentences, cli_args.show_progress())?;
    let query = cli_args.query();

    tokio::select! {
        result = app.lookup(&query, chrono::Utc::now()) => {
            let outcome = result.map_err(|e| {
                tracing::error!("Lookup failed: {}", e);
                e.user_message()
            })?;
            let rendered = if cli_args.json {
                render_json(&outcome)?
            } else {
                render_text(&outcome)
            };
            println!("{}", rendered);
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, abandoning lookup");
        }
    }

    Ok(())
}
