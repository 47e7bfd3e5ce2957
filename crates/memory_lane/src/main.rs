//! Memory Lane CLI binary.
//!
//! Browse albums, caption photos, run simulated uploads and generate stories
//! from the terminal.

use clap::Parser;
use memory_lane::{
    MemoryLaneConfig, MemoryLaneResult, ObservabilityConfig, init_observability,
    shutdown_observability,
};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::Cli;

    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = init_observability(
        ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    ) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let result = run(cli).await;
    shutdown_observability();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: cli::Cli) -> MemoryLaneResult<()> {
    use cli::Commands;

    let config = match &cli.config {
        Some(path) => MemoryLaneConfig::from_file(path)?,
        None => MemoryLaneConfig::load()?,
    };

    match cli.command {
        Commands::Albums => cli::list_albums(),
        Commands::Album { id } => cli::show_album(&id),
        Commands::Photo { id, album } => cli::show_photo(&id, album.as_deref()),
        Commands::Photos => cli::list_story_photos(),
        Commands::Caption { file } => cli::caption_file(&file, &config).await,
        Commands::Upload { files, caption } => cli::upload_files(&files, caption, &config).await,
        Commands::Story { theme, photos } => cli::create_story(&theme, &photos, &config).await,
    }
}
