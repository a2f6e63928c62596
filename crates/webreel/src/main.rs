mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use webreel_session::Paths;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let paths = match cli.data_dir {
        Some(root) => Paths::with_root(root),
        None => Paths::new(),
    };

    match cli.command {
        Commands::Ingest {
            network,
            interactions,
            snapshots,
            tab_id,
        } => commands::ingest::run(
            &paths,
            network.as_deref(),
            interactions.as_deref(),
            snapshots.as_deref(),
            tab_id,
        ),
        Commands::Snapshot { file } => commands::snapshot::run(&paths, &file),
        Commands::Export { mode, out, video } => {
            commands::export::run(&paths, mode.into(), &out, video.as_deref())
        }
        Commands::Status => commands::status::run(&paths),
        Commands::Clear => commands::clear::run(&paths),
        Commands::Version => commands::version::run(),
    }
}
