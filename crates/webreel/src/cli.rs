use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use webreel_model::ExportMode;

#[derive(Parser)]
#[command(name = "webreel")]
#[command(version)]
#[command(about = "Record, correlate and export browser sessions")]
pub struct Cli {
    /// Data directory (defaults to ~/.webreel)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append captured event streams to the session logs
    Ingest {
        /// Network phase events, one JSON object per line
        #[arg(long)]
        network: Option<PathBuf>,

        /// Interaction entries, one JSON object per line
        #[arg(long)]
        interactions: Option<PathBuf>,

        /// Element snapshots, one JSON object per line
        #[arg(long)]
        snapshots: Option<PathBuf>,

        /// Tab the session belongs to
        #[arg(long)]
        tab_id: Option<i64>,
    },

    /// Append one element snapshot read from a JSON file
    Snapshot {
        /// Path to a snapshot JSON document
        file: PathBuf,
    },

    /// Export the session as JSON plus an interactive HTML timeline
    Export {
        /// What the export covers
        #[arg(long, value_enum, default_value_t = ModeArg::Logs)]
        mode: ModeArg,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Recorded video file to bundle instead of the stored blob
        #[arg(long)]
        video: Option<PathBuf>,
    },

    /// Show session counters as JSON
    Status,

    /// Delete all recorded session data
    Clear,

    /// Print version information
    Version,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ModeArg {
    Logs,
    Video,
}

impl From<ModeArg> for ExportMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Logs => ExportMode::Logs,
            ModeArg::Video => ExportMode::Video,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["webreel", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_ingest() {
        let cli = Cli::try_parse_from([
            "webreel",
            "ingest",
            "--network",
            "events.jsonl",
            "--tab-id",
            "7",
        ]);
        assert!(cli.is_ok());
        if let Commands::Ingest {
            network, tab_id, ..
        } = cli.unwrap().command
        {
            assert_eq!(network, Some(PathBuf::from("events.jsonl")));
            assert_eq!(tab_id, Some(7));
        } else {
            panic!("Expected Ingest command");
        }
    }

    #[test]
    fn test_cli_parse_export_defaults() {
        let cli = Cli::try_parse_from(["webreel", "export"]).unwrap();
        if let Commands::Export { mode, out, video } = cli.command {
            assert!(matches!(mode, ModeArg::Logs));
            assert_eq!(out, PathBuf::from("."));
            assert!(video.is_none());
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn test_cli_parse_export_video_mode() {
        let cli =
            Cli::try_parse_from(["webreel", "export", "--mode", "video", "--out", "dump"]).unwrap();
        if let Commands::Export { mode, out, .. } = cli.command {
            assert!(matches!(mode, ModeArg::Video));
            assert_eq!(out, PathBuf::from("dump"));
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn test_cli_parse_global_data_dir() {
        let cli = Cli::try_parse_from(["webreel", "status", "--data-dir", "/tmp/wr"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/wr")));
    }
}
