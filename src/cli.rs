//! Command-line flags and logging setup shared by the binaries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::types::{Difficulty, ModeKind, Settings};

/// Default log directive when `RUST_LOG` does not set one
const LOG_DIRECTIVES: [&str; 3] = [
    "tetris_hint=debug",
    "tetris_hint_engine=debug",
    "autoplay=info",
];

#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Game mode: classic, versus or hinted (1, 2, 3)
    #[arg(short, long, default_value = "classic", value_parser = parse_mode)]
    pub mode: ModeKind,

    /// Difficulty: easy, medium or hard (e, m, h)
    #[arg(short, long, default_value = "medium", value_parser = parse_difficulty)]
    pub difficulty: Difficulty,

    /// Seed for the piece sequence
    #[arg(short, long, default_value_t = 1)]
    pub seed: u32,

    /// Let the move search play the main board
    #[arg(short, long)]
    pub autopilot: bool,
}

impl GameArgs {
    pub fn settings(&self) -> Settings {
        Settings {
            mode: self.mode,
            difficulty: self.difficulty,
            autopilot: self.autopilot,
            seed: self.seed,
        }
    }
}

fn parse_mode(s: &str) -> Result<ModeKind, String> {
    ModeKind::from_str(s).ok_or_else(|| format!("unknown mode '{s}'"))
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}'"))
}

fn env_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_default_env();
    for directive in LOG_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}

/// Where the TUI writes its log file
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("tetris-hint.log")
}

/// Log to a file so output never lands on the game screen.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_file_logging() -> Result<WorkerGuard> {
    let path = log_path();
    let dir = path.parent().context("log path has no parent")?;
    let file = path.file_name().context("log path has no file name")?;

    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(env_filter()?)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(guard)
}

/// Log to stderr, for headless runs.
pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter()?)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        game: GameArgs,
    }

    #[test]
    fn defaults_match_settings_default() {
        let cli = Cli::try_parse_from(["test"]).unwrap();
        assert_eq!(cli.game.settings(), Settings::default());
    }

    #[test]
    fn short_forms_parse() {
        let cli = Cli::try_parse_from(["test", "-m", "3", "-d", "h", "-s", "9", "-a"]).unwrap();
        let settings = cli.game.settings();
        assert_eq!(settings.mode, ModeKind::Hinted);
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.seed, 9);
        assert!(settings.autopilot);
    }

    #[test]
    fn default_directives_cover_every_logging_target() {
        for directive in LOG_DIRECTIVES {
            assert!(directive.parse::<tracing_subscriber::filter::Directive>().is_ok());
        }
        for target in ["tetris_hint", "tetris_hint_engine", "autoplay"] {
            let prefix = format!("{target}=");
            assert!(LOG_DIRECTIVES.iter().any(|d| d.starts_with(&prefix)), "{target}");
        }
        assert!(env_filter().is_ok());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["test", "--mode", "arcade"]).is_err());
    }
}
