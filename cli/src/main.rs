use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::*;

use command::Command;

mod command;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Sweep a square minefield from the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// TOML file with session settings, flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side length of the board
    #[arg(long)]
    size: Option<Coord>,

    #[arg(short, long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show where the mines are, for debugging
    #[arg(long)]
    highlight_mines: bool,
}

impl Args {
    fn session_config(&self) -> anyhow::Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("Could not read config {}", path.display()))?;
                SessionConfig::from_toml_str(&source)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => SessionConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.highlight_mines |= self.highlight_mines;
        Ok(config)
    }
}

const HELP: &str = "commands: <x> <y> to open a cell, r to restart, json for a snapshot, q to quit";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = args.session_config()?;
    log::debug!("config: {:?}", config);
    let mut session = Session::from_config(&config).context("Could not start a game")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", HELP)?;
    write!(stdout, "{}", render::render(&session.snapshot()))?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read input")?;
        let Some(command) = Command::parse(&line) else {
            writeln!(stdout, "{}", HELP)?;
            continue;
        };

        match command {
            Command::Select(x, y) => match session.select_cell(x, y) {
                Ok(RevealOutcome::AlreadyRevealed) => {
                    writeln!(stdout, "nothing to open at ({}, {})", x, y)?;
                    continue;
                }
                Ok(outcome) => log::info!("({}, {}): {:?}", x, y, outcome),
                Err(err) => {
                    writeln!(stdout, "{}", err)?;
                    continue;
                }
            },
            Command::Restart => session.restart(),
            Command::Json => {
                writeln!(stdout, "{}", session.snapshot().to_json()?)?;
                continue;
            }
            Command::Help => {
                writeln!(stdout, "{}", HELP)?;
                continue;
            }
            Command::Quit => break,
        }

        write!(stdout, "{}", render::render(&session.snapshot()))?;
        if let Some(mines) = session.remaining_mines() {
            write!(stdout, "{}", render::game_over(&mines))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "sweeper",
            "--size",
            "12",
            "--difficulty",
            "hard",
            "--seed",
            "7",
            "--highlight-mines",
        ]);

        let config = args.session_config().unwrap();

        assert_eq!(config.size, 12);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, Some(7));
        assert!(config.highlight_mines);
    }

    #[test]
    fn no_flags_means_default_config() {
        let args = Args::parse_from(["sweeper"]);
        assert_eq!(args.session_config().unwrap(), SessionConfig::default());
    }

    #[test]
    fn missing_config_file_is_reported() {
        let args = Args::parse_from(["sweeper", "--config", "/nonexistent/sweeper.toml"]);
        let err = args.session_config().unwrap_err();
        assert!(err.to_string().contains("Could not read config"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
