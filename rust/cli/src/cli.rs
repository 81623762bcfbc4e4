//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "duelpoker",
    version,
    about = "Heads-up Texas Hold'em against the house AI"
)]
pub struct DuelpokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play games against the AI, reading actions from stdin
    Play {
        /// Number of games to play
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        /// Seed for the first game; later games use seed+1, seed+2, ...
        #[arg(long)]
        seed: Option<u64>,
        /// Write one JSONL hand record per finished game to this file
        #[arg(long)]
        log: Option<PathBuf>,
        /// AI think time in milliseconds (overrides configuration)
        #[arg(long)]
        think_ms: Option<u64>,
    },
    /// Deal one game and print both hands
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
