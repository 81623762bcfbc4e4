//! # DuelPoker CLI Library
//!
//! Command-line front end for the heads-up engine: play against the AI,
//! inspect a deal, or show the resolved configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand, returning the
//! process exit code. [`run_with_input`] is the same with an injected stdin,
//! which is how the tests script whole games.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["duelpoker", "deal", "--seed", "42"];
//! let code = duelpoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play games against the AI (`--games`, `--seed`, `--log`, `--think-ms`)
//! - `deal`: Deal one game and print both hands
//! - `cfg`: Display the resolved configuration with value sources

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, DuelpokerCli};
use commands::{PlayOptions, handle_cfg_command, handle_deal_command, handle_play_command};

pub use error::CliError;

/// Main entry point for the CLI application, reading `play` input from the
/// process stdin.
///
/// Exit code: `0` for success, `2` for errors, `130` when input closes
/// mid-game.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// [`run`] with an explicit input stream for the `play` command.
///
/// ```
/// use std::io::Cursor;
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = duelpoker_cli::run_with_input(
///     ["duelpoker", "play", "--seed", "1", "--think-ms", "0"],
///     &mut out,
///     &mut err,
///     &mut Cursor::new("fold\n"),
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("AI wins $30"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DuelpokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return match write!(out, "{}", e) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(_) => exit_code::ERROR,
                };
            }
            let _ = write_usage(err, &e.to_string(), COMMANDS);
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            games,
            seed,
            log,
            think_ms,
        } => handle_play_command(
            PlayOptions {
                games,
                seed,
                log,
                think_ms,
            },
            out,
            err,
            stdin,
        ),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = writeln!(err, "Error: {}", e);
            e.exit_code()
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_error: &str, commands: &[&str]) -> std::io::Result<()> {
    writeln!(err, "{}", clap_error)?;
    writeln!(err)?;
    writeln!(err, "DuelPoker CLI")?;
    writeln!(err, "Usage: duelpoker <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: duelpoker --help")
}
