//! # Play Command
//!
//! Interactive heads-up games: the user holds seat 0 and types actions on
//! stdin, the configured AI holds seat 1.
//!
//! The driver loop is the engine's intended client:
//!
//! 1. game over: reveal both hands, print the result, log it
//! 2. betting round complete: `progress_game`
//! 3. human to act: prompt, parse, apply (or auto-call when the turn deadline
//!    passed while waiting for input)
//! 4. AI to act: `ai_action`, which waits out the think time first
//!
//! Game `n` (zero-based) is dealt from `seed + n`, so a seed replays a whole
//! session.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_history, format_table};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use chrono::Utc;
use duelpoker_ai::{AIOpponent, ai_action, create_ai};
use duelpoker_engine::betting::{
    handle_timeout, is_turn_expired, player_call, player_fold, player_raise,
};
use duelpoker_engine::engine::{initialize_game, progress_game};
use duelpoker_engine::errors::GameError;
use duelpoker_engine::game::{GameState, TableConfig};
use duelpoker_engine::logger::{HandLogger, HandRecord};
use duelpoker_engine::player::{HUMAN, PlayerAction};
use duelpoker_engine::rules::{can_player_raise, validate_raise};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

const PROMPT: &str = "Your action (call/check, raise <total>, fold, q): ";

/// Options taken from the `play` subcommand line.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub games: u32,
    pub seed: Option<u64>,
    pub log: Option<PathBuf>,
    pub think_ms: Option<u64>,
}

enum GameOutcome {
    Finished(Box<GameState>),
    Quit,
}

/// Handle the play command.
///
/// Command-line `--seed` and `--think-ms` win over the configuration. Typing
/// `q` ends the session normally after printing the summary.
///
/// # Errors
///
/// * `CliError::InvalidInput` if `games` is zero
/// * `CliError::Config` for a bad configuration or unknown AI type
/// * `CliError::Interrupted` if stdin closes mid-game
/// * `CliError::Io` for terminal or hand-log I/O failures
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if opts.games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let cfg = config::load_with_sources()?.config;
    let table = cfg.table();
    let ai = create_ai(&cfg.ai)?;
    let think_time = Duration::from_millis(opts.think_ms.unwrap_or(cfg.think_ms));
    let base_seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut logger = opts.log.as_ref().map(HandLogger::create).transpose()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    writeln!(
        out,
        "play: games={} seed={} ai={}",
        opts.games,
        base_seed,
        ai.name()
    )?;

    let mut played = 0u32;
    let mut wins = [0u32; 2];
    for n in 0..opts.games {
        let seed = base_seed.wrapping_add(u64::from(n));
        writeln!(out, "\nGame {} (seed {})", n + 1, seed)?;

        let outcome = runtime.block_on(play_game(
            &table,
            seed,
            ai.as_ref(),
            think_time,
            out,
            err,
            stdin,
        ))?;
        let state = match outcome {
            GameOutcome::Finished(state) => state,
            GameOutcome::Quit => {
                writeln!(out, "Quit requested.")?;
                break;
            }
        };

        played += 1;
        if let Some(winner) = &state.winning_hand {
            wins[winner.player_id] += 1;
        }
        if let Some(logger) = logger.as_mut() {
            let hand_id = logger.next_id();
            logger.write(&HandRecord::from_state(hand_id, Some(seed), &state))?;
        }
    }

    writeln!(
        out,
        "\nSummary: played {} | Player won {} | AI won {}",
        played, wins[0], wins[1]
    )?;
    Ok(())
}

async fn play_game(
    table: &TableConfig,
    seed: u64,
    ai: &dyn AIOpponent,
    think_time: Duration,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<GameOutcome, CliError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut state = initialize_game(table, &mut rng)?;
    writeln!(out, "{}", state.last_action)?;

    loop {
        if state.game_over {
            writeln!(out, "{}", format_table(&state, true))?;
            writeln!(out, "{}", format_history(&state.history))?;
            writeln!(out, "{}", state.last_action)?;
            tracing::info!(seed, result = %state.last_action, "game finished");
            return Ok(GameOutcome::Finished(Box::new(state)));
        }

        if state.betting_round_complete {
            state = progress_game(&state)?;
            if !state.game_over {
                writeln!(out, "{}", state.last_action)?;
                writeln!(out, "Board: {}", format_board(&state.community_cards))?;
            }
            continue;
        }

        if state.current_player == HUMAN {
            writeln!(out, "{}", format_table(&state, false))?;
            match human_turn(&state, out, err, stdin)? {
                Some(next) => state = next,
                None => return Ok(GameOutcome::Quit),
            }
        } else {
            state = ai_action(&state, ai, &mut rng, think_time).await;
            writeln!(out, "{}", state.last_action)?;
        }
    }
}

/// Read and apply one human action. `Ok(None)` means the user quit; an
/// unchanged state means the input was rejected and the prompt repeats.
fn human_turn(
    state: &GameState,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<GameState>, CliError> {
    ui::prompt(out, PROMPT)?;
    let Some(line) = read_stdin_line(stdin)? else {
        writeln!(out)?;
        return Err(CliError::Interrupted("input closed".to_string()));
    };

    if is_turn_expired(state, Utc::now()) {
        ui::display_warning(err, "turn time expired, input ignored")?;
        let next = handle_timeout(state);
        writeln!(out, "{}", next.last_action)?;
        return Ok(Some(next));
    }

    let action = match parse_player_action(&line) {
        ParseResult::Quit => return Ok(None),
        ParseResult::Invalid(msg) => {
            ui::write_error(err, &msg)?;
            return Ok(Some(state.clone()));
        }
        ParseResult::Action(action) => action,
    };

    let next = match action {
        PlayerAction::Fold => player_fold(state),
        PlayerAction::Call => player_call(state),
        PlayerAction::Raise(amount) => {
            if let Some(reason) = raise_rejection(state, amount) {
                ui::write_error(err, &reason.to_string())?;
                return Ok(Some(state.clone()));
            }
            player_raise(state, amount)
        }
    };
    writeln!(out, "{}", next.last_action)?;
    Ok(Some(next))
}

fn raise_rejection(state: &GameState, amount: u32) -> Option<GameError> {
    if !can_player_raise(state) {
        return Some(GameError::RaiseNotAllowed);
    }
    validate_raise(state, HUMAN, amount).err()
}
