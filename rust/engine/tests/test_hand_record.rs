use std::fs;

use duelpoker_engine::betting::{apply_action, player_call, player_fold};
use duelpoker_engine::engine::{initialize_game, progress_game};
use duelpoker_engine::game::{Stage, TableConfig};
use duelpoker_engine::logger::{format_hand_id, HandLogger, HandRecord};
use duelpoker_engine::player::{PlayerAction, AI};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn hand_ids_are_sequential() {
    let mut logger = HandLogger::detached("20250102");
    assert_eq!(logger.next_id(), "20250102-000001");
    assert_eq!(logger.next_id(), "20250102-000002");
    assert_eq!(format_hand_id("19700101", 42), "19700101-000042");
}

#[test]
fn record_captures_actions_board_and_result() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let s = initialize_game(&TableConfig::default(), &mut rng).unwrap();
    let s = player_call(&s);
    let s = apply_action(&s, AI, PlayerAction::Call).unwrap();
    let s = progress_game(&s).unwrap();
    let s = player_fold(&s);
    let s = progress_game(&s).unwrap();

    let rec = HandRecord::from_state("20250102-000001".into(), Some(5), &s);
    assert_eq!(rec.actions.len(), 3);
    assert_eq!(rec.actions[0].stage, Stage::Preflop);
    assert_eq!(rec.actions[2].stage, Stage::Flop);
    assert_eq!(rec.actions[2].action, PlayerAction::Fold);
    assert_eq!(rec.board.len(), 3);
    assert_eq!(rec.final_chips, vec![980, 1020]);
    let showdown = rec.showdown.as_ref().unwrap();
    assert_eq!(showdown.winner, AI);
    assert_eq!(showdown.rank, "Win by fold");
    assert_eq!(rec.result.as_deref(), Some("AI wins $40 (opponent folded)"));
}

#[test]
fn logger_writes_jsonl_with_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("hands.jsonl");

    let mut rng = ChaCha20Rng::seed_from_u64(6);
    let s = initialize_game(&TableConfig::default(), &mut rng).unwrap();
    let s = progress_game(&player_fold(&s)).unwrap();

    let mut logger = HandLogger::create(&path).unwrap();
    let id = logger.next_id();
    logger
        .write(&HandRecord::from_state(id.clone(), Some(6), &s))
        .unwrap();
    let second = logger.next_id();
    logger
        .write(&HandRecord::from_state(second, Some(6), &s))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    let back: HandRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(back.hand_id, id);
    assert!(back.ts.is_some());
    assert_eq!(back.hole_cards.len(), 2);
}
