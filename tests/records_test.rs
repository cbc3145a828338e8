//! Integration tests for records persisted across sessions

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use codebreaker::core::{EngineConfig, EventLog, GameEngine, ManualScheduler, SimpleRng};
use codebreaker::records::STATS_FILE;
use codebreaker::store::stats::TOTAL_GAMES_KEY;
use codebreaker::store::{FileStore, KeyValueStore};
use codebreaker::types::Difficulty;
use codebreaker::Records;

fn temp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "codebreaker-records-{}-{}-{}",
        std::process::id(),
        nanos,
        name
    ))
}

/// Play one seeded game to the end and feed its events to `records`
fn play(records: &mut Records<FileStore>, seed: u32, win: bool) {
    let mut rng = SimpleRng::new(seed);
    rng.next_code();
    let secret = rng.next_code();

    let mut engine = GameEngine::new(
        EngineConfig {
            difficulty: Difficulty::Easy,
            seed: Some(seed),
            ..EngineConfig::default()
        },
        Box::new(ManualScheduler::new()),
    );
    let log = EventLog::new();
    engine.initialize(Box::new(log.clone()));

    if win {
        engine.make_guess(&secret.to_string()).unwrap();
    } else {
        let digit = (0..10u8).find(|d| !secret.digits().contains(d)).unwrap();
        let wrong = digit.to_string().repeat(4);
        while engine.make_guess(&wrong).is_ok() {}
    }

    for event in log.take() {
        records.observe(&event, 0);
    }
}

#[test]
fn test_records_survive_reopen() {
    let dir = temp_dir("reopen");

    {
        let mut records = Records::open(&dir, "ada");
        play(&mut records, 1, true);
        play(&mut records, 2, false);
        play(&mut records, 3, true);
    }

    let records = Records::open(&dir, "ada");
    let summary = records.summary();
    assert_eq!(summary.total_games, 3);
    assert_eq!(summary.total_wins, 2);
    assert_eq!(summary.best_score, 950);

    let top = records.top(None, 10);
    assert_eq!(top.len(), 2);
    assert!(top.iter().all(|e| e.player == "ada" && e.won));
    assert!(top.iter().all(|e| e.difficulty == Difficulty::Easy));

    // Counters are stored as plain base-10 strings
    let raw = FileStore::new(dir.join(STATS_FILE));
    assert_eq!(raw.get(TOTAL_GAMES_KEY).unwrap().as_deref(), Some("3"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_files_read_as_empty() {
    let dir = temp_dir("empty");
    let records = Records::open(&dir, "ada");
    assert_eq!(records.summary().total_games, 0);
    assert!(records.top(Some(Difficulty::Easy), 5).is_empty());
    assert!(!dir.exists());
}
