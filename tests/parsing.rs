use std::fs;
use std::path::PathBuf;

use vleague_terminal::config::ShuffleConfig;
use vleague_terminal::dataset::{Book, parse_dataset_json};
use vleague_terminal::picks::top_picks;
use vleague_terminal::results::summarize;
use vleague_terminal::shuffle::shuffle_dataset;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_dataset_fixture() {
    let raw = read_fixture("data.json");
    let dataset = parse_dataset_json(&raw).expect("fixture should parse");
    assert_eq!(dataset.mozzartedge.len(), 5);
    assert_eq!(dataset.betika.len(), 2);
    assert!(dataset.odibet.is_empty());
    assert_eq!(dataset.blog.len(), 1);

    let first = &dataset.mozzartedge[0];
    assert_eq!(first.match_name, "FC Torino vs London City");
    assert_eq!(first.prediction, "Over 2.5");
    assert_eq!(first.confidence, 85);
    assert_eq!(first.status, "upcoming");
}

#[test]
fn unknown_entry_fields_are_preserved() {
    let raw = read_fixture("data.json");
    let dataset = parse_dataset_json(&raw).expect("fixture should parse");

    let first = &dataset.mozzartedge[0];
    assert_eq!(
        first.extra.get("league").and_then(|v| v.as_str()),
        Some("Virtual Serie A")
    );
    assert_eq!(first.extra.get("streak").and_then(|v| v.as_str()), Some("W3"));

    // A shuffle rewrites kickoffs only; extras must come out the other side.
    let shuffled = shuffle_dataset(&dataset, "Mon Jan 01 2024", &ShuffleConfig::default()).unwrap();
    let torino = shuffled
        .mozzartedge
        .iter()
        .find(|e| e.match_name == "FC Torino vs London City")
        .expect("entry should survive the shuffle");
    assert_eq!(
        torino.extra.get("league").and_then(|v| v.as_str()),
        Some("Virtual Serie A")
    );

    let reserialized = serde_json::to_value(torino).unwrap();
    assert_eq!(
        reserialized.get("streak").and_then(|v| v.as_str()),
        Some("W3")
    );
    assert_eq!(
        reserialized.get("match").and_then(|v| v.as_str()),
        Some("FC Torino vs London City")
    );
}

#[test]
fn missing_fields_take_defaults() {
    let dataset = parse_dataset_json(r#"{"betika": [{"match": "A vs B"}]}"#).unwrap();
    let entry = &dataset.betika[0];
    assert_eq!(entry.status, "upcoming");
    assert_eq!(entry.confidence, 0);
    assert!(entry.kickoff.is_empty());
    assert!(dataset.mozzartedge.is_empty());
}

#[test]
fn null_and_empty_payloads_parse_as_empty() {
    assert!(parse_dataset_json("null").unwrap().mozzartedge.is_empty());
    assert!(parse_dataset_json("   ").unwrap().betika.is_empty());
    assert!(parse_dataset_json("{not json").is_err());
}

#[test]
fn results_summary_counts_profit_and_rate() {
    let raw = read_fixture("data.json");
    let dataset = parse_dataset_json(&raw).unwrap();
    let summary = summarize(&dataset.results);
    assert_eq!(summary.played, 3);
    assert_eq!(summary.won, 2);
    assert_eq!(summary.lost, 1);
    assert_eq!(summary.net_profit_ksh, 1150 - 1000 + 880);
    assert!((summary.win_rate_pct - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn top_picks_span_books_and_respect_the_threshold() {
    let raw = read_fixture("data.json");
    let dataset = parse_dataset_json(&raw).unwrap();
    let picks = top_picks(&dataset, 80, 8);

    // 91, 85 from mozzartedge and 82 from betika clear the bar.
    let confidences: Vec<u8> = picks.iter().map(|p| p.entry.confidence).collect();
    assert_eq!(confidences, vec![91, 85, 82]);
    assert_eq!(picks[0].book, Book::Mozzartedge);
    assert_eq!(picks[2].book, Book::Betika);

    let limited = top_picks(&dataset, 50, 2);
    assert_eq!(limited.len(), 2);
}
