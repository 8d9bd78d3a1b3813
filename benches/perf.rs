use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use vleague_terminal::config::ShuffleConfig;
use vleague_terminal::dataset::{Dataset, PredictionEntry, parse_dataset_json};
use vleague_terminal::shuffle::{derive_seed, permute, shuffle_dataset};

fn sample_entry(idx: usize) -> PredictionEntry {
    PredictionEntry {
        match_name: format!("Home {idx} vs Away {idx}"),
        kickoff: "7:15 PM".to_string(),
        prediction: "Over 2.5".to_string(),
        odds: 1.5 + (idx % 20) as f64 / 10.0,
        confidence: 50 + (idx % 50) as u8,
        status: "upcoming".to_string(),
        extra: serde_json::Map::new(),
    }
}

fn sample_dataset(per_board: usize) -> Dataset {
    let board: Vec<PredictionEntry> = (0..per_board).map(sample_entry).collect();
    Dataset {
        mozzartedge: board.clone(),
        betika: board.clone(),
        odibet: board,
        ..Dataset::default()
    }
}

fn bench_derive_seed(c: &mut Criterion) {
    c.bench_function("derive_seed", |b| {
        b.iter(|| {
            let seed = derive_seed(black_box("Mon Jan 01 2024")).unwrap();
            black_box(seed);
        })
    });
}

fn bench_permute(c: &mut Criterion) {
    let board: Vec<PredictionEntry> = (0..200).map(sample_entry).collect();
    c.bench_function("permute_200", |b| {
        b.iter(|| {
            let out = permute(black_box(&board), black_box(12345));
            black_box(out.len());
        })
    });
}

fn bench_shuffle_dataset(c: &mut Criterion) {
    let dataset = sample_dataset(50);
    let cfg = ShuffleConfig::default();
    c.bench_function("shuffle_dataset_3x50", |b| {
        b.iter(|| {
            let out = shuffle_dataset(black_box(&dataset), "Mon Jan 01 2024", &cfg).unwrap();
            black_box(out.mozzartedge.len());
        })
    });
}

fn bench_dataset_parse(c: &mut Criterion) {
    c.bench_function("dataset_parse", |b| {
        b.iter(|| {
            let dataset = parse_dataset_json(black_box(DATA_JSON)).unwrap();
            black_box(dataset.mozzartedge.len());
        })
    });
}

criterion_group!(
    perf,
    bench_derive_seed,
    bench_permute,
    bench_shuffle_dataset,
    bench_dataset_parse
);
criterion_main!(perf);

static DATA_JSON: &str = include_str!("../tests/fixtures/data.json");
