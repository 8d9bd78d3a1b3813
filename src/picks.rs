use std::cmp::Ordering;

use crate::dataset::{ALL_BOOKS, Book, Dataset, PredictionEntry};

pub const DEFAULT_MIN_CONFIDENCE: u8 = 80;
pub const DEFAULT_PICK_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct TopPick {
    pub book: Book,
    pub entry: PredictionEntry,
}

/// Highest-confidence entries across every board: confidence at or above the
/// threshold, sorted by confidence descending with odds as the tiebreaker,
/// truncated to `limit`.
pub fn top_picks(dataset: &Dataset, min_confidence: u8, limit: usize) -> Vec<TopPick> {
    let mut picks: Vec<TopPick> = ALL_BOOKS
        .into_iter()
        .flat_map(|book| {
            dataset
                .board(book)
                .iter()
                .filter(|entry| entry.confidence >= min_confidence)
                .map(move |entry| TopPick {
                    book,
                    entry: entry.clone(),
                })
        })
        .collect();
    picks.sort_by(|a, b| {
        b.entry
            .confidence
            .cmp(&a.entry.confidence)
            .then_with(|| {
                b.entry
                    .odds
                    .partial_cmp(&a.entry.odds)
                    .unwrap_or(Ordering::Equal)
            })
    });
    picks.truncate(limit);
    picks
}
