use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::clock::ClockTime;
use crate::dataset::{Book, Dataset, PredictionEntry};
use crate::picks::{DEFAULT_MIN_CONFIDENCE, DEFAULT_PICK_LIMIT, TopPick, top_picks};
use crate::results::{ResultsSummary, summarize};

const MAX_LOG_LINES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Predictions,
    Results,
    TopPicks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Kickoff,
    Odds,
    Confidence,
}

/// Confidence bands mirror the listing's badge colors: high is 80+, medium
/// 60-79, low below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceFilter {
    All,
    High,
    Medium,
    Low,
}

impl ConfidenceFilter {
    pub fn matches(self, confidence: u8) -> bool {
        match self {
            ConfidenceFilter::All => true,
            ConfidenceFilter::High => confidence >= 80,
            ConfidenceFilter::Medium => (60..80).contains(&confidence),
            ConfidenceFilter::Low => confidence < 60,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub tab: Book,
    pub sort: SortMode,
    pub filter: ConfidenceFilter,
    pub selected: usize,
    pub date_key: String,
    pub dataset: Dataset,
    pub summary: ResultsSummary,
    pub picks: Vec<TopPick>,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl AppState {
    /// `dataset` is expected to already be the day's shuffled board.
    pub fn new(dataset: Dataset, date_key: String) -> Self {
        let summary = summarize(&dataset.results);
        let picks = top_picks(&dataset, DEFAULT_MIN_CONFIDENCE, DEFAULT_PICK_LIMIT);
        Self {
            screen: Screen::Predictions,
            tab: Book::Mozzartedge,
            sort: SortMode::Kickoff,
            filter: ConfidenceFilter::All,
            selected: 0,
            date_key,
            dataset,
            summary,
            picks,
            logs: VecDeque::with_capacity(MAX_LOG_LINES),
            help_overlay: false,
        }
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        if self.logs.len() >= MAX_LOG_LINES {
            self.logs.pop_front();
        }
        self.logs.push_back(line.into());
    }

    pub fn set_tab(&mut self, tab: Book) {
        if self.tab != tab {
            self.tab = tab;
            self.selected = 0;
        }
        self.screen = Screen::Predictions;
    }

    pub fn cycle_sort(&mut self) {
        self.sort = match self.sort {
            SortMode::Kickoff => SortMode::Odds,
            SortMode::Odds => SortMode::Confidence,
            SortMode::Confidence => SortMode::Kickoff,
        };
        self.selected = 0;
    }

    pub fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            ConfidenceFilter::All => ConfidenceFilter::High,
            ConfidenceFilter::High => ConfidenceFilter::Medium,
            ConfidenceFilter::Medium => ConfidenceFilter::Low,
            ConfidenceFilter::Low => ConfidenceFilter::All,
        };
        self.selected = 0;
    }

    /// The current tab's entries after filtering and sorting. The underlying
    /// dataset keeps its shuffled order; sorting is view-only.
    pub fn visible_entries(&self) -> Vec<&PredictionEntry> {
        let mut entries: Vec<&PredictionEntry> = self
            .dataset
            .board(self.tab)
            .iter()
            .filter(|entry| self.filter.matches(entry.confidence))
            .collect();
        match self.sort {
            SortMode::Kickoff => entries.sort_by_key(|entry| kickoff_minutes(entry)),
            SortMode::Odds => {
                entries.sort_by(|a, b| b.odds.partial_cmp(&a.odds).unwrap_or(Ordering::Equal));
            }
            SortMode::Confidence => {
                entries.sort_by(|a, b| b.confidence.cmp(&a.confidence));
            }
        }
        entries
    }

    pub fn selected_entry(&self) -> Option<&PredictionEntry> {
        self.visible_entries().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn visible_len(&self) -> usize {
        match self.screen {
            Screen::Predictions => self.visible_entries().len(),
            Screen::TopPicks => self.picks.len(),
            Screen::Results => 0,
        }
    }
}

fn kickoff_minutes(entry: &PredictionEntry) -> u32 {
    ClockTime::parse(&entry.kickoff)
        .map(ClockTime::minutes)
        .unwrap_or(u32::MAX)
}
