use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The three bookmaker boards carried by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Book {
    Mozzartedge,
    Betika,
    Odibet,
}

pub const ALL_BOOKS: [Book; 3] = [Book::Mozzartedge, Book::Betika, Book::Odibet];

impl Book {
    pub fn key(self) -> &'static str {
        match self {
            Book::Mozzartedge => "mozzartedge",
            Book::Betika => "betika",
            Book::Odibet => "odibet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Book::Mozzartedge => "Mozzartedge",
            Book::Betika => "Betika",
            Book::Odibet => "Odibet",
        }
    }
}

/// One listed prediction. Fields the shuffle engine never rewrites are kept
/// verbatim; anything the source JSON carries beyond the known columns lands
/// in `extra` and survives a load/shuffle/serialize cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionEntry {
    #[serde(rename = "match")]
    pub match_name: String,
    #[serde(default)]
    pub kickoff: String,
    #[serde(default)]
    pub prediction: String,
    #[serde(default)]
    pub odds: f64,
    #[serde(default)]
    pub confidence: u8,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_status() -> String {
    "upcoming".to_string()
}

/// A settled pick from the previous day's board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    #[serde(rename = "match")]
    pub match_name: String,
    #[serde(default)]
    pub prediction: String,
    #[serde(default)]
    pub odds: f64,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub profit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookResults {
    #[serde(default)]
    pub mozzartedge: Vec<ResultEntry>,
    #[serde(default)]
    pub betika: Vec<ResultEntry>,
    #[serde(default)]
    pub odibet: Vec<ResultEntry>,
}

impl BookResults {
    pub fn for_book(&self, book: Book) -> &[ResultEntry] {
        match book {
            Book::Mozzartedge => &self.mozzartedge,
            Book::Betika => &self.betika,
            Book::Odibet => &self.odibet,
        }
    }
}

/// The canonical dataset: three bookmaker boards plus pass-through content
/// the shuffle never touches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub mozzartedge: Vec<PredictionEntry>,
    #[serde(default)]
    pub betika: Vec<PredictionEntry>,
    #[serde(default)]
    pub odibet: Vec<PredictionEntry>,
    #[serde(default)]
    pub results: BookResults,
    // Editorial content, kept opaque: rendered elsewhere, never shuffled.
    #[serde(default)]
    pub blog: Vec<Value>,
}

impl Dataset {
    pub fn board(&self, book: Book) -> &[PredictionEntry] {
        match book {
            Book::Mozzartedge => &self.mozzartedge,
            Book::Betika => &self.betika,
            Book::Odibet => &self.odibet,
        }
    }
}

pub fn parse_dataset_json(raw: &str) -> Result<Dataset> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Dataset::default());
    }
    serde_json::from_str(trimmed).context("failed to parse predictions dataset")
}

/// Built-in board used when the dataset cannot be loaded. Kickoffs here are
/// placeholders; the daily shuffle rewrites them anyway.
pub fn fallback_dataset() -> Dataset {
    Dataset {
        mozzartedge: vec![
            fallback_entry("FC Torino vs London City", "7:15 PM", "Over 2.5", 2.15, 85),
            fallback_entry("Paris United vs Berlin FC", "7:20 PM", "GG", 1.85, 78),
            fallback_entry("Madrid Stars vs Rome Warriors", "7:25 PM", "1 & Over", 2.45, 72),
            fallback_entry("Amsterdam Lions vs Barcelona Kings", "7:30 PM", "Over 1.5", 1.65, 91),
            fallback_entry("Milan Giants vs Munich Eagles", "7:35 PM", "2 & Over", 2.75, 68),
        ],
        betika: vec![
            fallback_entry("Liverpool Legends vs Manchester United", "8:00 PM", "Over 2.5", 2.10, 82),
            fallback_entry("Arsenal Warriors vs Chelsea Kings", "8:05 PM", "GG", 1.95, 76),
            fallback_entry("Tottenham Stars vs Everton Lions", "8:10 PM", "1 & Over", 2.30, 79),
            fallback_entry("Leicester City vs Aston Villa", "8:15 PM", "Over 1.5", 1.75, 88),
            fallback_entry("West Ham vs Crystal Palace", "8:20 PM", "2 & Over", 2.60, 71),
        ],
        odibet: vec![
            fallback_entry("Real Madrid vs Barcelona", "8:40 PM", "Over 2.5", 2.25, 87),
            fallback_entry("Bayern Munich vs Borussia Dortmund", "8:45 PM", "GG", 1.80, 81),
            fallback_entry("PSG vs Marseille", "8:50 PM", "1 & Over", 2.35, 74),
            fallback_entry("Juventus vs Inter Milan", "8:55 PM", "Over 1.5", 1.70, 89),
            fallback_entry("Ajax vs PSV Eindhoven", "9:00 PM", "2 & Over", 2.80, 69),
        ],
        results: BookResults::default(),
        blog: Vec::new(),
    }
}

fn fallback_entry(
    match_name: &str,
    kickoff: &str,
    prediction: &str,
    odds: f64,
    confidence: u8,
) -> PredictionEntry {
    PredictionEntry {
        match_name: match_name.to_string(),
        kickoff: kickoff.to_string(),
        prediction: prediction.to_string(),
        odds,
        confidence,
        status: "upcoming".to_string(),
        extra: Map::new(),
    }
}
