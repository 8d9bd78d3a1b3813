use anyhow::{Result, bail};
use chrono::NaiveDate;

use crate::clock::ClockTime;
use crate::config::ShuffleConfig;
use crate::dataset::{ALL_BOOKS, Book, Dataset, PredictionEntry};

// Park-Miller-style LCG constants; the modulus bounds every generator state
// to 0..233280 after the first step.
const LCG_MULTIPLIER: i64 = 9301;
const LCG_INCREMENT: i64 = 49297;
const LCG_MODULUS: i64 = 233_280;

/// Canonical date key for a calendar day: "Mon Jan 01 2024". Every seed is a
/// pure function of this string, so the format is load-bearing and must not
/// change.
pub fn date_key_for(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Derives the day's seed from a date key.
///
/// Rolling hash `hash = hash*31 + code` over the UTF-16 code units of the
/// key, with two's-complement 32-bit wrap-around, then magnitude. The result
/// is always non-negative; an i32::MIN hash keeps its clamped magnitude
/// rather than overflowing back to a negative value.
pub fn derive_seed(date_key: &str) -> Result<i32> {
    if date_key.trim().is_empty() {
        bail!("date key must be a non-empty string");
    }
    let mut hash: i32 = 0;
    for code in date_key.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(code));
    }
    Ok(seed_magnitude(hash))
}

/// Non-negative magnitude of a wrapped hash. i32::MIN has no positive
/// counterpart, so its magnitude clamps to i32::MAX instead of wrapping
/// back negative.
fn seed_magnitude(hash: i32) -> i32 {
    hash.unsigned_abs().min(i32::MAX as u32) as i32
}

/// Fisher-Yates reordering driven by an LCG reseeded from `seed`.
///
/// The input is never mutated; the output holds every input element exactly
/// once. Identical (items, seed) always produce the identical order.
pub fn permute<T: Clone>(items: &[T], seed: i32) -> Vec<T> {
    let mut out: Vec<T> = items.to_vec();
    let mut state = i64::from(seed);
    for i in (1..out.len()).rev() {
        state = (state * LCG_MULTIPLIER + LCG_INCREMENT).rem_euclid(LCG_MODULUS);
        // The quotient must stay an IEEE double: when state*(i+1) is an exact
        // multiple of the modulus the double rounds just below the integer
        // ratio and floors one lower (state 67392 at i=44 is the first such
        // case). Exact integer division would reorder those boards.
        let j = ((state as f64 / LCG_MODULUS as f64) * (i as f64 + 1.0)).floor() as usize;
        out.swap(i, j);
    }
    out
}

/// Rewrites each entry's kickoff from its position in the already-permuted
/// board: position i kicks off at `base + i * increment`. No other field is
/// touched.
pub fn recompute_kickoffs(
    entries: Vec<PredictionEntry>,
    base: ClockTime,
    increment_minutes: u32,
) -> Vec<PredictionEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| PredictionEntry {
            kickoff: base.add_minutes(idx as u32 * increment_minutes).to_string(),
            ..entry
        })
        .collect()
}

/// Produces the day's dataset: one seed per date key, each board permuted
/// independently from that same seed (the generator restarts per board, so
/// the boards never influence each other), then kickoffs rewritten from the
/// board's configured base time. Results and blog content pass through
/// untouched.
pub fn shuffle_dataset(dataset: &Dataset, date_key: &str, cfg: &ShuffleConfig) -> Result<Dataset> {
    let seed = derive_seed(date_key)?;
    let mut out = Dataset {
        mozzartedge: Vec::new(),
        betika: Vec::new(),
        odibet: Vec::new(),
        results: dataset.results.clone(),
        blog: dataset.blog.clone(),
    };
    for book in ALL_BOOKS {
        let shuffled = recompute_kickoffs(
            permute(dataset.board(book), seed),
            cfg.base_time(book),
            cfg.increment_minutes,
        );
        match book {
            Book::Mozzartedge => out.mozzartedge = shuffled,
            Book::Betika => out.betika = shuffled,
            Book::Odibet => out.odibet = shuffled,
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_matches_fixed_format() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(date_key_for(date), "Mon Jan 01 2024");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(derive_seed("").is_err());
        assert!(derive_seed("   ").is_err());
    }

    #[test]
    fn magnitude_of_min_hash_clamps_instead_of_wrapping() {
        assert_eq!(seed_magnitude(i32::MIN), i32::MAX);
        assert_eq!(seed_magnitude(i32::MAX), i32::MAX);
        assert_eq!(seed_magnitude(-188_045_470), 188_045_470);
        assert_eq!(seed_magnitude(0), 0);
    }

    #[test]
    fn single_element_is_untouched() {
        assert_eq!(permute(&[7], 12345), vec![7]);
        assert_eq!(permute::<u8>(&[], 12345), Vec::<u8>::new());
    }
}
