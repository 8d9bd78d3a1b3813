use std::env;

use crate::clock::ClockTime;
use crate::dataset::Book;

/// Display-schedule configuration for the daily shuffle: each board gets its
/// own base kickoff, entries then run at a fixed minute spacing.
#[derive(Debug, Clone, Copy)]
pub struct ShuffleConfig {
    pub base_mozzartedge: ClockTime,
    pub base_betika: ClockTime,
    pub base_odibet: ClockTime,
    pub increment_minutes: u32,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            base_mozzartedge: ClockTime::from_minutes(19 * 60 + 15),
            base_betika: ClockTime::from_minutes(20 * 60),
            base_odibet: ClockTime::from_minutes(20 * 60 + 40),
            increment_minutes: 5,
        }
    }
}

impl ShuffleConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_mozzartedge: parse_time_env_or_default(
                "PREDICTIONS_BASE_TIME_MOZZARTEDGE",
                defaults.base_mozzartedge,
            ),
            base_betika: parse_time_env_or_default(
                "PREDICTIONS_BASE_TIME_BETIKA",
                defaults.base_betika,
            ),
            base_odibet: parse_time_env_or_default(
                "PREDICTIONS_BASE_TIME_ODIBET",
                defaults.base_odibet,
            ),
            increment_minutes: env::var("PREDICTIONS_TIME_INCREMENT_MINS")
                .ok()
                .and_then(|val| val.parse::<u32>().ok())
                .filter(|mins| *mins > 0)
                .unwrap_or(defaults.increment_minutes),
        }
    }

    pub fn base_time(&self, book: Book) -> ClockTime {
        match book {
            Book::Mozzartedge => self.base_mozzartedge,
            Book::Betika => self.base_betika,
            Book::Odibet => self.base_odibet,
        }
    }
}

fn parse_time_env_or_default(key: &str, default: ClockTime) -> ClockTime {
    env::var(key)
        .ok()
        .and_then(|val| ClockTime::parse(&val).ok())
        .unwrap_or(default)
}
