use std::fmt;

use anyhow::{Context, Result, bail};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Wall-clock time of day stored as minutes since midnight (0..=1439).
///
/// Kickoff arithmetic happens on this type; the 12-hour AM/PM string is
/// only a display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(u16);

impl ClockTime {
    pub fn from_minutes(minutes: u32) -> Self {
        Self((minutes % MINUTES_PER_DAY) as u16)
    }

    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// Parses a 12-hour clock string like "7:15 PM" or "12:00 am".
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let (time, period) = trimmed
            .split_once(' ')
            .with_context(|| format!("missing AM/PM in time '{trimmed}'"))?;
        let (hours_raw, minutes_raw) = time
            .split_once(':')
            .with_context(|| format!("missing ':' in time '{trimmed}'"))?;
        let hours: u32 = hours_raw
            .parse()
            .with_context(|| format!("bad hour in time '{trimmed}'"))?;
        let minutes: u32 = minutes_raw
            .parse()
            .with_context(|| format!("bad minutes in time '{trimmed}'"))?;
        if !(1..=12).contains(&hours) || minutes >= 60 {
            bail!("time '{trimmed}' out of range");
        }

        // 12 AM is midnight, 12 PM is noon.
        let hours_24 = match period.trim() {
            p if p.eq_ignore_ascii_case("am") => {
                if hours == 12 { 0 } else { hours }
            }
            p if p.eq_ignore_ascii_case("pm") => {
                if hours == 12 { 12 } else { hours + 12 }
            }
            other => bail!("unknown period '{other}' in time '{trimmed}'"),
        };
        Ok(Self((hours_24 * 60 + minutes) as u16))
    }

    /// Adds minutes, wrapping past midnight.
    pub fn add_minutes(self, minutes: u32) -> Self {
        Self::from_minutes(self.minutes() + minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.minutes();
        let hours_24 = total / 60;
        let mins = total % 60;
        let period = if hours_24 >= 12 { "PM" } else { "AM" };
        let hours = match hours_24 {
            0 => 12,
            1..=12 => hours_24,
            _ => hours_24 - 12,
        };
        write!(f, "{hours}:{mins:02} {period}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_and_midnight_display() {
        assert_eq!(ClockTime::from_minutes(0).to_string(), "12:00 AM");
        assert_eq!(ClockTime::from_minutes(720).to_string(), "12:00 PM");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(ClockTime::parse("7:15").is_err());
        assert!(ClockTime::parse("25:00 PM").is_err());
        assert!(ClockTime::parse("7:61 AM").is_err());
        assert!(ClockTime::parse("seven PM").is_err());
    }
}
