use crate::dataset::{BookResults, ResultEntry};

/// Scoreboard for the previous day across all three books.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResultsSummary {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate_pct: f64,
    pub net_profit_ksh: i64,
}

pub fn summarize(results: &BookResults) -> ResultsSummary {
    let mut summary = ResultsSummary::default();
    for entry in results
        .mozzartedge
        .iter()
        .chain(&results.betika)
        .chain(&results.odibet)
    {
        tally(&mut summary, entry);
    }
    if summary.played > 0 {
        summary.win_rate_pct = summary.won as f64 * 100.0 / summary.played as f64;
    }
    summary
}

fn tally(summary: &mut ResultsSummary, entry: &ResultEntry) {
    summary.played += 1;
    match entry.status.as_str() {
        "won" => summary.won += 1,
        "lost" => summary.lost += 1,
        _ => {}
    }
    if let Some(profit) = parse_profit(&entry.profit) {
        summary.net_profit_ksh += profit;
    }
}

/// Parses a display profit like "+KSh 1,150" or "-KSh 1,000". Malformed
/// strings are ignored rather than counted as zero-profit picks.
pub fn parse_profit(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.as_bytes().first()? {
        b'+' => (1, &trimmed[1..]),
        b'-' => (-1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits: String = rest.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|amount| sign * amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profit_strings_parse_with_sign() {
        assert_eq!(parse_profit("+KSh 1,150"), Some(1150));
        assert_eq!(parse_profit("-KSh 1,000"), Some(-1000));
        assert_eq!(parse_profit("KSh 880"), Some(880));
        assert_eq!(parse_profit(""), None);
        assert_eq!(parse_profit("pending"), None);
    }
}
