use vleague_terminal::clock::ClockTime;
use vleague_terminal::dataset::fallback_dataset;
use vleague_terminal::shuffle::recompute_kickoffs;

#[test]
fn boundary_minutes_display_correctly() {
    assert_eq!(ClockTime::from_minutes(0).to_string(), "12:00 AM");
    assert_eq!(ClockTime::from_minutes(719).to_string(), "11:59 AM");
    assert_eq!(ClockTime::from_minutes(720).to_string(), "12:00 PM");
    assert_eq!(ClockTime::from_minutes(1439).to_string(), "11:59 PM");
}

#[test]
fn minutes_round_trip_across_the_full_day() {
    for minutes in 0..1440 {
        let time = ClockTime::from_minutes(minutes);
        let reparsed = ClockTime::parse(&time.to_string())
            .unwrap_or_else(|_| panic!("minute {minutes} should round-trip"));
        assert_eq!(reparsed.minutes(), minutes);
    }
}

#[test]
fn display_zero_pads_minutes() {
    assert_eq!(ClockTime::from_minutes(19 * 60 + 5).to_string(), "7:05 PM");
    assert_eq!(ClockTime::from_minutes(60).to_string(), "1:00 AM");
}

#[test]
fn parse_accepts_either_case_period() {
    assert_eq!(
        ClockTime::parse("7:15 pm").unwrap(),
        ClockTime::parse("7:15 PM").unwrap()
    );
    assert_eq!(ClockTime::parse("12:00 am").unwrap().minutes(), 0);
}

#[test]
fn add_minutes_wraps_past_midnight() {
    let late = ClockTime::parse("11:58 PM").unwrap();
    assert_eq!(late.add_minutes(5).to_string(), "12:03 AM");
}

#[test]
fn rewritten_kickoffs_are_non_decreasing() {
    let board = fallback_dataset().betika;
    let base = ClockTime::parse("8:00 PM").unwrap();
    let rewritten = recompute_kickoffs(board, base, 5);
    let minutes: Vec<u32> = rewritten
        .iter()
        .map(|entry| ClockTime::parse(&entry.kickoff).unwrap().minutes())
        .collect();
    assert!(minutes.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(minutes[0], base.minutes());
}
