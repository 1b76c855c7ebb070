// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date expression parser tests.

use jiff::{ToSpan, civil::date};
use shiftboard_core::{
    ClockTime, DateExpression, ScheduleError, parse_date, parse_date_sequence, parse_end_time,
};

#[test]
fn single_date_yields_itself() {
    for s in ["2024-01-01", "2024-02-29", "2024-12-31"] {
        let seq = parse_date_sequence(s);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.first().map(|d| d.to_string()).as_deref(), Some(s));
    }
}

#[test]
fn range_length_is_day_span_plus_one() {
    let cases = [
        ("2024-12-01", "2024-12-01"),
        ("2024-12-01", "2024-12-31"),
        ("2024-02-01", "2024-03-01"),
        ("2023-12-25", "2024-01-05"),
    ];
    for (start, end) in cases {
        let seq = parse_date_sequence(&format!("{start}~{end}"));
        let start = parse_date(start).unwrap();
        let end = parse_date(end).unwrap();
        let days = start.until(end).unwrap().get_days();
        assert_eq!(seq.len(), days as usize + 1, "range = {start}~{end}");

        let consecutive = seq
            .as_slice()
            .windows(2)
            .all(|w| w[0].checked_add(1.day()).unwrap() == w[1]);
        assert!(consecutive, "range = {start}~{end}");
    }
}

#[test]
fn range_crossing_month_boundary() {
    let seq = parse_date_sequence("2024-11-29~2024-12-02");
    assert_eq!(
        seq.as_slice(),
        [
            date(2024, 11, 29),
            date(2024, 11, 30),
            date(2024, 12, 1),
            date(2024, 12, 2)
        ]
    );
}

#[test]
fn list_keeps_valid_dates_only() {
    let seq = parse_date_sequence("2024-11-28, 2024-11-30, not-a-date");
    assert_eq!(seq.as_slice(), [date(2024, 11, 28), date(2024, 11, 30)]);
}

#[test]
fn empty_input_yields_nothing() {
    assert!(parse_date_sequence("").is_empty());
    assert_eq!("".parse::<DateExpression>(), Err(ScheduleError::Empty));
}

#[test]
fn formatting_and_reparsing_is_idempotent() {
    for s in [
        "2024-12-15",
        "2024-12-01~2024-12-03",
        "2024-12-10, 2024-12-01, 2024-12-05",
        "2024-11-28, 2024-11-30, not-a-date",
        "",
    ] {
        let once = parse_date_sequence(s);
        let twice = parse_date_sequence(&once.to_string());
        assert_eq!(once, twice, "input = {s:?}");
    }
}

#[test]
fn malformed_ranges_are_not_salvaged() {
    assert!(parse_date_sequence("2024-12-01~2024-13-01").is_empty());
    assert!(parse_date_sequence("2024-12-05~2024-12-01").is_empty());
    assert!(matches!(
        "2024-12-05~2024-12-01".parse::<DateExpression>(),
        Err(ScheduleError::InvertedRange { .. })
    ));
}

#[test]
fn end_time_is_taken_from_time_range() {
    assert_eq!(parse_end_time("09:00 - 18:00"), Some(ClockTime::new(18, 0)));
    assert_eq!(parse_end_time("night shift"), None);
}
