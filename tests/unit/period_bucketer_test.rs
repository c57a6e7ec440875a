// Window sequences drive every report: each endpoint renders exactly one
// entry per bucket the sequence names, so ordering and cardinality here
// are load-bearing.

use chrono::NaiveDate;
use parkdash::core::{bucket_sequence, window_start, Granularity};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_seven_day_window_is_gap_free() {
    let buckets = bucket_sequence(Granularity::Day, 7, date(2025, 3, 10));

    assert_eq!(buckets.len(), 7);
    for (i, pair) in buckets.windows(2).enumerate() {
        assert_eq!(
            pair[1] - pair[0],
            chrono::Duration::days(1),
            "gap between bucket {} and {}",
            i,
            i + 1
        );
    }
    assert_eq!(*buckets.last().unwrap(), date(2025, 3, 10));
}

#[test]
fn test_day_window_crosses_year_boundary() {
    let buckets = bucket_sequence(Granularity::Day, 7, date(2025, 1, 2));
    assert_eq!(buckets[0], date(2024, 12, 27));
    assert_eq!(buckets[6], date(2025, 1, 2));
}

#[test]
fn test_day_window_over_leap_february() {
    let buckets = bucket_sequence(Granularity::Day, 7, date(2024, 3, 3));
    assert!(buckets.contains(&date(2024, 2, 29)));
    assert_eq!(buckets[0], date(2024, 2, 26));
}

#[test]
fn test_month_window_crosses_year_boundary() {
    // Reference in February: window reaches back into the prior year
    let buckets = bucket_sequence(Granularity::Month, 6, date(2025, 2, 14));
    assert_eq!(
        buckets,
        vec![
            date(2024, 9, 1),
            date(2024, 10, 1),
            date(2024, 11, 1),
            date(2024, 12, 1),
            date(2025, 1, 1),
            date(2025, 2, 1),
        ]
    );
}

#[test]
fn test_year_window_keys_on_january_first() {
    let buckets = bucket_sequence(Granularity::Year, 6, date(2025, 11, 30));
    assert_eq!(buckets.len(), 6);
    assert_eq!(buckets[0], date(2020, 1, 1));
    assert_eq!(buckets[5], date(2025, 1, 1));
    for bucket in &buckets {
        assert_eq!(Granularity::Year.truncate(*bucket), *bucket);
    }
}

#[test]
fn test_window_start_is_lower_query_bound() {
    let reference = date(2025, 3, 10);
    assert_eq!(
        window_start(Granularity::Day, 7, reference),
        date(2025, 3, 4)
    );
    assert_eq!(
        window_start(Granularity::Month, 6, reference),
        date(2024, 10, 1)
    );
}

#[test]
fn test_any_reference_inside_bucket_yields_same_sequence() {
    // Every date in March maps to the same month window
    let first = bucket_sequence(Granularity::Month, 6, date(2025, 3, 1));
    let last = bucket_sequence(Granularity::Month, 6, date(2025, 3, 31));
    assert_eq!(first, last);
}

proptest! {
    #[test]
    fn test_sequence_cardinality_and_order(
        year in 2000i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        window in 1usize..=24,
    ) {
        let reference = date(year, month, day);
        for granularity in [Granularity::Day, Granularity::Month, Granularity::Year] {
            let buckets = bucket_sequence(granularity, window, reference);

            prop_assert_eq!(buckets.len(), window);
            for pair in buckets.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            // Last bucket contains the reference date
            prop_assert_eq!(*buckets.last().unwrap(), granularity.truncate(reference));
        }
    }

    #[test]
    fn test_truncate_is_idempotent(
        year in 2000i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let d = date(year, month, day);
        for granularity in [Granularity::Day, Granularity::Month, Granularity::Year] {
            let once = granularity.truncate(d);
            prop_assert_eq!(granularity.truncate(once), once);
        }
    }
}
