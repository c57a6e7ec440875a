// End-to-end checks on the pure aggregation engine: keyed join of the
// three fact sources, gap-filling over the authoritative period
// sequence, and the revenue formula.

use chrono::NaiveDate;
use parkdash::core::{bucket_sequence, Granularity};
use parkdash::modules::income::models::{ManualGroup, MemberGroup, ParkingGroup};
use parkdash::modules::locations::models::Location;
use parkdash::modules::revenue::services::aggregate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn two_locations() -> Vec<Location> {
    vec![
        Location::new(1, "Operator A", "Site A", "Jl. Sudirman 10"),
        Location::new(2, "Operator B", "Site B", "Jl. Thamrin 5"),
    ]
}

fn parking(location_id: i32, bucket: NaiveDate, cash: Decimal) -> ParkingGroup {
    ParkingGroup {
        location_id,
        bucket,
        cash,
        prepaid: Decimal::ZERO,
        casual: Decimal::ZERO,
        pass: Decimal::ZERO,
    }
}

#[test]
fn test_full_formula_over_all_three_sources() {
    // cash 1000 + prepaid 500 + manual 100 + member 250 - problem 75 = 1775
    let day = date(2025, 3, 10);
    let periods = vec![day];

    let parking = vec![ParkingGroup {
        location_id: 1,
        bucket: day,
        cash: dec!(1000),
        prepaid: dec!(500),
        casual: dec!(40),
        pass: dec!(10),
    }];
    let member = vec![MemberGroup {
        location_id: 1,
        bucket: day,
        member: dec!(250),
    }];
    let manual = vec![ManualGroup {
        location_id: 1,
        bucket: day,
        manual: dec!(100),
        problem: dec!(75),
    }];

    let report = aggregate(
        &two_locations(),
        &periods,
        Granularity::Day,
        parking,
        member,
        manual,
    );

    let bucket = &report.series[0].buckets[0];
    assert_eq!(bucket.total_revenue(), dec!(1775));
    assert_eq!(bucket.total_qty(), dec!(50));
}

#[test]
fn test_seven_day_report_is_fully_gap_filled() {
    // One fact row in the middle of the window; every other cell zero
    let periods = bucket_sequence(Granularity::Day, 7, date(2025, 3, 10));
    let facts = vec![parking(2, date(2025, 3, 7), dec!(300))];

    let report = aggregate(
        &two_locations(),
        &periods,
        Granularity::Day,
        facts,
        vec![],
        vec![],
    );

    assert_eq!(report.series.len(), 2);
    for series in &report.series {
        assert_eq!(series.buckets.len(), 7);
        for (period, bucket) in periods.iter().zip(&series.buckets) {
            assert_eq!(bucket.period, *period);
        }
    }

    let total: Decimal = report
        .series
        .iter()
        .flat_map(|s| &s.buckets)
        .map(|b| b.total_revenue())
        .sum();
    assert_eq!(total, dec!(300));
}

#[test]
fn test_problem_subtracted_without_other_income() {
    // A problem entry on a day with no parking rows still reduces revenue
    let day = date(2025, 3, 10);
    let manual = vec![ManualGroup {
        location_id: 1,
        bucket: day,
        manual: dec!(0),
        problem: dec!(40),
    }];

    let report = aggregate(
        &two_locations(),
        &[day],
        Granularity::Day,
        vec![],
        vec![],
        manual,
    );

    assert_eq!(report.series[0].buckets[0].total_revenue(), dec!(-40));
}

#[test]
fn test_aggregation_is_idempotent() {
    let periods = bucket_sequence(Granularity::Month, 6, date(2025, 3, 15));
    let facts = || {
        vec![
            parking(1, date(2025, 1, 1), dec!(100)),
            parking(2, date(2025, 2, 1), dec!(200)),
        ]
    };

    let first = aggregate(
        &two_locations(),
        &periods,
        Granularity::Month,
        facts(),
        vec![],
        vec![],
    );
    let second = aggregate(
        &two_locations(),
        &periods,
        Granularity::Month,
        facts(),
        vec![],
        vec![],
    );

    assert_eq!(first, second);
}

#[test]
fn test_fact_rows_outside_period_sequence_are_ignored() {
    let periods = vec![date(2025, 3, 9), date(2025, 3, 10)];
    let facts = vec![
        parking(1, date(2025, 3, 10), dec!(100)),
        parking(1, date(2025, 3, 1), dec!(999)),
    ];

    let report = aggregate(
        &two_locations(),
        &periods,
        Granularity::Day,
        facts,
        vec![],
        vec![],
    );

    let total: Decimal = report.series[0]
        .buckets
        .iter()
        .map(|b| b.total_revenue())
        .sum();
    assert_eq!(total, dec!(100));
}

#[test]
fn test_series_follow_resolver_order_not_site_name() {
    let locations = vec![
        Location::new(9, "Operator Z", "Zeta", "Jl. Z 1"),
        Location::new(3, "Operator A", "Alpha", "Jl. A 1"),
    ];

    let report = aggregate(
        &locations,
        &[date(2025, 1, 1)],
        Granularity::Day,
        vec![],
        vec![],
        vec![],
    );

    assert_eq!(report.series[0].site, "Zeta");
    assert_eq!(report.series[1].site, "Alpha");
}
