// The formatters only re-arrange engine output; these tests pin down the
// layout contracts: chronological keys, every location under every
// period, and summaries attached per location.

use chrono::NaiveDate;
use parkdash::core::{bucket_sequence, Granularity};
use parkdash::modules::income::models::{ManualGroup, ParkingGroup};
use parkdash::modules::locations::models::Location;
use parkdash::modules::revenue::services::{aggregate, shapes};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn locations() -> Vec<Location> {
    vec![
        Location::new(1, "Operator A", "Site A", "Jl. Sudirman 10"),
        Location::new(2, "Operator B", "Site B", "Jl. Thamrin 5"),
    ]
}

fn sample_report() -> parkdash::modules::revenue::models::AggregateReport {
    let periods = bucket_sequence(Granularity::Month, 6, date(2025, 3, 15));
    let parking = vec![
        ParkingGroup {
            location_id: 1,
            bucket: date(2025, 3, 1),
            cash: dec!(100),
            prepaid: dec!(50),
            casual: dec!(10),
            pass: dec!(2),
        },
        ParkingGroup {
            location_id: 2,
            bucket: date(2025, 1, 1),
            cash: dec!(70),
            prepaid: dec!(0),
            casual: dec!(7),
            pass: dec!(0),
        },
    ];
    let manual = vec![ManualGroup {
        location_id: 1,
        bucket: date(2025, 2, 1),
        manual: dec!(0),
        problem: dec!(25),
    }];

    aggregate(
        &locations(),
        &periods,
        Granularity::Month,
        parking,
        vec![],
        manual,
    )
}

#[test]
fn test_combined_sums_locations_per_period() {
    let report = sample_report();
    let points = shapes::combined(&report);

    assert_eq!(points.len(), 6);
    assert_eq!(points[0].period, "2024-10");
    assert_eq!(points[5].period, "2025-03");

    // January carries Site B's cash, March carries Site A's
    let january = points.iter().find(|p| p.period == "2025-01").unwrap();
    assert_eq!(january.total, dec!(70));
    let march = points.iter().find(|p| p.period == "2025-03").unwrap();
    assert_eq!(march.total, dec!(150));
}

#[test]
fn test_by_location_keys_on_site_and_keeps_window() {
    let report = sample_report();
    let by_site = shapes::by_location(&report);

    assert_eq!(by_site.len(), 2);
    for (site, points) in &by_site {
        assert!(site == "Site A" || site == "Site B");
        assert_eq!(points.len(), 6);
    }

    let site_a = &by_site["Site A"];
    let february = site_a.iter().find(|p| p.period == "2025-02").unwrap();
    assert_eq!(february.problem, dec!(25));
    assert_eq!(february.total, dec!(-25));
}

#[test]
fn test_by_period_lists_every_location_under_every_key() {
    let report = sample_report();
    let by_period = shapes::by_period(&report);

    assert_eq!(by_period.len(), 6);
    // BTreeMap keys are YYYY-MM labels, so iteration is chronological
    let keys: Vec<&String> = by_period.keys().collect();
    assert_eq!(keys.first().unwrap().as_str(), "2024-10");
    assert_eq!(keys.last().unwrap().as_str(), "2025-03");

    for totals in by_period.values() {
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].site, "Site A");
        assert_eq!(totals[1].site, "Site B");
    }
}

#[test]
fn test_problems_by_period_carries_problem_amounts() {
    let report = sample_report();
    let by_period = shapes::problems_by_period(&report);

    let february = &by_period["2025-02"];
    assert_eq!(february[0].total, dec!(25));
    assert_eq!(february[1].total, dec!(0));

    // Periods without problem rows are explicit zeros, not absent
    let october = &by_period["2024-10"];
    assert_eq!(october.len(), 2);
    assert!(october.iter().all(|t| t.total == Decimal::ZERO));
}

#[test]
fn test_details_attach_summary_per_location() {
    let report = sample_report();
    let details = shapes::details_by_location(&report);

    let site_a = &details["Site A"];
    assert_eq!(site_a.rows.len(), 6);
    assert_eq!(site_a.summary.cash.total, dec!(100));
    assert_eq!(site_a.summary.total_revenue.minimum, dec!(-25));
    assert_eq!(site_a.summary.total_qty.maximum, dec!(12));

    let march = site_a.rows.iter().find(|r| r.period == "2025-03").unwrap();
    assert_eq!(march.total_revenue, dec!(150));
    assert_eq!(march.casual_qty, dec!(10));
    assert_eq!(march.pass_qty, dec!(2));
    assert_eq!(march.total_qty, dec!(12));
}
