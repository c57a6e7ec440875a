use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::revenue::models::{AggregateReport, RevenueBucket, SummaryStats};

/// One chronological point of a trend report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub period: String,
    pub cash: Decimal,
    pub prepaid: Decimal,
    pub member: Decimal,
    pub manual: Decimal,
    pub problem: Decimal,
    pub total: Decimal,
}

impl TrendPoint {
    fn from_bucket(label: String, bucket: &RevenueBucket) -> Self {
        Self {
            period: label,
            cash: bucket.cash,
            prepaid: bucket.prepaid,
            member: bucket.member,
            manual: bucket.manual,
            problem: bucket.problem,
            total: bucket.total_revenue(),
        }
    }
}

/// Full per-period detail row, including ticket quantities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub period: String,
    pub cash: Decimal,
    pub prepaid: Decimal,
    pub member: Decimal,
    pub manual: Decimal,
    pub problem: Decimal,
    pub total_revenue: Decimal,
    pub casual_qty: Decimal,
    pub pass_qty: Decimal,
    pub total_qty: Decimal,
}

impl DetailRow {
    fn from_bucket(label: String, bucket: &RevenueBucket) -> Self {
        Self {
            period: label,
            cash: bucket.cash,
            prepaid: bucket.prepaid,
            member: bucket.member,
            manual: bucket.manual,
            problem: bucket.problem,
            total_revenue: bucket.total_revenue(),
            casual_qty: bucket.casual_qty,
            pass_qty: bucket.pass_qty,
            total_qty: bucket.total_qty(),
        }
    }
}

/// Detail rows plus summary statistics for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationDetail {
    pub rows: Vec<DetailRow>,
    pub summary: SummaryStats,
}

/// One location's contribution to a single period, for trend-comparison
/// views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationTotal {
    pub site: String,
    pub total: Decimal,
}

/// Flat chronological list with all locations summed per period.
///
/// Same join and gap-fill as the per-location shapes; only the final
/// layout differs.
pub fn combined(report: &AggregateReport) -> Vec<TrendPoint> {
    report
        .periods
        .iter()
        .enumerate()
        .map(|(i, &period)| {
            let mut merged = RevenueBucket::zero(period);
            for series in &report.series {
                merged.accumulate(&series.buckets[i]);
            }
            TrendPoint::from_bucket(report.granularity.label(period), &merged)
        })
        .collect()
}

/// Map from site name to that location's chronological trend points.
pub fn by_location(report: &AggregateReport) -> BTreeMap<String, Vec<TrendPoint>> {
    report
        .series
        .iter()
        .map(|series| {
            let points = series
                .buckets
                .iter()
                .map(|b| TrendPoint::from_bucket(report.granularity.label(b.period), b))
                .collect();
            (series.site.clone(), points)
        })
        .collect()
}

/// Map from period label to every location's revenue total for that
/// period. Period labels sort chronologically, and every location is
/// present under every period.
pub fn by_period(report: &AggregateReport) -> BTreeMap<String, Vec<LocationTotal>> {
    report
        .periods
        .iter()
        .enumerate()
        .map(|(i, &period)| {
            let totals = report
                .series
                .iter()
                .map(|series| LocationTotal {
                    site: series.site.clone(),
                    total: series.buckets[i].total_revenue(),
                })
                .collect();
            (report.granularity.label(period), totals)
        })
        .collect()
}

/// Like [`by_period`] but carrying the problem amount instead of the
/// revenue total, for the trouble-ticket reports.
pub fn problems_by_period(report: &AggregateReport) -> BTreeMap<String, Vec<LocationTotal>> {
    report
        .periods
        .iter()
        .enumerate()
        .map(|(i, &period)| {
            let totals = report
                .series
                .iter()
                .map(|series| LocationTotal {
                    site: series.site.clone(),
                    total: series.buckets[i].problem,
                })
                .collect();
            (report.granularity.label(period), totals)
        })
        .collect()
}

/// Map from site name to detail rows plus summary statistics.
pub fn details_by_location(report: &AggregateReport) -> BTreeMap<String, LocationDetail> {
    report
        .series
        .iter()
        .map(|series| {
            let rows = series
                .buckets
                .iter()
                .map(|b| DetailRow::from_bucket(report.granularity.label(b.period), b))
                .collect();
            let summary = SummaryStats::for_buckets(&series.buckets);
            (series.site.clone(), LocationDetail { rows, summary })
        })
        .collect()
}
