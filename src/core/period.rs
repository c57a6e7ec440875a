use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar granularity used as the aggregation key for all reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Month,
    Year,
}

impl Granularity {
    /// Truncate a date to the bucket key containing it.
    /// Month and year buckets are keyed on their first day.
    pub fn truncate(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => date,
            Granularity::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
                .expect("first day of month is valid"),
            Granularity::Year => {
                NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("first day of year is valid")
            }
        }
    }

    /// Render a bucket key the way the reports present it:
    /// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
    pub fn label(&self, bucket: NaiveDate) -> String {
        match self {
            Granularity::Day => bucket.format("%Y-%m-%d").to_string(),
            Granularity::Month => bucket.format("%Y-%m").to_string(),
            Granularity::Year => bucket.format("%Y").to_string(),
        }
    }

    /// The bucket key immediately before `bucket`.
    fn previous(&self, bucket: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => bucket - Duration::days(1),
            Granularity::Month => {
                let (year, month) = if bucket.month() == 1 {
                    (bucket.year() - 1, 12)
                } else {
                    (bucket.year(), bucket.month() - 1)
                };
                NaiveDate::from_ymd_opt(year, month, 1).expect("first day of month is valid")
            }
            Granularity::Year => NaiveDate::from_ymd_opt(bucket.year() - 1, 1, 1)
                .expect("first day of year is valid"),
        }
    }
}

/// Produce the ordered, gap-free sequence of bucket keys a report must cover:
/// `window_size` consecutive buckets ending at the bucket containing
/// `reference_date`, ascending.
///
/// This sequence is authoritative: the aggregation engine emits one entry per
/// (bucket, location) in it even when no fact rows exist.
pub fn bucket_sequence(
    granularity: Granularity,
    window_size: usize,
    reference_date: NaiveDate,
) -> Vec<NaiveDate> {
    let mut current = granularity.truncate(reference_date);
    let mut buckets = Vec::with_capacity(window_size);
    for _ in 0..window_size {
        buckets.push(current);
        current = granularity.previous(current);
    }
    buckets.reverse();
    buckets
}

/// First calendar date covered by the window, used as the lower bound of the
/// fact queries. The upper bound is the reference date itself.
pub fn window_start(
    granularity: Granularity,
    window_size: usize,
    reference_date: NaiveDate,
) -> NaiveDate {
    bucket_sequence(granularity, window_size, reference_date)[0]
}
