use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::revenue::models::RevenueBucket;

/// Total/min/max/mean of one numeric field across a bucket sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldStats {
    pub total: Decimal,
    pub minimum: Decimal,
    pub maximum: Decimal,
    pub average: Decimal,
}

impl FieldStats {
    fn over(values: &[Decimal]) -> Self {
        let total: Decimal = values.iter().copied().sum();
        let minimum = values.iter().copied().min().unwrap_or(Decimal::ZERO);
        let maximum = values.iter().copied().max().unwrap_or(Decimal::ZERO);
        let average = if values.is_empty() {
            Decimal::ZERO
        } else {
            total / Decimal::from(values.len())
        };
        Self {
            total,
            minimum,
            maximum,
            average,
        }
    }
}

/// Per-location summary statistics across a gap-filled bucket sequence.
///
/// Zero-filled buckets participate, so the mean divides by the full
/// window length and the minimum can be zero for quiet periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub cash: FieldStats,
    pub prepaid: FieldStats,
    pub member: FieldStats,
    pub manual: FieldStats,
    pub problem: FieldStats,
    pub total_revenue: FieldStats,
    pub casual_qty: FieldStats,
    pub pass_qty: FieldStats,
    pub total_qty: FieldStats,
}

impl SummaryStats {
    pub fn for_buckets(buckets: &[RevenueBucket]) -> Self {
        let collect = |f: &dyn Fn(&RevenueBucket) -> Decimal| -> Vec<Decimal> {
            buckets.iter().map(f).collect()
        };

        Self {
            cash: FieldStats::over(&collect(&|b| b.cash)),
            prepaid: FieldStats::over(&collect(&|b| b.prepaid)),
            member: FieldStats::over(&collect(&|b| b.member)),
            manual: FieldStats::over(&collect(&|b| b.manual)),
            problem: FieldStats::over(&collect(&|b| b.problem)),
            total_revenue: FieldStats::over(&collect(&|b| b.total_revenue())),
            casual_qty: FieldStats::over(&collect(&|b| b.casual_qty)),
            pass_qty: FieldStats::over(&collect(&|b| b.pass_qty)),
            total_qty: FieldStats::over(&collect(&|b| b.total_qty())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn bucket_with_total(day: u32, cash: Decimal) -> RevenueBucket {
        let mut bucket =
            RevenueBucket::zero(NaiveDate::from_ymd_opt(2025, 1, day).unwrap());
        bucket.cash = cash;
        bucket
    }

    #[test]
    fn test_stats_over_mixed_buckets() {
        // total=150, min=0, max=100, average=50
        let buckets = vec![
            bucket_with_total(1, dec!(100)),
            bucket_with_total(2, dec!(0)),
            bucket_with_total(3, dec!(50)),
        ];

        let stats = SummaryStats::for_buckets(&buckets);
        assert_eq!(stats.total_revenue.total, dec!(150));
        assert_eq!(stats.total_revenue.minimum, dec!(0));
        assert_eq!(stats.total_revenue.maximum, dec!(100));
        assert_eq!(stats.total_revenue.average, dec!(50));
    }

    #[test]
    fn test_stats_over_empty_sequence_are_zero() {
        let stats = SummaryStats::for_buckets(&[]);
        assert_eq!(stats.cash.total, Decimal::ZERO);
        assert_eq!(stats.cash.average, Decimal::ZERO);
    }

    #[test]
    fn test_average_is_exact_decimal() {
        let buckets = vec![
            bucket_with_total(1, dec!(1)),
            bucket_with_total(2, dec!(0)),
        ];
        let stats = SummaryStats::for_buckets(&buckets);
        assert_eq!(stats.cash.average, dec!(0.5));
    }
}
