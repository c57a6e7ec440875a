use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::Granularity;

/// One aggregated (period, location) cell. Derived per request, never
/// persisted.
///
/// Invariants: `total_revenue = cash + prepaid + manual + member - problem`
/// and `total_qty = casual_qty + pass_qty`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueBucket {
    pub period: NaiveDate,
    pub cash: Decimal,
    pub prepaid: Decimal,
    pub member: Decimal,
    pub manual: Decimal,
    pub problem: Decimal,
    pub casual_qty: Decimal,
    pub pass_qty: Decimal,
}

impl RevenueBucket {
    /// An all-zero bucket, used to fill (period, location) gaps.
    pub fn zero(period: NaiveDate) -> Self {
        Self {
            period,
            cash: Decimal::ZERO,
            prepaid: Decimal::ZERO,
            member: Decimal::ZERO,
            manual: Decimal::ZERO,
            problem: Decimal::ZERO,
            casual_qty: Decimal::ZERO,
            pass_qty: Decimal::ZERO,
        }
    }

    /// The revenue formula. Problem amounts are always subtracted, even
    /// when no manual amount was entered for the period.
    pub fn total_revenue(&self) -> Decimal {
        self.cash + self.prepaid + self.manual + self.member - self.problem
    }

    pub fn total_qty(&self) -> Decimal {
        self.casual_qty + self.pass_qty
    }

    /// Accumulate another location's bucket for the same period, used by
    /// the all-locations-combined shape.
    pub fn accumulate(&mut self, other: &RevenueBucket) {
        self.cash += other.cash;
        self.prepaid += other.prepaid;
        self.member += other.member;
        self.manual += other.manual;
        self.problem += other.problem;
        self.casual_qty += other.casual_qty;
        self.pass_qty += other.pass_qty;
    }
}

/// Gap-free bucket sequence for a single location, in ascending period
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSeries {
    pub location_id: i32,
    pub site: String,
    pub buckets: Vec<RevenueBucket>,
}

/// The aggregation engine's output: one series per authorized location,
/// each covering the full period sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub granularity: Granularity,
    pub periods: Vec<NaiveDate>,
    pub series: Vec<LocationSeries>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_bucket_totals() {
        let bucket = RevenueBucket::zero(date(2025, 1, 1));
        assert_eq!(bucket.total_revenue(), Decimal::ZERO);
        assert_eq!(bucket.total_qty(), Decimal::ZERO);
    }

    #[test]
    fn test_revenue_formula_subtracts_problem() {
        let mut bucket = RevenueBucket::zero(date(2025, 1, 1));
        bucket.manual = dec!(50);
        bucket.problem = dec!(20);
        assert_eq!(bucket.total_revenue(), dec!(30));
    }

    #[test]
    fn test_quantity_invariant() {
        let mut bucket = RevenueBucket::zero(date(2025, 1, 1));
        bucket.casual_qty = dec!(12);
        bucket.pass_qty = dec!(3);
        assert_eq!(bucket.total_qty(), dec!(15));
    }

    #[test]
    fn test_accumulate() {
        let mut a = RevenueBucket::zero(date(2025, 1, 1));
        a.cash = dec!(100);
        a.casual_qty = dec!(2);

        let mut b = RevenueBucket::zero(date(2025, 1, 1));
        b.cash = dec!(50);
        b.problem = dec!(10);
        b.pass_qty = dec!(1);

        a.accumulate(&b);
        assert_eq!(a.cash, dec!(150));
        assert_eq!(a.total_revenue(), dec!(140));
        assert_eq!(a.total_qty(), dec!(3));
    }
}
