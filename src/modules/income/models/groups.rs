use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Parking income sums for one (bucket, location) group.
///
/// Quantities come back as `Decimal` because MySQL promotes `SUM(INT)`
/// to `DECIMAL`; the aggregation engine keeps them decimal so summary
/// averages stay exact.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ParkingGroup {
    pub location_id: i32,
    pub bucket: NaiveDate,
    pub cash: Decimal,
    pub prepaid: Decimal,
    pub casual: Decimal,
    pub pass: Decimal,
}

/// Membership income sum for one (bucket, location) group.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MemberGroup {
    pub location_id: i32,
    pub bucket: NaiveDate,
    pub member: Decimal,
}

/// Manual income and problem-ticket sums for one (bucket, location) group.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ManualGroup {
    pub location_id: i32,
    pub bucket: NaiveDate,
    pub manual: Decimal,
    pub problem: Decimal,
}
