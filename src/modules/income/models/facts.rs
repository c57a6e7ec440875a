use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One parking income row per location/date/shift/vehicle/category
/// combination (`tt_sync_income_parkir`). Append-only; written by the
/// external sync process.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ParkingIncomeFact {
    pub location_id: i32,
    pub date: NaiveDate,
    pub shift: String,
    pub vehicle_type: String,
    pub category: String,
    pub tariff: Decimal,
    pub cash_amount: Decimal,
    pub prepaid_amount: Decimal,
    pub casual_count: i32,
    pub pass_count: i32,
}

/// Daily membership income per location (`tt_sync_income_member`).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MemberIncomeFact {
    pub location_id: i32,
    pub date: NaiveDate,
    pub member_amount: Decimal,
}

/// Manually entered income adjustments (`tt_sync_income_manual`).
/// `problem_amount` ("masalah") is disputed/void revenue and is always
/// subtracted from totals.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ManualIncomeFact {
    pub location_id: i32,
    pub date: NaiveDate,
    pub shift: String,
    pub manual_amount: Decimal,
    pub problem_amount: Decimal,
}
