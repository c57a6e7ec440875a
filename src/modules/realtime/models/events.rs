use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Per-vehicle-type sums for one reference date.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct VehicleGroup {
    pub vehicle_type: String,
    pub transactions: Decimal,
    pub revenue: Decimal,
}

/// Per-vehicle-type sums carrying the owning location.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct VehicleLocationGroup {
    pub location_id: i32,
    pub vehicle_type: String,
    pub transactions: Decimal,
    pub revenue: Decimal,
}

/// Date and timestamp of the most recent event row for one location.
#[derive(Debug, Clone, Copy, PartialEq, FromRow)]
pub struct LatestEvent {
    pub date: NaiveDate,
    pub time: NaiveDateTime,
}

/// SUM over an empty set is NULL in MySQL, hence the options.
#[derive(Debug, Clone, Copy, PartialEq, FromRow)]
pub struct DayTotals {
    pub transactions: Option<Decimal>,
    pub revenue: Option<Decimal>,
}

impl DayTotals {
    pub fn transactions(&self) -> Decimal {
        self.transactions.unwrap_or_default()
    }

    pub fn revenue(&self) -> Decimal {
        self.revenue.unwrap_or_default()
    }
}

/// Latest-day totals for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSnapshot {
    pub site: String,
    pub date: NaiveDate,
    pub time: NaiveDateTime,
    pub transactions: Decimal,
    pub revenue: Decimal,
}

/// Dashboard header numbers. Today's figures come from the realtime
/// events at the reference timestamp; totals add the prior six days of
/// settled income on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCards {
    pub total_revenue: Decimal,
    pub revenue_today: Decimal,
    pub total_transactions: Decimal,
    pub transactions_today: Decimal,
    pub time: NaiveDateTime,
}
