use rust_decimal::Decimal;
use serde::Serialize;

pub const HOURS_PER_DAY: usize = 24;

/// Hour-indexed transaction and revenue totals. Both vectors always
/// hold exactly 24 entries, index 0 = midnight hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyTraffic {
    pub transactions: Vec<Decimal>,
    pub revenue: Vec<Decimal>,
}

impl HourlyTraffic {
    pub fn zero() -> Self {
        Self {
            transactions: vec![Decimal::ZERO; HOURS_PER_DAY],
            revenue: vec![Decimal::ZERO; HOURS_PER_DAY],
        }
    }
}
