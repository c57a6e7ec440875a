use serde::Serialize;
use sqlx::FromRow;

/// One gate-post row joined with its location's site name.
/// `active` mirrors the source column: 1 = online, anything else offline.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PostRow {
    pub location_id: i32,
    pub site: String,
    pub post: String,
    pub active: i32,
    pub traffic: i64,
}

impl PostRow {
    pub fn is_online(&self) -> bool {
        self.active == 1
    }
}

/// Fleet-wide online/offline totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PostStatusSummary {
    pub online_traffic_total: i64,
    pub offline_traffic_total: i64,
    pub online_count: u32,
    pub offline_count: u32,
}

impl PostStatusSummary {
    pub fn from_rows(rows: &[PostRow]) -> Self {
        let mut summary = Self {
            online_traffic_total: 0,
            offline_traffic_total: 0,
            online_count: 0,
            offline_count: 0,
        };

        for row in rows {
            if row.is_online() {
                summary.online_traffic_total += row.traffic;
                summary.online_count += 1;
            } else {
                summary.offline_traffic_total += row.traffic;
                summary.offline_count += 1;
            }
        }

        summary
    }
}
