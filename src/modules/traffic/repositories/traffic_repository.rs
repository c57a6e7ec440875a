use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};

use crate::core::sql::in_placeholders;
use crate::core::Result;
use crate::modules::traffic::models::{HourlyTraffic, HOURS_PER_DAY};

/// Read access to the hourly traffic table, which stores one column per
/// hour (`jam_0..jam_23` for counts, `tarif_0..tarif_23` for revenue).
#[async_trait]
pub trait TrafficCounts: Send + Sync {
    /// Per-hour sums across all given locations.
    async fn hourly_totals(&self, location_ids: &[i32]) -> Result<HourlyTraffic>;

    /// Per-hour sums per location.
    async fn hourly_totals_by_location(
        &self,
        location_ids: &[i32],
    ) -> Result<Vec<(i32, HourlyTraffic)>>;
}

pub struct TrafficRepository {
    pool: MySqlPool,
}

impl TrafficRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn hour_sum_columns() -> String {
    let mut columns = Vec::with_capacity(HOURS_PER_DAY * 2);
    for i in 0..HOURS_PER_DAY {
        columns.push(format!("COALESCE(SUM(jam_{i}), 0)"));
    }
    for i in 0..HOURS_PER_DAY {
        columns.push(format!("COALESCE(SUM(tarif_{i}), 0)"));
    }
    columns.join(", ")
}

/// Pull 48 hour columns out of a row, starting at `offset`.
fn hourly_from_row(row: &sqlx::mysql::MySqlRow, offset: usize) -> Result<HourlyTraffic> {
    let mut traffic = HourlyTraffic::zero();
    for i in 0..HOURS_PER_DAY {
        traffic.transactions[i] = row.try_get::<Decimal, _>(offset + i)?;
        traffic.revenue[i] = row.try_get::<Decimal, _>(offset + HOURS_PER_DAY + i)?;
    }
    Ok(traffic)
}

#[async_trait]
impl TrafficCounts for TrafficRepository {
    async fn hourly_totals(&self, location_ids: &[i32]) -> Result<HourlyTraffic> {
        let query = format!(
            "SELECT {cols} FROM tt_traffic_hours WHERE id_lokasi IN ({ids})",
            cols = hour_sum_columns(),
            ids = in_placeholders(location_ids.len()),
        );

        let mut q = sqlx::query(&query);
        for id in location_ids {
            q = q.bind(id);
        }

        let row = q.fetch_one(&self.pool).await?;
        hourly_from_row(&row, 0)
    }

    async fn hourly_totals_by_location(
        &self,
        location_ids: &[i32],
    ) -> Result<Vec<(i32, HourlyTraffic)>> {
        let query = format!(
            "SELECT id_lokasi, {cols} FROM tt_traffic_hours \
             WHERE id_lokasi IN ({ids}) GROUP BY id_lokasi ORDER BY id_lokasi",
            cols = hour_sum_columns(),
            ids = in_placeholders(location_ids.len()),
        );

        let mut q = sqlx::query(&query);
        for id in location_ids {
            q = q.bind(id);
        }

        let rows = q.fetch_all(&self.pool).await?;
        let mut totals = Vec::with_capacity(rows.len());
        for row in &rows {
            let location_id = row.try_get::<i32, _>(0)?;
            totals.push((location_id, hourly_from_row(row, 1)?));
        }

        Ok(totals)
    }
}
