use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::core::sql::{bucket_expr, in_placeholders};
use crate::core::{Granularity, Result};
use crate::modules::income::models::{ParkingGroup, ParkingIncomeFact};

/// Read access to the parking income fact table.
///
/// This is the reference fact table: its maximum date anchors the report
/// windows, which keeps reports resilient to ingestion lag.
#[async_trait]
pub trait ParkingFacts: Send + Sync {
    /// Latest date with parking data for the given locations, if any.
    async fn latest_date(&self, location_ids: &[i32]) -> Result<Option<NaiveDate>>;

    /// SUM of cash/prepaid/casual/pass per (bucket, location). Groups
    /// without rows are simply absent; the engine zero-fills them.
    async fn grouped_sums(
        &self,
        location_ids: &[i32],
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    ) -> Result<Vec<ParkingGroup>>;
}

pub struct ParkingIncomeRepository {
    pool: MySqlPool,
}

impl ParkingIncomeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Most recent raw rows for one location, newest first.
    pub async fn list_recent(&self, location_id: i32, limit: u32) -> Result<Vec<ParkingIncomeFact>> {
        let rows = sqlx::query_as::<_, ParkingIncomeFact>(
            r#"
            SELECT id_lokasi AS location_id,
                   tanggal AS date,
                   shift,
                   kendaraan AS vehicle_type,
                   kategori AS category,
                   tarif AS tariff,
                   cash AS cash_amount,
                   prepaid AS prepaid_amount,
                   casual AS casual_count,
                   `pass` AS pass_count
            FROM tt_sync_income_parkir
            WHERE id_lokasi = ?
            ORDER BY tanggal DESC, shift
            LIMIT ?
            "#,
        )
        .bind(location_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[async_trait]
impl ParkingFacts for ParkingIncomeRepository {
    async fn latest_date(&self, location_ids: &[i32]) -> Result<Option<NaiveDate>> {
        let query = format!(
            "SELECT MAX(tanggal) FROM tt_sync_income_parkir WHERE id_lokasi IN ({})",
            in_placeholders(location_ids.len())
        );

        let mut q = sqlx::query_scalar::<_, Option<NaiveDate>>(&query);
        for id in location_ids {
            q = q.bind(id);
        }

        Ok(q.fetch_one(&self.pool).await?)
    }

    async fn grouped_sums(
        &self,
        location_ids: &[i32],
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    ) -> Result<Vec<ParkingGroup>> {
        let query = format!(
            r#"
            SELECT p.id_lokasi AS location_id,
                   {bucket} AS bucket,
                   SUM(p.cash) AS cash,
                   SUM(p.prepaid) AS prepaid,
                   SUM(p.casual) AS casual,
                   SUM(p.`pass`) AS pass
            FROM tt_sync_income_parkir p
            WHERE p.id_lokasi IN ({ids}) AND p.tanggal BETWEEN ? AND ?
            GROUP BY location_id, bucket
            ORDER BY bucket, location_id
            "#,
            bucket = bucket_expr(granularity, "p.tanggal"),
            ids = in_placeholders(location_ids.len()),
        );

        let mut q = sqlx::query_as::<_, ParkingGroup>(&query);
        for id in location_ids {
            q = q.bind(id);
        }
        q = q.bind(start).bind(end);

        Ok(q.fetch_all(&self.pool).await?)
    }
}
