use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::core::sql::{bucket_expr, in_placeholders};
use crate::core::{Granularity, Result};
use crate::modules::income::models::{ManualGroup, ManualIncomeFact};

/// Read access to the manually-entered income/adjustment fact table.
/// Also the reference table for the problem-ticket (trouble) reports.
#[async_trait]
pub trait ManualFacts: Send + Sync {
    /// Latest date with manual data for the given locations, if any.
    async fn latest_date(&self, location_ids: &[i32]) -> Result<Option<NaiveDate>>;

    /// SUM of manual and problem amounts per (bucket, location).
    async fn grouped_sums(
        &self,
        location_ids: &[i32],
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    ) -> Result<Vec<ManualGroup>>;
}

pub struct ManualIncomeRepository {
    pool: MySqlPool,
}

impl ManualIncomeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Most recent raw rows for one location, newest first.
    pub async fn list_recent(&self, location_id: i32, limit: u32) -> Result<Vec<ManualIncomeFact>> {
        let rows = sqlx::query_as::<_, ManualIncomeFact>(
            r#"
            SELECT id_lokasi AS location_id,
                   tanggal AS date,
                   shift,
                   manual AS manual_amount,
                   masalah AS problem_amount
            FROM tt_sync_income_manual
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
impl ManualFacts for ManualIncomeRepository {
    async fn latest_date(&self, location_ids: &[i32]) -> Result<Option<NaiveDate>> {
        let query = format!(
            "SELECT MAX(tanggal) FROM tt_sync_income_manual WHERE id_lokasi IN ({})",
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
    ) -> Result<Vec<ManualGroup>> {
        let query = format!(
            r#"
            SELECT n.id_lokasi AS location_id,
                   {bucket} AS bucket,
                   SUM(n.manual) AS manual,
                   SUM(n.masalah) AS problem
            FROM tt_sync_income_manual n
            WHERE n.id_lokasi IN ({ids}) AND n.tanggal BETWEEN ? AND ?
            GROUP BY location_id, bucket
            ORDER BY bucket, location_id
            "#,
            bucket = bucket_expr(granularity, "n.tanggal"),
            ids = in_placeholders(location_ids.len()),
        );

        let mut q = sqlx::query_as::<_, ManualGroup>(&query);
        for id in location_ids {
            q = q.bind(id);
        }
        q = q.bind(start).bind(end);

        Ok(q.fetch_all(&self.pool).await?)
    }
}
