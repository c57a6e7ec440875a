use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::core::sql::{bucket_expr, in_placeholders};
use crate::core::{Granularity, Result};
use crate::modules::income::models::{MemberGroup, MemberIncomeFact};

/// Read access to the membership income fact table.
#[async_trait]
pub trait MemberFacts: Send + Sync {
    /// SUM of member income per (bucket, location).
    async fn grouped_sums(
        &self,
        location_ids: &[i32],
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    ) -> Result<Vec<MemberGroup>>;
}

pub struct MemberIncomeRepository {
    pool: MySqlPool,
}

impl MemberIncomeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Most recent raw rows for one location, newest first.
    pub async fn list_recent(&self, location_id: i32, limit: u32) -> Result<Vec<MemberIncomeFact>> {
        let rows = sqlx::query_as::<_, MemberIncomeFact>(
            r#"
            SELECT id_lokasi AS location_id,
                   tanggal AS date,
                   member AS member_amount
            FROM tt_sync_income_member
            WHERE id_lokasi = ?
            ORDER BY tanggal DESC
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
impl MemberFacts for MemberIncomeRepository {
    async fn grouped_sums(
        &self,
        location_ids: &[i32],
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    ) -> Result<Vec<MemberGroup>> {
        let query = format!(
            r#"
            SELECT m.id_lokasi AS location_id,
                   {bucket} AS bucket,
                   SUM(m.member) AS member
            FROM tt_sync_income_member m
            WHERE m.id_lokasi IN ({ids}) AND m.tanggal BETWEEN ? AND ?
            GROUP BY location_id, bucket
            ORDER BY bucket, location_id
            "#,
            bucket = bucket_expr(granularity, "m.tanggal"),
            ids = in_placeholders(location_ids.len()),
        );

        let mut q = sqlx::query_as::<_, MemberGroup>(&query);
        for id in location_ids {
            q = q.bind(id);
        }
        q = q.bind(start).bind(end);

        Ok(q.fetch_all(&self.pool).await?)
    }
}
