use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::MySqlPool;

use crate::core::sql::in_placeholders;
use crate::core::Result;
use crate::modules::realtime::models::{
    DayTotals, LatestEvent, VehicleGroup, VehicleLocationGroup,
};

/// Read access to the realtime transaction event table.
#[async_trait]
pub trait RealtimeEvents: Send + Sync {
    /// Latest event timestamp across the given locations, if any.
    async fn latest_time(&self, location_ids: &[i32]) -> Result<Option<NaiveDateTime>>;

    /// Per-vehicle-type qty/amount sums for the reference date, counting
    /// only events up to the reference timestamp.
    async fn vehicle_totals(
        &self,
        location_ids: &[i32],
        reference: NaiveDateTime,
    ) -> Result<Vec<VehicleGroup>>;

    /// Like [`vehicle_totals`](RealtimeEvents::vehicle_totals) but split
    /// per location.
    async fn vehicle_totals_by_location(
        &self,
        location_ids: &[i32],
        reference: NaiveDateTime,
    ) -> Result<Vec<VehicleLocationGroup>>;

    /// Most recent event row for one location.
    async fn latest_event(&self, location_id: i32) -> Result<Option<LatestEvent>>;

    /// Qty/amount sums for one location on one date, up to a timestamp.
    async fn location_day_totals(
        &self,
        location_id: i32,
        date: NaiveDate,
        up_to: NaiveDateTime,
    ) -> Result<DayTotals>;

    /// Qty/amount sums across locations for one date, up to a timestamp.
    async fn day_totals(
        &self,
        location_ids: &[i32],
        date: NaiveDate,
        up_to: NaiveDateTime,
    ) -> Result<DayTotals>;
}

pub struct RealtimeRepository {
    pool: MySqlPool,
}

impl RealtimeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RealtimeEvents for RealtimeRepository {
    async fn latest_time(&self, location_ids: &[i32]) -> Result<Option<NaiveDateTime>> {
        let query = format!(
            "SELECT MAX(waktu) FROM tt_sync_realtime WHERE id_lokasi IN ({})",
            in_placeholders(location_ids.len())
        );

        let mut q = sqlx::query_scalar::<_, Option<NaiveDateTime>>(&query);
        for id in location_ids {
            q = q.bind(id);
        }

        Ok(q.fetch_one(&self.pool).await?)
    }

    async fn vehicle_totals(
        &self,
        location_ids: &[i32],
        reference: NaiveDateTime,
    ) -> Result<Vec<VehicleGroup>> {
        let query = format!(
            r#"
            SELECT kendaraan AS vehicle_type,
                   SUM(qty) AS transactions,
                   SUM(jumlah) AS revenue
            FROM tt_sync_realtime
            WHERE id_lokasi IN ({ids}) AND tanggal = ? AND waktu <= ?
            GROUP BY kendaraan
            ORDER BY kendaraan
            "#,
            ids = in_placeholders(location_ids.len()),
        );

        let mut q = sqlx::query_as::<_, VehicleGroup>(&query);
        for id in location_ids {
            q = q.bind(id);
        }
        q = q.bind(reference.date()).bind(reference);

        Ok(q.fetch_all(&self.pool).await?)
    }

    async fn vehicle_totals_by_location(
        &self,
        location_ids: &[i32],
        reference: NaiveDateTime,
    ) -> Result<Vec<VehicleLocationGroup>> {
        let query = format!(
            r#"
            SELECT id_lokasi AS location_id,
                   kendaraan AS vehicle_type,
                   SUM(qty) AS transactions,
                   SUM(jumlah) AS revenue
            FROM tt_sync_realtime
            WHERE id_lokasi IN ({ids}) AND tanggal = ? AND waktu <= ?
            GROUP BY location_id, vehicle_type
            ORDER BY location_id, vehicle_type
            "#,
            ids = in_placeholders(location_ids.len()),
        );

        let mut q = sqlx::query_as::<_, VehicleLocationGroup>(&query);
        for id in location_ids {
            q = q.bind(id);
        }
        q = q.bind(reference.date()).bind(reference);

        Ok(q.fetch_all(&self.pool).await?)
    }

    async fn latest_event(&self, location_id: i32) -> Result<Option<LatestEvent>> {
        let row = sqlx::query_as::<_, LatestEvent>(
            r#"
            SELECT tanggal AS date, waktu AS time
            FROM tt_sync_realtime
            WHERE id_lokasi = ?
            ORDER BY tanggal DESC, waktu DESC
            LIMIT 1
            "#,
        )
        .bind(location_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn location_day_totals(
        &self,
        location_id: i32,
        date: NaiveDate,
        up_to: NaiveDateTime,
    ) -> Result<DayTotals> {
        let totals = sqlx::query_as::<_, DayTotals>(
            r#"
            SELECT SUM(qty) AS transactions, SUM(jumlah) AS revenue
            FROM tt_sync_realtime
            WHERE id_lokasi = ? AND tanggal = ? AND waktu <= ?
            "#,
        )
        .bind(location_id)
        .bind(date)
        .bind(up_to)
        .fetch_one(&self.pool)
        .await?;

        Ok(totals)
    }

    async fn day_totals(
        &self,
        location_ids: &[i32],
        date: NaiveDate,
        up_to: NaiveDateTime,
    ) -> Result<DayTotals> {
        let query = format!(
            r#"
            SELECT SUM(qty) AS transactions, SUM(jumlah) AS revenue
            FROM tt_sync_realtime
            WHERE id_lokasi IN ({ids}) AND tanggal = ? AND waktu <= ?
            "#,
            ids = in_placeholders(location_ids.len()),
        );

        let mut q = sqlx::query_as::<_, DayTotals>(&query);
        for id in location_ids {
            q = q.bind(id);
        }
        q = q.bind(date).bind(up_to);

        Ok(q.fetch_one(&self.pool).await?)
    }
}
