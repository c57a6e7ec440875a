use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::sql::in_placeholders;
use crate::core::Result;
use crate::modules::locations::models::Location;

/// Read access to the location reference table and the user-location
/// assignment relation.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// All locations in the system, in stable id order.
    async fn list_all(&self) -> Result<Vec<Location>>;

    /// Locations explicitly assigned to a user, in stable id order.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Location>>;
}

pub struct LocationRepository {
    pool: MySqlPool,
}

impl LocationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Distinct site names that actually appear in the parking fact table,
    /// restricted to the given locations.
    pub async fn sites_with_parking_data(&self, locations: &[Location]) -> Result<Vec<String>> {
        let query = format!(
            r#"
            SELECT l.site
            FROM tt_sync_income_parkir p
            INNER JOIN tm_lokasi l ON l.id = p.id_lokasi
            WHERE p.id_lokasi IN ({})
            GROUP BY l.id, l.site
            ORDER BY l.id
            "#,
            in_placeholders(locations.len())
        );

        let mut q = sqlx::query_scalar::<_, String>(&query);
        for location in locations {
            q = q.bind(location.id);
        }

        Ok(q.fetch_all(&self.pool).await?)
    }
}

#[async_trait]
impl LocationSource for LocationRepository {
    async fn list_all(&self) -> Result<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, pengelola AS operator, site, alamat AS address
            FROM tm_lokasi
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT l.id, l.pengelola AS operator, l.site, l.alamat AS address
            FROM tm_lokasi l
            INNER JOIN tm_lokasi_user ul ON ul.id_lokasi = l.id
            WHERE ul.id_user = ?
            ORDER BY l.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }
}
