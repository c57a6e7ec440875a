use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::sql::in_placeholders;
use crate::core::Result;
use crate::modules::posts::models::PostRow;

/// Read access to the gate-post status table.
#[async_trait]
pub trait PostStatusSource: Send + Sync {
    /// All post rows for the given locations, with site names attached.
    async fn list_posts(&self, location_ids: &[i32]) -> Result<Vec<PostRow>>;
}

pub struct PostRepository {
    pool: MySqlPool,
}

impl PostRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStatusSource for PostRepository {
    async fn list_posts(&self, location_ids: &[i32]) -> Result<Vec<PostRow>> {
        let query = format!(
            r#"
            SELECT p.id_lokasi AS location_id,
                   l.site AS site,
                   p.pos AS post,
                   p.aktif AS active,
                   p.trafic AS traffic
            FROM tt_pos_aktif p
            JOIN tm_lokasi l ON l.id = p.id_lokasi
            WHERE p.id_lokasi IN ({ids})
            ORDER BY l.id, p.pos
            "#,
            ids = in_placeholders(location_ids.len()),
        );

        let mut q = sqlx::query_as::<_, PostRow>(&query);
        for id in location_ids {
            q = q.bind(id);
        }

        Ok(q.fetch_all(&self.pool).await?)
    }
}
