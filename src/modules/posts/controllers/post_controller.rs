use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::middleware::SessionClaims;
use crate::modules::locations::repositories::LocationRepository;
use crate::modules::locations::services::AccessResolver;
use crate::modules::posts::models::{PostRow, PostStatusSummary};
use crate::modules::posts::repositories::{PostRepository, PostStatusSource};

/// One post in the per-site listing
#[derive(Debug, Serialize)]
pub struct PostEntry {
    pub post: String,
    pub status: &'static str,
    pub traffic: i64,
}

impl From<&PostRow> for PostEntry {
    fn from(row: &PostRow) -> Self {
        Self {
            post: row.post.clone(),
            status: if row.is_online() { "Online" } else { "Offline" },
            traffic: row.traffic,
        }
    }
}

/// GET /api/posts/status: online/offline traffic totals and counts
pub async fn status(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let resolver = AccessResolver::new(Arc::new(LocationRepository::new(pool.get_ref().clone())));
    let locations = resolver.resolve(&claims).await?;
    let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

    let rows = PostRepository::new(pool.get_ref().clone())
        .list_posts(&ids)
        .await?;

    Ok(HttpResponse::Ok().json(PostStatusSummary::from_rows(&rows)))
}

/// GET /api/posts/status/bylocations: post list per site. Sites
/// without any posts appear with an empty list.
pub async fn status_by_locations(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let resolver = AccessResolver::new(Arc::new(LocationRepository::new(pool.get_ref().clone())));
    let locations = resolver.resolve(&claims).await?;
    let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

    let rows = PostRepository::new(pool.get_ref().clone())
        .list_posts(&ids)
        .await?;

    let mut by_site: BTreeMap<String, Vec<PostEntry>> = locations
        .iter()
        .map(|l| (l.site.clone(), Vec::new()))
        .collect();
    for row in &rows {
        by_site
            .entry(row.site.clone())
            .or_default()
            .push(PostEntry::from(row));
    }

    Ok(HttpResponse::Ok().json(by_site))
}
