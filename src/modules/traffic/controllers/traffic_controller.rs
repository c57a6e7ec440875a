use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::{web, HttpResponse};
use sqlx::MySqlPool;

use crate::core::Result;
use crate::middleware::SessionClaims;
use crate::modules::locations::repositories::LocationRepository;
use crate::modules::locations::services::AccessResolver;
use crate::modules::traffic::models::HourlyTraffic;
use crate::modules::traffic::repositories::{TrafficCounts, TrafficRepository};

/// GET /api/traffic/hours: per-hour transaction and revenue totals
/// across all authorized locations
pub async fn hours(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let resolver = AccessResolver::new(Arc::new(LocationRepository::new(pool.get_ref().clone())));
    let locations = resolver.resolve(&claims).await?;
    let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

    let totals = TrafficRepository::new(pool.get_ref().clone())
        .hourly_totals(&ids)
        .await?;

    Ok(HttpResponse::Ok().json(totals))
}

/// GET /api/traffic/hours/bylocations: per-hour totals keyed by site.
/// Sites without traffic rows appear with all-zero hours.
pub async fn hours_by_locations(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let resolver = AccessResolver::new(Arc::new(LocationRepository::new(pool.get_ref().clone())));
    let locations = resolver.resolve(&claims).await?;
    let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

    let totals = TrafficRepository::new(pool.get_ref().clone())
        .hourly_totals_by_location(&ids)
        .await?;

    let mut by_site: BTreeMap<String, HourlyTraffic> = locations
        .iter()
        .map(|l| (l.site.clone(), HourlyTraffic::zero()))
        .collect();
    for (location_id, traffic) in totals {
        if let Some(location) = locations.iter().find(|l| l.id == location_id) {
            by_site.insert(location.site.clone(), traffic);
        }
    }

    Ok(HttpResponse::Ok().json(by_site))
}
