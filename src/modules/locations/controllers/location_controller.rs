use std::sync::Arc;

use actix_web::{web, HttpResponse};
use sqlx::MySqlPool;

use crate::core::Result;
use crate::middleware::SessionClaims;
use crate::modules::locations::repositories::LocationRepository;
use crate::modules::locations::services::AccessResolver;

/// GET /api/revenue/locations
///
/// Site names (within the caller's authorized set) that have parking
/// income data, for populating report filter dropdowns.
pub async fn get_report_locations(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let repo = LocationRepository::new(pool.get_ref().clone());
    let resolver = AccessResolver::new(Arc::new(LocationRepository::new(pool.get_ref().clone())));

    let locations = resolver.resolve(&claims).await?;
    let sites = repo.sites_with_parking_data(&locations).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "locations": sites,
    })))
}

/// Configure routes for the locations module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/revenue/locations", web::get().to(get_report_locations));
}
