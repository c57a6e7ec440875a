use std::sync::Arc;

use actix_web::{web, HttpResponse};
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::middleware::SessionClaims;
use crate::modules::income::repositories::{
    ManualIncomeRepository, MemberIncomeRepository, ParkingIncomeRepository,
};
use crate::modules::locations::repositories::LocationRepository;
use crate::modules::locations::services::AccessResolver;

const RECENT_ROW_LIMIT: u32 = 100;

/// Verify the requested location is inside the caller's authorized set.
async fn authorize_location(
    pool: &MySqlPool,
    claims: &SessionClaims,
    location_id: i32,
) -> Result<()> {
    let resolver = AccessResolver::new(Arc::new(LocationRepository::new(pool.clone())));
    let locations = resolver.resolve(claims).await?;

    if locations.iter().any(|l| l.id == location_id) {
        Ok(())
    } else {
        Err(AppError::access(format!(
            "Location {location_id} is not in the caller's authorized set"
        )))
    }
}

/// GET /api/income/parking/{location_id}
pub async fn list_parking_income(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let location_id = path.into_inner();
    authorize_location(pool.get_ref(), &claims, location_id).await?;

    let rows = ParkingIncomeRepository::new(pool.get_ref().clone())
        .list_recent(location_id, RECENT_ROW_LIMIT)
        .await?;

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /api/income/member/{location_id}
pub async fn list_member_income(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let location_id = path.into_inner();
    authorize_location(pool.get_ref(), &claims, location_id).await?;

    let rows = MemberIncomeRepository::new(pool.get_ref().clone())
        .list_recent(location_id, RECENT_ROW_LIMIT)
        .await?;

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /api/income/manual/{location_id}
pub async fn list_manual_income(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let location_id = path.into_inner();
    authorize_location(pool.get_ref(), &claims, location_id).await?;

    let rows = ManualIncomeRepository::new(pool.get_ref().clone())
        .list_recent(location_id, RECENT_ROW_LIMIT)
        .await?;

    Ok(HttpResponse::Ok().json(rows))
}

/// Configure routes for the income module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/income")
            .route("/parking/{location_id}", web::get().to(list_parking_income))
            .route("/member/{location_id}", web::get().to(list_member_income))
            .route("/manual/{location_id}", web::get().to(list_manual_income)),
    );
}
