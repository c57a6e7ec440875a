use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::middleware::SessionClaims;
use crate::modules::revenue::services::shapes;
use crate::modules::revenue::services::RevenueService;

/// Query parameters for the month-detail endpoint
#[derive(Debug, Deserialize)]
pub struct MonthDetailQuery {
    /// Calendar year to report on (format: YYYY)
    #[serde(default)]
    pub year: Option<String>,
}

/// GET /api/revenue/details/months?year=YYYY
///
/// Month-by-month breakdown with quantities and per-location summary
/// statistics for one calendar year.
pub async fn months(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
    query: web::Query<MonthDetailQuery>,
) -> Result<HttpResponse> {
    let raw_year = query
        .year
        .as_deref()
        .ok_or_else(|| AppError::invalid_filter("Year filter is required"))?;

    let year: i32 = raw_year
        .parse()
        .map_err(|_| AppError::invalid_filter(format!("Invalid year format: '{raw_year}'")))?;

    let service = RevenueService::from_pool(pool.get_ref());
    let report = service.year_detail_report(&claims, year).await?;

    Ok(HttpResponse::Ok().json(shapes::details_by_location(&report)))
}

/// GET /api/revenue/details/years
///
/// Year-by-year breakdown over the last 6 years with per-location
/// summary statistics.
pub async fn years(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let service = RevenueService::from_pool(pool.get_ref());
    let report = service
        .windowed_report(
            &claims,
            crate::core::Granularity::Year,
            crate::modules::revenue::services::YEAR_WINDOW,
        )
        .await?;

    Ok(HttpResponse::Ok().json(shapes::details_by_location(&report)))
}
