use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use sqlx::MySqlPool;

use crate::core::{Granularity, Result};
use crate::middleware::SessionClaims;
use crate::modules::revenue::controllers::comparison_controller::LocationTotalResponse;
use crate::modules::revenue::services::shapes;
use crate::modules::revenue::services::{DAY_WINDOW, MONTH_WINDOW, YEAR_WINDOW};
use crate::modules::trouble::services::TroubleService;

async fn trouble(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
    granularity: Granularity,
    window_size: usize,
) -> Result<HttpResponse> {
    let service = TroubleService::from_pool(pool.get_ref());
    let report = service
        .windowed_report(&claims, granularity, window_size)
        .await?;

    let by_period: BTreeMap<String, Vec<LocationTotalResponse>> =
        shapes::problems_by_period(&report)
            .into_iter()
            .map(|(period, totals)| {
                (
                    period,
                    totals.into_iter().map(LocationTotalResponse::from).collect(),
                )
            })
            .collect();

    Ok(HttpResponse::Ok().json(by_period))
}

/// GET /api/trouble/days: problem amounts per location for the last
/// 7 days of manual income data
pub async fn days(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    trouble(pool, claims, Granularity::Day, DAY_WINDOW).await
}

/// GET /api/trouble/months: last 6 months
pub async fn months(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    trouble(pool, claims, Granularity::Month, MONTH_WINDOW).await
}

/// GET /api/trouble/years: last 6 years
pub async fn years(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    trouble(pool, claims, Granularity::Year, YEAR_WINDOW).await
}
