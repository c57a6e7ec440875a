use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::MySqlPool;

use crate::core::{Granularity, Result};
use crate::middleware::SessionClaims;
use crate::modules::revenue::services::shapes::{self, LocationTotal};
use crate::modules::revenue::services::{RevenueService, DAY_WINDOW, MONTH_WINDOW, YEAR_WINDOW};

/// Per-location entry under one period key
#[derive(Debug, Serialize)]
pub struct LocationTotalResponse {
    pub site: String,
    pub total: String, // Decimal as string for JSON precision
}

impl From<LocationTotal> for LocationTotalResponse {
    fn from(entry: LocationTotal) -> Self {
        Self {
            site: entry.site,
            total: entry.total.to_string(),
        }
    }
}

async fn comparison(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
    granularity: Granularity,
    window_size: usize,
) -> Result<HttpResponse> {
    let service = RevenueService::from_pool(pool.get_ref());
    let report = service
        .windowed_report(&claims, granularity, window_size)
        .await?;

    let by_period: BTreeMap<String, Vec<LocationTotalResponse>> = shapes::by_period(&report)
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

/// GET /api/revenue/comparison/days: every location's total for each of
/// the last 7 days
pub async fn days(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    comparison(pool, claims, Granularity::Day, DAY_WINDOW).await
}

/// GET /api/revenue/comparison/months: last 6 months
pub async fn months(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    comparison(pool, claims, Granularity::Month, MONTH_WINDOW).await
}

/// GET /api/revenue/comparison/years: last 6 years
pub async fn years(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    comparison(pool, claims, Granularity::Year, YEAR_WINDOW).await
}
