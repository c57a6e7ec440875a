use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::MySqlPool;

use crate::core::{Granularity, Result};
use crate::middleware::SessionClaims;
use crate::modules::revenue::services::shapes::{self, TrendPoint};
use crate::modules::revenue::services::{RevenueService, MONTH_WINDOW, YEAR_WINDOW};

/// Trend entry response structure
#[derive(Debug, Serialize)]
pub struct TrendPointResponse {
    pub period: String,
    pub cash: String, // Decimal as string for JSON precision
    pub prepaid: String,
    pub member: String,
    pub manual: String,
    pub problem: String,
    pub total: String,
}

impl From<TrendPoint> for TrendPointResponse {
    fn from(point: TrendPoint) -> Self {
        Self {
            period: point.period,
            cash: point.cash.to_string(),
            prepaid: point.prepaid.to_string(),
            member: point.member.to_string(),
            manual: point.manual.to_string(),
            problem: point.problem.to_string(),
            total: point.total.to_string(),
        }
    }
}

async fn trend_combined(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
    granularity: Granularity,
    window_size: usize,
) -> Result<HttpResponse> {
    let service = RevenueService::from_pool(pool.get_ref());
    let report = service
        .windowed_report(&claims, granularity, window_size)
        .await?;

    let points: Vec<TrendPointResponse> = shapes::combined(&report)
        .into_iter()
        .map(TrendPointResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(points))
}

async fn trend_by_location(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
    granularity: Granularity,
    window_size: usize,
) -> Result<HttpResponse> {
    let service = RevenueService::from_pool(pool.get_ref());
    let report = service
        .windowed_report(&claims, granularity, window_size)
        .await?;

    let by_site: BTreeMap<String, Vec<TrendPointResponse>> = shapes::by_location(&report)
        .into_iter()
        .map(|(site, points)| {
            (
                site,
                points.into_iter().map(TrendPointResponse::from).collect(),
            )
        })
        .collect();

    Ok(HttpResponse::Ok().json(by_site))
}

/// GET /api/revenue/trends/months: last 6 months, all locations combined
pub async fn months_all(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    trend_combined(pool, claims, Granularity::Month, MONTH_WINDOW).await
}

/// GET /api/revenue/trends/months/bylocations: last 6 months per site
pub async fn months_by_locations(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    trend_by_location(pool, claims, Granularity::Month, MONTH_WINDOW).await
}

/// GET /api/revenue/trends/years: last 6 years, all locations combined
pub async fn years_all(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    trend_combined(pool, claims, Granularity::Year, YEAR_WINDOW).await
}

/// GET /api/revenue/trends/years/bylocations: last 6 years per site
pub async fn years_by_locations(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    trend_by_location(pool, claims, Granularity::Year, YEAR_WINDOW).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_trend_point_response_serialization() {
        let response = TrendPointResponse::from(TrendPoint {
            period: "2025-03".to_string(),
            cash: dec!(150000),
            prepaid: dec!(25000.50),
            member: dec!(0),
            manual: dec!(1000),
            problem: dec!(500),
            total: dec!(175500.50),
        });

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"period\":\"2025-03\""));
        assert!(json.contains("\"prepaid\":\"25000.50\""));
        assert!(json.contains("\"total\":\"175500.50\""));
    }
}
