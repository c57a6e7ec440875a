use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::middleware::SessionClaims;
use crate::modules::realtime::models::{
    LocationSnapshot, SummaryCards, VehicleGroup, VehicleLocationGroup,
};
use crate::modules::realtime::services::RealtimeService;

/// Per-vehicle-type entry of the realtime breakdown
#[derive(Debug, Serialize)]
pub struct VehicleBreakdownResponse {
    pub vehicle_type: String,
    pub transactions: String, // Decimal as string for JSON precision
    pub revenue: String,
}

impl From<VehicleGroup> for VehicleBreakdownResponse {
    fn from(group: VehicleGroup) -> Self {
        Self {
            vehicle_type: group.vehicle_type,
            transactions: group.transactions.to_string(),
            revenue: group.revenue.to_string(),
        }
    }
}

impl From<VehicleLocationGroup> for VehicleBreakdownResponse {
    fn from(group: VehicleLocationGroup) -> Self {
        Self {
            vehicle_type: group.vehicle_type,
            transactions: group.transactions.to_string(),
            revenue: group.revenue.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocationSnapshotResponse {
    pub site: String,
    pub date: NaiveDate,
    pub time: NaiveDateTime,
    pub transactions: String,
    pub revenue: String,
}

impl From<LocationSnapshot> for LocationSnapshotResponse {
    fn from(snapshot: LocationSnapshot) -> Self {
        Self {
            site: snapshot.site,
            date: snapshot.date,
            time: snapshot.time,
            transactions: snapshot.transactions.to_string(),
            revenue: snapshot.revenue.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryCardsResponse {
    pub total_revenue: String,
    pub revenue_today: String,
    pub total_transactions: String,
    pub transactions_today: String,
    pub time: NaiveDateTime,
}

impl From<SummaryCards> for SummaryCardsResponse {
    fn from(cards: SummaryCards) -> Self {
        Self {
            total_revenue: cards.total_revenue.to_string(),
            revenue_today: cards.revenue_today.to_string(),
            total_transactions: cards.total_transactions.to_string(),
            transactions_today: cards.transactions_today.to_string(),
            time: cards.time,
        }
    }
}

/// GET /api/realtime: per-vehicle-type totals for the reference date
pub async fn breakdown(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let service = RealtimeService::from_pool(pool.get_ref());
    let groups = service.vehicle_breakdown(&claims).await?;

    let rows: Vec<VehicleBreakdownResponse> = groups
        .into_iter()
        .map(VehicleBreakdownResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /api/realtime/bylocations: same breakdown, keyed by site
pub async fn breakdown_by_locations(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let service = RealtimeService::from_pool(pool.get_ref());
    let by_site = service.vehicle_breakdown_by_site(&claims).await?;

    let response: BTreeMap<String, Vec<VehicleBreakdownResponse>> = by_site
        .into_iter()
        .map(|(site, groups)| {
            (
                site,
                groups
                    .into_iter()
                    .map(VehicleBreakdownResponse::from)
                    .collect(),
            )
        })
        .collect();

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/realtime/locations: latest-day totals per location
pub async fn location_snapshots(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let service = RealtimeService::from_pool(pool.get_ref());
    let snapshots = service.location_snapshots(&claims).await?;

    let rows: Vec<LocationSnapshotResponse> = snapshots
        .into_iter()
        .map(LocationSnapshotResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /api/summary/cards: dashboard header numbers
pub async fn summary_cards(
    pool: web::Data<MySqlPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let service = RealtimeService::from_pool(pool.get_ref());
    let cards = service.summary_cards(&claims).await?;

    Ok(HttpResponse::Ok().json(SummaryCardsResponse::from(cards)))
}
