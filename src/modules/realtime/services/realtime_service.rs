use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Days;
use sqlx::MySqlPool;
use tracing::info;

use crate::core::{bucket_sequence, window_start, AppError, Granularity, Result};
use crate::middleware::SessionClaims;
use crate::modules::income::repositories::{
    ManualFacts, ManualIncomeRepository, MemberFacts, MemberIncomeRepository, ParkingFacts,
    ParkingIncomeRepository,
};
use crate::modules::locations::repositories::LocationRepository;
use crate::modules::locations::services::AccessResolver;
use crate::modules::realtime::models::{
    LocationSnapshot, SummaryCards, VehicleGroup, VehicleLocationGroup,
};
use crate::modules::realtime::repositories::{RealtimeEvents, RealtimeRepository};
use crate::modules::revenue::services::aggregate;

const HISTORICAL_DAYS: usize = 6;

/// Live-dashboard reads over the realtime event table. "Now" is the
/// latest event timestamp in the authorized set, never the wall clock,
/// so the numbers stay meaningful when ingestion lags.
pub struct RealtimeService {
    resolver: AccessResolver,
    events: Arc<dyn RealtimeEvents>,
    parking: Arc<dyn ParkingFacts>,
    member: Arc<dyn MemberFacts>,
    manual: Arc<dyn ManualFacts>,
}

impl RealtimeService {
    pub fn new(
        resolver: AccessResolver,
        events: Arc<dyn RealtimeEvents>,
        parking: Arc<dyn ParkingFacts>,
        member: Arc<dyn MemberFacts>,
        manual: Arc<dyn ManualFacts>,
    ) -> Self {
        Self {
            resolver,
            events,
            parking,
            member,
            manual,
        }
    }

    pub fn from_pool(pool: &MySqlPool) -> Self {
        Self::new(
            AccessResolver::new(Arc::new(LocationRepository::new(pool.clone()))),
            Arc::new(RealtimeRepository::new(pool.clone())),
            Arc::new(ParkingIncomeRepository::new(pool.clone())),
            Arc::new(MemberIncomeRepository::new(pool.clone())),
            Arc::new(ManualIncomeRepository::new(pool.clone())),
        )
    }

    /// Per-vehicle-type totals for the reference date, all locations
    /// combined.
    pub async fn vehicle_breakdown(&self, claims: &SessionClaims) -> Result<Vec<VehicleGroup>> {
        let locations = self.resolver.resolve(claims).await?;
        let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

        let reference = self
            .events
            .latest_time(&ids)
            .await?
            .ok_or(AppError::NoDataAvailable)?;

        self.events.vehicle_totals(&ids, reference).await
    }

    /// Per-vehicle-type totals for the reference date, keyed by site.
    /// Every authorized site is present; sites without events for the
    /// reference date map to an empty list.
    pub async fn vehicle_breakdown_by_site(
        &self,
        claims: &SessionClaims,
    ) -> Result<BTreeMap<String, Vec<VehicleLocationGroup>>> {
        let locations = self.resolver.resolve(claims).await?;
        let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

        let reference = self
            .events
            .latest_time(&ids)
            .await?
            .ok_or(AppError::NoDataAvailable)?;

        let groups = self.events.vehicle_totals_by_location(&ids, reference).await?;

        let mut by_site: BTreeMap<String, Vec<VehicleLocationGroup>> = locations
            .iter()
            .map(|l| (l.site.clone(), Vec::new()))
            .collect();
        for group in groups {
            if let Some(location) = locations.iter().find(|l| l.id == group.location_id) {
                by_site
                    .entry(location.site.clone())
                    .or_default()
                    .push(group);
            }
        }

        Ok(by_site)
    }

    /// Latest-day totals per location. Each location is anchored on its
    /// own most recent event; locations with no events at all are
    /// omitted.
    pub async fn location_snapshots(
        &self,
        claims: &SessionClaims,
    ) -> Result<Vec<LocationSnapshot>> {
        let locations = self.resolver.resolve(claims).await?;

        let mut snapshots = Vec::with_capacity(locations.len());
        for location in &locations {
            let Some(latest) = self.events.latest_event(location.id).await? else {
                continue;
            };

            let totals = self
                .events
                .location_day_totals(location.id, latest.date, latest.time)
                .await?;

            snapshots.push(LocationSnapshot {
                site: location.site.clone(),
                date: latest.date,
                time: latest.time,
                transactions: totals.transactions(),
                revenue: totals.revenue(),
            });
        }

        Ok(snapshots)
    }

    /// Dashboard header numbers: today's figures from the event table at
    /// the reference timestamp, plus the prior six settled days from the
    /// income tables. The reference date itself is excluded from the
    /// historical range, so nothing is counted twice.
    pub async fn summary_cards(&self, claims: &SessionClaims) -> Result<SummaryCards> {
        let locations = self.resolver.resolve(claims).await?;
        let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

        let reference = self
            .events
            .latest_time(&ids)
            .await?
            .ok_or(AppError::NoDataAvailable)?;
        let today = reference.date();

        let today_totals = self.events.day_totals(&ids, today, reference).await?;

        let end = today
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| AppError::internal("reference date underflow"))?;
        let periods = bucket_sequence(Granularity::Day, HISTORICAL_DAYS, end);
        let start = window_start(Granularity::Day, HISTORICAL_DAYS, end);

        info!(%reference, %start, %end, locations = locations.len(), "building summary cards");

        let (parking, member, manual) = tokio::try_join!(
            self.parking.grouped_sums(&ids, start, end, Granularity::Day),
            self.member.grouped_sums(&ids, start, end, Granularity::Day),
            self.manual.grouped_sums(&ids, start, end, Granularity::Day),
        )?;

        let report = aggregate(&locations, &periods, Granularity::Day, parking, member, manual);

        let mut historical_revenue = rust_decimal::Decimal::ZERO;
        let mut historical_transactions = rust_decimal::Decimal::ZERO;
        for series in &report.series {
            for bucket in &series.buckets {
                historical_revenue += bucket.total_revenue();
                historical_transactions += bucket.total_qty();
            }
        }

        Ok(SummaryCards {
            total_revenue: historical_revenue + today_totals.revenue(),
            revenue_today: today_totals.revenue(),
            total_transactions: historical_transactions + today_totals.transactions(),
            transactions_today: today_totals.transactions(),
            time: reference,
        })
    }
}
