use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use sqlx::MySqlPool;
use tracing::info;

use crate::core::{bucket_sequence, window_start, AppError, Granularity, Result};
use crate::middleware::SessionClaims;
use crate::modules::income::repositories::{
    ManualFacts, ManualIncomeRepository, MemberFacts, MemberIncomeRepository, ParkingFacts,
    ParkingIncomeRepository,
};
use crate::modules::locations::models::Location;
use crate::modules::locations::repositories::LocationRepository;
use crate::modules::locations::services::AccessResolver;
use crate::modules::revenue::models::AggregateReport;
use crate::modules::revenue::services::aggregator::aggregate;

/// Fixed report windows. Day-level reports cover the last 7 days,
/// month- and year-level reports the last 6 periods.
pub const DAY_WINDOW: usize = 7;
pub const MONTH_WINDOW: usize = 6;
pub const YEAR_WINDOW: usize = 6;

/// Orchestrates one report request: resolve access, anchor the window on
/// the latest parking data, read the three fact sources and run the
/// aggregation engine. Stateless; holds only read handles.
pub struct RevenueService {
    resolver: AccessResolver,
    parking: Arc<dyn ParkingFacts>,
    member: Arc<dyn MemberFacts>,
    manual: Arc<dyn ManualFacts>,
}

impl RevenueService {
    pub fn new(
        resolver: AccessResolver,
        parking: Arc<dyn ParkingFacts>,
        member: Arc<dyn MemberFacts>,
        manual: Arc<dyn ManualFacts>,
    ) -> Self {
        Self {
            resolver,
            parking,
            member,
            manual,
        }
    }

    pub fn from_pool(pool: &MySqlPool) -> Self {
        Self::new(
            AccessResolver::new(Arc::new(LocationRepository::new(pool.clone()))),
            Arc::new(ParkingIncomeRepository::new(pool.clone())),
            Arc::new(MemberIncomeRepository::new(pool.clone())),
            Arc::new(ManualIncomeRepository::new(pool.clone())),
        )
    }

    /// Report over the last `window_size` buckets ending at the latest
    /// available parking data date.
    pub async fn windowed_report(
        &self,
        claims: &SessionClaims,
        granularity: Granularity,
        window_size: usize,
    ) -> Result<AggregateReport> {
        let locations = self.resolver.resolve(claims).await?;
        let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

        let reference = self
            .parking
            .latest_date(&ids)
            .await?
            .ok_or(AppError::NoDataAvailable)?;

        let periods = bucket_sequence(granularity, window_size, reference);
        let start = window_start(granularity, window_size, reference);
        info!(
            ?granularity,
            window_size,
            %reference,
            locations = locations.len(),
            "aggregating revenue report"
        );

        self.fetch_report(&locations, &periods, granularity, start, reference)
            .await
    }

    /// Month-by-month report for one calendar year. For the year of the
    /// latest data the sequence stops at the reference month, so the
    /// report never zero-fills months that have not happened yet.
    pub async fn year_detail_report(
        &self,
        claims: &SessionClaims,
        year: i32,
    ) -> Result<AggregateReport> {
        // Years outside chrono's calendar range are presentation-layer
        // garbage, not a data condition
        if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
            return Err(AppError::invalid_filter(format!(
                "Year {year} is out of range"
            )));
        }

        let locations = self.resolver.resolve(claims).await?;
        let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

        let reference = self
            .parking
            .latest_date(&ids)
            .await?
            .ok_or(AppError::NoDataAvailable)?;

        if year > reference.year() {
            return Err(AppError::NoDataAvailable);
        }

        let last_month = if year == reference.year() {
            reference.month()
        } else {
            12
        };
        let periods: Vec<NaiveDate> = (1..=last_month)
            .map(|month| {
                NaiveDate::from_ymd_opt(year, month, 1).expect("first day of month is valid")
            })
            .collect();

        let end = if year == reference.year() {
            reference
        } else {
            NaiveDate::from_ymd_opt(year, 12, 31).expect("last day of year is valid")
        };

        self.fetch_report(&locations, &periods, Granularity::Month, periods[0], end)
            .await
    }

    async fn fetch_report(
        &self,
        locations: &[Location],
        periods: &[NaiveDate],
        granularity: Granularity,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AggregateReport> {
        let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

        let (parking, member, manual) = tokio::try_join!(
            self.parking.grouped_sums(&ids, start, end, granularity),
            self.member.grouped_sums(&ids, start, end, granularity),
            self.manual.grouped_sums(&ids, start, end, granularity),
        )?;

        Ok(aggregate(
            locations, periods, granularity, parking, member, manual,
        ))
    }
}
