use std::sync::Arc;

use sqlx::MySqlPool;
use tracing::info;

use crate::core::{bucket_sequence, window_start, AppError, Granularity, Result};
use crate::middleware::SessionClaims;
use crate::modules::income::repositories::{ManualFacts, ManualIncomeRepository};
use crate::modules::locations::repositories::LocationRepository;
use crate::modules::locations::services::AccessResolver;
use crate::modules::revenue::models::AggregateReport;
use crate::modules::revenue::services::aggregate;

/// Problem-amount reports read only the manual income table, so the
/// window anchors on that table's latest date rather than the parking
/// table's. Periods without manual rows appear as explicit zeros.
pub struct TroubleService {
    resolver: AccessResolver,
    manual: Arc<dyn ManualFacts>,
}

impl TroubleService {
    pub fn new(resolver: AccessResolver, manual: Arc<dyn ManualFacts>) -> Self {
        Self { resolver, manual }
    }

    pub fn from_pool(pool: &MySqlPool) -> Self {
        Self::new(
            AccessResolver::new(Arc::new(LocationRepository::new(pool.clone()))),
            Arc::new(ManualIncomeRepository::new(pool.clone())),
        )
    }

    /// Report over the last `window_size` buckets ending at the latest
    /// manual income date.
    pub async fn windowed_report(
        &self,
        claims: &SessionClaims,
        granularity: Granularity,
        window_size: usize,
    ) -> Result<AggregateReport> {
        let locations = self.resolver.resolve(claims).await?;
        let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();

        let reference = self
            .manual
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
            "aggregating trouble report"
        );

        let manual = self
            .manual
            .grouped_sums(&ids, start, reference, granularity)
            .await?;

        Ok(aggregate(
            &locations,
            &periods,
            granularity,
            vec![],
            vec![],
            manual,
        ))
    }
}
