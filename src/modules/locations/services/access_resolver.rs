use std::sync::Arc;

use tracing::debug;

use crate::core::{AppError, Result};
use crate::middleware::SessionClaims;
use crate::modules::locations::models::Location;
use crate::modules::locations::repositories::LocationSource;

/// Resolves the caller's authorized location set.
///
/// Every report runs against exactly this set; an unresolvable caller
/// fails the whole request rather than silently falling back to an
/// empty or unrestricted set.
pub struct AccessResolver {
    source: Arc<dyn LocationSource>,
}

impl AccessResolver {
    pub fn new(source: Arc<dyn LocationSource>) -> Self {
        Self { source }
    }

    /// Admin callers see every location; scoped callers see only the
    /// locations assigned to them.
    pub async fn resolve(&self, claims: &SessionClaims) -> Result<Vec<Location>> {
        if claims.is_admin()? {
            let locations = self.source.list_all().await?;
            if locations.is_empty() {
                return Err(AppError::NoLocationsConfigured);
            }
            debug!(count = locations.len(), "resolved admin location set");
            return Ok(locations);
        }

        let user_id = claims.user_id()?;
        let locations = self.source.list_for_user(user_id).await?;
        if locations.is_empty() {
            return Err(AppError::NoLocationsAssigned(user_id));
        }
        debug!(user_id, count = locations.len(), "resolved user location set");
        Ok(locations)
    }
}
