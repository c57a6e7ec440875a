// Resolver behavior against an in-memory location source: admin callers
// get the full set, scoped callers get their assignments, and empty
// results are hard errors rather than empty reports.

use std::sync::Arc;

use async_trait::async_trait;
use parkdash::core::{AppError, Result};
use parkdash::middleware::{parse_session, SessionClaims};
use parkdash::modules::locations::models::Location;
use parkdash::modules::locations::repositories::LocationSource;
use parkdash::modules::locations::services::AccessResolver;

struct FakeLocations {
    all: Vec<Location>,
    assignments: Vec<(i64, i32)>,
}

#[async_trait]
impl LocationSource for FakeLocations {
    async fn list_all(&self) -> Result<Vec<Location>> {
        Ok(self.all.clone())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Location>> {
        let ids: Vec<i32> = self
            .assignments
            .iter()
            .filter(|(u, _)| *u == user_id)
            .map(|(_, l)| *l)
            .collect();
        Ok(self
            .all
            .iter()
            .filter(|l| ids.contains(&l.id))
            .cloned()
            .collect())
    }
}

fn resolver(all: Vec<Location>, assignments: Vec<(i64, i32)>) -> AccessResolver {
    AccessResolver::new(Arc::new(FakeLocations { all, assignments }))
}

fn three_locations() -> Vec<Location> {
    vec![
        Location::new(1, "Operator A", "Site A", "Jl. Sudirman 10"),
        Location::new(2, "Operator B", "Site B", "Jl. Thamrin 5"),
        Location::new(3, "Operator C", "Site C", "Jl. Gatot Subroto 7"),
    ]
}

fn claims(id: Option<i64>, admin: Option<i64>) -> SessionClaims {
    SessionClaims { id, admin }
}

#[tokio::test]
async fn test_admin_sees_all_locations() {
    let resolver = resolver(three_locations(), vec![]);
    let locations = resolver.resolve(&claims(Some(7), Some(1))).await.unwrap();

    assert_eq!(locations.len(), 3);
    assert_eq!(locations[0].id, 1);
}

#[tokio::test]
async fn test_scoped_user_sees_only_assignments() {
    let resolver = resolver(three_locations(), vec![(7, 1), (7, 3), (8, 2)]);
    let locations = resolver.resolve(&claims(Some(7), Some(0))).await.unwrap();

    let ids: Vec<i32> = locations.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_admin_with_no_locations_configured_is_an_error() {
    let resolver = resolver(vec![], vec![]);
    let err = resolver
        .resolve(&claims(Some(7), Some(1)))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NoLocationsConfigured));
}

#[tokio::test]
async fn test_user_with_no_assignments_is_an_error() {
    let resolver = resolver(three_locations(), vec![(8, 2)]);
    let err = resolver
        .resolve(&claims(Some(7), Some(0)))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NoLocationsAssigned(7)));
}

#[tokio::test]
async fn test_missing_admin_flag_is_an_access_error() {
    let resolver = resolver(three_locations(), vec![]);
    let err = resolver.resolve(&claims(Some(7), None)).await.unwrap_err();

    assert!(matches!(err, AppError::Access(_)));
}

#[tokio::test]
async fn test_non_admin_without_user_id_is_an_access_error() {
    let resolver = resolver(three_locations(), vec![]);
    let err = resolver.resolve(&claims(None, Some(0))).await.unwrap_err();

    assert!(matches!(err, AppError::Access(_)));
}

#[tokio::test]
async fn test_claims_parsed_from_raw_session_json() {
    let claims = parse_session(r#"{"id": 42, "admin": 0}"#).unwrap();
    let resolver = resolver(three_locations(), vec![(42, 2)]);

    let locations = resolver.resolve(&claims).await.unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].site, "Site B");
}
