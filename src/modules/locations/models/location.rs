use serde::{Deserialize, Serialize};

/// A physical parking location. Immutable reference data owned by an
/// external administration process (`tm_lokasi`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Location {
    pub id: i32,
    /// Operating company ("pengelola")
    pub operator: String,
    /// Human-readable site name
    pub site: String,
    pub address: String,
}

impl Location {
    pub fn new(
        id: i32,
        operator: impl Into<String>,
        site: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            operator: operator.into(),
            site: site.into(),
            address: address.into(),
        }
    }
}
