//! Parkdash Parking Revenue Reporting Backend
//!
//! Read-only aggregation service over synced parking income data:
//! windowed revenue reports, trouble tickets, realtime dashboards and
//! gate-post status, scoped to the caller's authorized locations.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::income;
pub use modules::locations;
pub use modules::realtime;
pub use modules::revenue;
