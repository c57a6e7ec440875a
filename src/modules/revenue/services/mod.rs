pub mod aggregator;
pub mod revenue_service;
pub mod shapes;

pub use aggregator::aggregate;
pub use revenue_service::{RevenueService, DAY_WINDOW, MONTH_WINDOW, YEAR_WINDOW};
