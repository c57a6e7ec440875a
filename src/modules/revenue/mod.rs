pub mod controllers;
pub mod models;
pub mod services;

pub use models::{AggregateReport, LocationSeries, RevenueBucket, SummaryStats};
pub use services::RevenueService;
