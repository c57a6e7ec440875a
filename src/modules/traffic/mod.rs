pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::HourlyTraffic;
pub use repositories::{TrafficCounts, TrafficRepository};
