pub mod traffic_repository;

pub use traffic_repository::{TrafficCounts, TrafficRepository};
