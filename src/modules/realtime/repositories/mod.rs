pub mod realtime_repository;

pub use realtime_repository::{RealtimeEvents, RealtimeRepository};
