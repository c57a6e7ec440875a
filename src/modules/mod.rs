pub mod income;
pub mod locations;
pub mod posts;
pub mod realtime;
pub mod revenue;
pub mod traffic;
pub mod trouble;
