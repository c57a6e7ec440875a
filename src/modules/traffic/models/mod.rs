pub mod hourly;

pub use hourly::{HourlyTraffic, HOURS_PER_DAY};
