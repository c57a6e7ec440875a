pub mod bucket;
pub mod summary;

pub use bucket::{AggregateReport, LocationSeries, RevenueBucket};
pub use summary::{FieldStats, SummaryStats};
