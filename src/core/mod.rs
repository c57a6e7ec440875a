pub mod error;
pub mod period;
pub mod sql;

pub use error::{AppError, Result};
pub use period::{bucket_sequence, window_start, Granularity};
