pub mod post;

pub use post::{PostRow, PostStatusSummary};
