pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::{PostRow, PostStatusSummary};
pub use repositories::{PostRepository, PostStatusSource};
