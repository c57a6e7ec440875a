pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Location;
pub use repositories::{LocationRepository, LocationSource};
pub use services::AccessResolver;
