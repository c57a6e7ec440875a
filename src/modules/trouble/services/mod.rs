pub mod trouble_service;

pub use trouble_service::TroubleService;
