pub mod income_controller;

pub use income_controller::configure;
