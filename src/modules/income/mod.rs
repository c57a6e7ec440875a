pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::{ManualGroup, MemberGroup, ParkingGroup};
pub use repositories::{
    ManualFacts, ManualIncomeRepository, MemberFacts, MemberIncomeRepository, ParkingFacts,
    ParkingIncomeRepository,
};
