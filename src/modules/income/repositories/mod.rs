pub mod manual_repository;
pub mod member_repository;
pub mod parking_repository;

pub use manual_repository::{ManualFacts, ManualIncomeRepository};
pub use member_repository::{MemberFacts, MemberIncomeRepository};
pub use parking_repository::{ParkingFacts, ParkingIncomeRepository};
