pub mod facts;
pub mod groups;

pub use facts::{ManualIncomeFact, MemberIncomeFact, ParkingIncomeFact};
pub use groups::{ManualGroup, MemberGroup, ParkingGroup};
