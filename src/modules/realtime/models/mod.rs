pub mod events;

pub use events::{
    DayTotals, LatestEvent, LocationSnapshot, SummaryCards, VehicleGroup, VehicleLocationGroup,
};
