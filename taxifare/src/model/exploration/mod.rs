pub mod exploration_ops;
mod location_row;
mod trip_statistics_row;

pub use location_row::{LocationKind, LocationRow};
pub use trip_statistics_row::TripStatisticsRow;
