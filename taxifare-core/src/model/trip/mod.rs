mod engineered_trip;
mod raw_trip_record;
mod trip_record;

pub use engineered_trip::EngineeredTrip;
pub use raw_trip_record::RawTripRecord;
pub use trip_record::TripRecord;
