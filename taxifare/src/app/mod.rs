mod location_input;
mod taxifare_cli;

pub mod explore;
pub mod lookup;
pub mod predict;
pub mod train;

pub use location_input::LocationInput;
pub use taxifare_cli::{TaxiFareCliArguments, TaxiFareOperation};
