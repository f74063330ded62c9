mod core_error;
pub mod feature;
pub mod request;
pub mod trip;

pub use core_error::CoreError;
