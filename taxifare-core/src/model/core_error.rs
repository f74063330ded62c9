use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("trip record is missing required field '{0}'")]
    MissingField(String),
    #[error("field '{field}' expected a non-negative whole number, found {value}")]
    InvalidCount { field: String, value: f64 },
    #[error("unable to parse datetime '{0}'")]
    InvalidDatetime(String),
    #[error("unknown day of week '{0}', expected a name such as 'Monday'")]
    InvalidDayOfWeek(String),
    #[error("hour {0} is not on a 12-hour clock, must be in [1, 12]")]
    InvalidHour(u32),
    #[error("invalid prediction request: {0}")]
    InvalidRequest(String),
}
