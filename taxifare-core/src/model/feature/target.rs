use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a predicted trip attribute. variant order is the order in which
/// predictions are reported.
#[derive(
    Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    FareAmount,
    TripDuration,
    TipAmount,
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::FareAmount => write!(f, "fare_amount"),
            Target::TripDuration => write!(f, "trip_duration"),
            Target::TipAmount => write!(f, "tip_amount"),
        }
    }
}
