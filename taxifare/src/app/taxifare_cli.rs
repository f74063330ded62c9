use crate::model::TaxiFareError;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::Path;
use taxifare_core::util::time_utils::Meridiem;

/// command line tool for training taxi trip models and predicting fares, durations and tips
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TaxiFareCliArguments {
    /// select the operation to run
    #[command(subcommand)]
    pub op: TaxiFareOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TaxiFareOperation {
    /// loads, cleans and splits a trip dataset, then trains and writes every configured model.
    /// prints the training report as JSON.
    Train {
        #[arg(long, help = "path to a .toml or .json training configuration")]
        configuration_file: Option<String>,
        #[arg(long, help = "trip csv, overrides the configured input file")]
        input: Option<String>,
        #[arg(long, help = "model directory, overrides the configured output directory")]
        output_directory: Option<String>,
    },
    /// predicts fare, duration and tip for a trip. each location is either an
    /// address resolved through the places API or a latitude/longitude pair.
    Predict {
        #[arg(long, help = "directory written by the train operation")]
        model_directory: String,
        #[arg(long)]
        origin_address: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        origin_lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        origin_lon: Option<f64>,
        #[arg(long)]
        destination_address: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        destination_lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        destination_lon: Option<f64>,
        /// day of the week, such as Monday or mon
        #[arg(long, default_value_t = String::from("Monday"))]
        day: String,
        /// hour on a 12-hour clock, 1 through 12
        #[arg(long, default_value_t = 12)]
        hour: u32,
        #[arg(long, default_value_t = 0)]
        minute: u32,
        #[arg(long, value_enum, default_value_t = Meridiem::Pm)]
        meridiem: Meridiem,
        /// places API key, only needed when an address is given
        #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
    /// writes trip statistics by weekday and hour plus a sample of trip locations
    Explore {
        #[arg(long, help = "trip csv, optionally gzip-compressed")]
        input: String,
        #[arg(long, default_value_t = String::from("."))]
        output_directory: String,
        /// only keep statistics for this hour of the day (0-23)
        #[arg(long)]
        hour: Option<u32>,
        /// maximum number of location rows
        #[arg(long, default_value_t = 20000)]
        location_limit: usize,
        /// share of raw rows to sample before computing statistics
        #[arg(long, default_value_t = 1.0)]
        sample_fraction: f64,
        /// remove outliers with the default thresholds first
        #[arg(long, default_value_t = false)]
        filter_outliers: bool,
    },
    /// prints address suggestions for some free-text input
    Lookup {
        #[arg(long)]
        address: String,
        #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
        api_key: String,
    },
}

impl TaxiFareOperation {
    pub fn run(&self) -> Result<(), TaxiFareError> {
        match self {
            TaxiFareOperation::Train {
                configuration_file,
                input,
                output_directory,
            } => crate::app::train::run_training(
                configuration_file.as_ref(),
                input.as_ref(),
                output_directory.as_ref(),
            ),
            TaxiFareOperation::Predict {
                model_directory,
                origin_address,
                origin_lat,
                origin_lon,
                destination_address,
                destination_lat,
                destination_lon,
                day,
                hour,
                minute,
                meridiem,
                api_key,
            } => {
                let origin = crate::app::LocationInput::from_arguments(
                    "origin",
                    origin_address.as_ref(),
                    *origin_lat,
                    *origin_lon,
                )?;
                let destination = crate::app::LocationInput::from_arguments(
                    "destination",
                    destination_address.as_ref(),
                    *destination_lat,
                    *destination_lon,
                )?;
                let departure = crate::app::predict::Departure {
                    day: day.clone(),
                    hour: *hour,
                    minute: *minute,
                    meridiem: *meridiem,
                };
                crate::app::predict::run_prediction(
                    Path::new(model_directory),
                    &origin,
                    &destination,
                    &departure,
                    api_key.as_ref(),
                )
            }
            TaxiFareOperation::Explore {
                input,
                output_directory,
                hour,
                location_limit,
                sample_fraction,
                filter_outliers,
            } => crate::app::explore::run_exploration(
                Path::new(input),
                Path::new(output_directory),
                *hour,
                *location_limit,
                *sample_fraction,
                *filter_outliers,
            ),
            TaxiFareOperation::Lookup { address, api_key } => {
                crate::app::lookup::run_lookup(address, api_key)
            }
        }
    }
}
