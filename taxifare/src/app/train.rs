use crate::model::{
    training::{training_ops, TrainingConfiguration},
    TaxiFareError,
};

/// runs a training pipeline and prints its report as JSON to stdout.
///
/// # Arguments
/// * configuration_file - optional .toml or .json configuration, defaults otherwise
/// * input - overrides the configured input file
/// * output_directory - overrides the configured output directory
pub fn run_training(
    configuration_file: Option<&String>,
    input: Option<&String>,
    output_directory: Option<&String>,
) -> Result<(), TaxiFareError> {
    let mut config = match configuration_file {
        Some(f) => TrainingConfiguration::try_from(f)?,
        None => TrainingConfiguration::default(),
    };
    if let Some(input) = input {
        config.input_file = input.clone();
    }
    if let Some(output_directory) = output_directory {
        config.output_directory = output_directory.clone();
    }
    log::debug!(
        "run_training with input={}, output_directory={}",
        config.input_file,
        config.output_directory
    );
    let report = training_ops::run(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
