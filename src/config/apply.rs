use std::time::Duration;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::HarnessArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::parse::parse_duration_value;
use super::types::ConfigFile;

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn parse_duration_field(value: &str, field: &'static str) -> AppResult<Duration> {
    parse_duration_value(value)
        .map_err(|message| AppError::config(ConfigError::InvalidDuration { field, message }))
}

fn check_fraction(value: f64, field: &'static str) -> AppResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::config(ConfigError::FractionOutOfRange {
            field,
            value,
        }))
    }
}

/// Merges file-config values into `args` for every flag the user did not
/// pass on the command line.
///
/// # Errors
///
/// Returns an error when a config value fails validation (bad duration
/// syntax, fraction out of range).
pub fn apply_config(
    args: &mut HarnessArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "monitor_cmd")
        && let Some(command) = config.monitor_cmd.clone()
    {
        args.monitor_cmd = Some(command);
    }

    if !is_cli(matches, "writer_cmd")
        && let Some(command) = config.writer_cmd.clone()
    {
        args.writer_cmd = Some(command);
    }

    if !is_cli(matches, "input")
        && let Some(path) = config.input.clone()
    {
        args.input = path;
    }

    if !is_cli(matches, "output")
        && let Some(path) = config.output.clone()
    {
        args.output = path;
    }

    if !is_cli(matches, "lines")
        && let Some(value) = config.lines
    {
        args.lines = value;
    }

    if !is_cli(matches, "rate")
        && let Some(value) = config.rate
    {
        args.rate = value;
    }

    if !is_cli(matches, "warmup")
        && let Some(value) = config.warmup.as_deref()
    {
        args.warmup = parse_duration_field(value, "warmup")?;
    }

    if !is_cli(matches, "poll_interval")
        && let Some(value) = config.poll_interval.as_deref()
    {
        args.poll_interval = parse_duration_field(value, "poll_interval")?;
    }

    if !is_cli(matches, "idle_threshold")
        && let Some(value) = config.idle_threshold.as_deref()
    {
        args.idle_threshold = parse_duration_field(value, "idle_threshold")?;
    }

    if !is_cli(matches, "require_stamp")
        && let Some(value) = config.require_stamp
    {
        args.require_stamp = value;
    }

    if !is_cli(matches, "key_probability")
        && let Some(value) = config.key_probability
    {
        args.key_probability = check_fraction(value, "key_probability")?;
    }

    if !is_cli(matches, "long_fraction")
        && let Some(value) = config.long_fraction
    {
        args.long_fraction = check_fraction(value, "long_fraction")?;
    }

    if !is_cli(matches, "no_color")
        && let Some(value) = config.no_color
    {
        args.no_color = value;
    }

    Ok(())
}
