use std::time::Duration;

use crate::config::parse_duration_value;

pub(crate) fn parse_duration_arg(value: &str) -> Result<Duration, String> {
    parse_duration_value(value)
}

/// Parses a probability/fraction argument and checks it lies in [0, 1].
pub(crate) fn parse_fraction(value: &str) -> Result<f64, String> {
    let fraction: f64 = value
        .trim()
        .parse()
        .map_err(|err| format!("Invalid fraction '{}': {}", value, err))?;
    if !(0.0..=1.0).contains(&fraction) {
        return Err(format!(
            "Fraction must lie within [0.0, 1.0], got '{}'.",
            value
        ));
    }
    Ok(fraction)
}
