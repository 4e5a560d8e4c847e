use serde::Deserialize;

/// File-based defaults for the harness.
///
/// Every field is optional; a value only applies when the matching flag was
/// not given on the command line.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub monitor_cmd: Option<String>,
    pub writer_cmd: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub lines: Option<u64>,
    pub rate: Option<u64>,
    pub warmup: Option<String>,
    pub poll_interval: Option<String>,
    pub idle_threshold: Option<String>,
    pub require_stamp: Option<bool>,
    pub key_probability: Option<f64>,
    pub long_fraction: Option<f64>,
    pub no_color: Option<bool>,
}
