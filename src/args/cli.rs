use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use super::defaults::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use super::parsers::{parse_duration_arg, parse_fraction};

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Append timestamped lines to a file at a controlled rate
    Generate(GenerateArgs),
}

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// File the generated lines are appended to
    #[arg(long)]
    pub path: String,

    /// Total number of lines to append
    #[arg(long, default_value_t = 10_000)]
    pub lines: u64,

    /// Target emission rate in lines per second (0 means unpaced)
    #[arg(long, default_value_t = 2_000)]
    pub rate: u64,

    /// Probability that a line contains the match key
    #[arg(long = "key-probability", value_parser = parse_fraction, default_value = "0.5")]
    pub key_probability: f64,

    /// Fraction of lines padded to a long payload
    #[arg(long = "long-fraction", value_parser = parse_fraction, default_value = "0.0")]
    pub long_fraction: f64,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Latency benchmark harness for log-filtering pipelines - spawns a monitor under test and a paced load generator, tails the filtered output, and reports p50/p95 end-to-end and processing latency."
)]
pub struct HarnessArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Shell command that starts the monitor under test
    #[arg(long = "monitor-cmd", env = "MONITOR_CMD")]
    pub monitor_cmd: Option<String>,

    /// Shell command that generates load (defaults to the built-in generator)
    #[arg(long = "writer-cmd")]
    pub writer_cmd: Option<String>,

    /// Input file the load generator appends to
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: String,

    /// Output file written by the monitor under test
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    /// Number of lines to generate
    #[arg(long, default_value_t = 10_000)]
    pub lines: u64,

    /// Target load rate in lines per second (0 means unpaced)
    #[arg(long, default_value_t = 2_000)]
    pub rate: u64,

    /// Warm-up delay between monitor start and load start (supports ms/s/m/h)
    #[arg(long, value_parser = parse_duration_arg, default_value = "300ms")]
    pub warmup: Duration,

    /// Interval between output-file polls (supports ms/s/m/h)
    #[arg(long = "poll-interval", value_parser = parse_duration_arg, default_value = "10ms")]
    pub poll_interval: Duration,

    /// Idle window after the generator exits before the run counts as drained
    #[arg(long = "idle-threshold", value_parser = parse_duration_arg, default_value = "2s")]
    pub idle_threshold: Duration,

    /// Require at least one #MON_TS-stamped sample for the run to be valid
    #[arg(long = "require-stamp")]
    pub require_stamp: bool,

    /// Probability that a generated line contains the match key
    #[arg(long = "key-probability", value_parser = parse_fraction, default_value = "0.5")]
    pub key_probability: f64,

    /// Fraction of generated lines padded to a long payload
    #[arg(long = "long-fraction", value_parser = parse_fraction, default_value = "0.0")]
    pub long_fraction: f64,

    /// Path to a TOML/JSON config file
    #[arg(long)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
