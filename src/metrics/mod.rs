//! Latency sample collection and summarization.
mod recorder;
mod report;


pub use recorder::LatencySamples;
pub use report::{LatencyReport, PercentileSummary, format_ms};
