use super::report::{LatencyReport, summarize_sorted};

/// Accumulates per-line latency samples in signed nanoseconds.
///
/// Two sequences are kept: end-to-end latency (harness observation time
/// minus origin stamp) and processing latency (monitor stamp minus origin
/// stamp, present only for stamped lines). Samples stay in arrival order
/// until summarization sorts a copy for the order statistics.
#[derive(Debug, Default)]
pub struct LatencySamples {
    end_to_end_ns: Vec<i64>,
    processing_ns: Vec<i64>,
    lines_seen: u64,
    stamped: u64,
}

impl LatencySamples {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a polled line, measurable or not.
    pub fn note_line(&mut self) {
        self.lines_seen = self.lines_seen.saturating_add(1);
    }

    /// Records one measurable sample.
    ///
    /// Negative latencies (clock skew, out-of-order arrival) are kept as-is
    /// so anomalies stay visible in the summary instead of being clamped
    /// away.
    pub fn record(&mut self, origin_ns: u64, observed_at_ns: u64, monitor_ns: Option<u64>) {
        self.end_to_end_ns.push(delta_ns(observed_at_ns, origin_ns));
        if let Some(stamp_ns) = monitor_ns {
            self.processing_ns.push(delta_ns(stamp_ns, origin_ns));
            self.stamped = self.stamped.saturating_add(1);
        }
    }

    #[must_use]
    pub fn lines_seen(&self) -> u64 {
        self.lines_seen
    }

    #[must_use]
    pub fn stamped(&self) -> u64 {
        self.stamped
    }

    /// True when no measurable end-to-end sample has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end_to_end_ns.is_empty()
    }

    /// Sorts both sequences and computes the percentile report.
    #[must_use]
    pub fn summarize(mut self) -> LatencyReport {
        self.end_to_end_ns.sort_unstable();
        self.processing_ns.sort_unstable();
        LatencyReport {
            end_to_end: summarize_sorted(&self.end_to_end_ns),
            processing: summarize_sorted(&self.processing_ns),
            stamped: self.stamped,
        }
    }
}

/// Signed difference of two epoch-nanosecond stamps.
fn delta_ns(end_ns: u64, start_ns: u64) -> i64 {
    let end = i64::try_from(end_ns).unwrap_or(i64::MAX);
    let start = i64::try_from(start_ns).unwrap_or(i64::MAX);
    end.saturating_sub(start)
}
