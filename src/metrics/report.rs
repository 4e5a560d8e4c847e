/// Percentile indices used by the report.
const PERCENTILE_P50: usize = 50;
const PERCENTILE_P95: usize = 95;
/// Divisor turning a percentile into a sequence index.
const PERCENT_DIVISOR: usize = 100;
/// Nanoseconds per hundredth of a millisecond.
const NS_PER_CENTI_MS: u64 = 10_000;
/// Hundredths in a whole unit.
const CENTI_PER_UNIT: u64 = 100;

/// Order statistics for one latency sequence.
#[derive(Debug, Clone, Copy)]
pub struct PercentileSummary {
    pub p50_ns: i64,
    pub p95_ns: i64,
    pub count: u64,
}

/// Final report of a measurement run.
///
/// `end_to_end` and `processing` are `None` when the corresponding sample
/// sequence is empty; a report with no end-to-end summary means the run
/// produced no measurable data at all.
#[derive(Debug)]
pub struct LatencyReport {
    pub end_to_end: Option<PercentileSummary>,
    pub processing: Option<PercentileSummary>,
    pub stamped: u64,
}

impl LatencyReport {
    /// Human-readable summary lines in output order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(summary) = &self.end_to_end {
            lines.push(format!(
                "End-to-end: p50={} ms, p95={} ms over {} lines",
                format_ms(summary.p50_ns),
                format_ms(summary.p95_ns),
                summary.count
            ));
        }
        if let Some(summary) = &self.processing {
            lines.push(format!(
                "Process: p50={} ms, p95={} ms (from {} stamped lines)",
                format_ms(summary.p50_ns),
                format_ms(summary.p95_ns),
                self.stamped
            ));
        }
        lines
    }
}

/// Summarizes an ascending-sorted sequence, or `None` when it is empty.
pub(super) fn summarize_sorted(values: &[i64]) -> Option<PercentileSummary> {
    if values.is_empty() {
        return None;
    }
    let p50_ns = order_stat(values, PERCENTILE_P50)?;
    let p95_ns = order_stat(values, PERCENTILE_P95)?;
    Some(PercentileSummary {
        p50_ns,
        p95_ns,
        count: values.len() as u64,
    })
}

/// Element at index `floor(n * percentile / 100)` of a sorted sequence.
///
/// For any percentile below 100 the index stays in bounds, so a non-empty
/// sequence always yields a value.
fn order_stat(values: &[i64], percentile: usize) -> Option<i64> {
    let index = values
        .len()
        .saturating_mul(percentile)
        .checked_div(PERCENT_DIVISOR)?;
    values.get(index).or_else(|| values.last()).copied()
}

/// Formats signed nanoseconds as milliseconds with two decimals.
///
/// Kept in integer arithmetic: the value is scaled to hundredths of a
/// millisecond and split at the decimal point.
#[must_use]
pub fn format_ms(ns: i64) -> String {
    let centi_ms = ns.unsigned_abs().checked_div(NS_PER_CENTI_MS).unwrap_or(0);
    let sign = if ns < 0 { "-" } else { "" };
    format!(
        "{}{}.{:02}",
        sign,
        centi_ms.checked_div(CENTI_PER_UNIT).unwrap_or(0),
        centi_ms.checked_rem(CENTI_PER_UNIT).unwrap_or(0)
    )
}
