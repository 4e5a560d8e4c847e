use crate::error::{AppError, AppResult, RunError};

/// Wall-clock time as nanoseconds since the Unix epoch.
///
/// # Errors
///
/// Returns an error when the clock is outside the range `chrono` can
/// express in nanoseconds (roughly the years 1677 to 2262).
pub(crate) fn epoch_ns() -> AppResult<u64> {
    let ns = chrono::Utc::now()
        .timestamp_nanos_opt()
        .ok_or(RunError::ClockRange)?;
    u64::try_from(ns).map_err(|_err| AppError::run(RunError::ClockRange))
}
