//! Built-in load generator behind the `generate` subcommand.
//!
//! Appends `<epoch_ns>\t<payload>` lines to the target file at a paced
//! rate. A configurable fraction of lines carries the monitor's match key,
//! and another fraction is padded into long lines, so the monitor under
//! test sees a workload with both matching and non-matching traffic.

use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use tokio::io::AsyncWriteExt;

use crate::args::{DEFAULT_MATCH_KEY, GenerateArgs};
use crate::clock::epoch_ns;
use crate::error::{AppError, AppResult, RunError};

/// Payload for lines that should pass the monitor's filter unmatched.
const FILLER_PAYLOAD: &str = "plain request served";
/// Padding repetitions used to build a long line.
const LONG_LINE_REPEAT: usize = 64;
/// Nanoseconds per second, for rate pacing.
const NS_PER_SEC: u64 = 1_000_000_000;

/// Runs the generator to completion.
///
/// # Errors
///
/// Returns an error when the target file cannot be opened or appended to,
/// or when the system clock cannot produce an epoch-nanosecond stamp.
pub(crate) async fn run_generate(args: &GenerateArgs) -> AppResult<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.path)
        .await
        .map_err(|err| {
            AppError::run(RunError::PrepareFile {
                path: PathBuf::from(&args.path),
                source: err,
            })
        })?;

    let mut ticker = pacing_gap(args.rate).map(tokio::time::interval);
    let mut rng = rand::thread_rng();

    tracing::info!(
        path = %args.path,
        lines = args.lines,
        rate = args.rate,
        "generating load"
    );

    for _ in 0..args.lines {
        if let Some(interval) = ticker.as_mut() {
            interval.tick().await;
        }
        let line = build_line(
            epoch_ns()?,
            &mut rng,
            args.key_probability,
            args.long_fraction,
        );
        file.write_all(line.as_bytes()).await.map_err(|err| {
            AppError::run(RunError::WriteLine {
                path: PathBuf::from(&args.path),
                source: err,
            })
        })?;
    }
    file.flush().await.map_err(|err| {
        AppError::run(RunError::WriteLine {
            path: PathBuf::from(&args.path),
            source: err,
        })
    })?;
    Ok(())
}

/// Gap between emitted lines, or `None` for an unpaced burst.
fn pacing_gap(rate: u64) -> Option<Duration> {
    let gap_ns = NS_PER_SEC.checked_div(rate)?;
    if gap_ns == 0 {
        return None;
    }
    Some(Duration::from_nanos(gap_ns))
}

/// One newline-terminated workload line stamped with `now_ns`.
fn build_line<R: Rng>(now_ns: u64, rng: &mut R, key_probability: f64, long_fraction: f64) -> String {
    let payload = if rng.gen_bool(key_probability) {
        format!("{} request served", DEFAULT_MATCH_KEY)
    } else {
        FILLER_PAYLOAD.to_owned()
    };
    if rng.gen_bool(long_fraction) {
        format!(
            "{}\t{} {}\n",
            now_ns,
            payload,
            FILLER_PAYLOAD.repeat(LONG_LINE_REPEAT)
        )
    } else {
        format!("{}\t{}\n", now_ns, payload)
    }
}
