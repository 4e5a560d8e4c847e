use std::path::PathBuf;

use crate::args::{HarnessArgs, default_monitor_cmd};
use crate::clock::epoch_ns;
use crate::error::{AppError, AppResult, RunError};
use crate::metrics::{LatencyReport, LatencySamples};
use crate::stamp;
use crate::tail::FileTail;

use super::process::ManagedChild;
use super::quiescence::QuiescenceClock;

/// Lifecycle phases of a measurement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    WarmingUp,
    Loading,
    Draining,
    Stopped,
}

/// How a completed run ended.
#[derive(Debug)]
pub(crate) enum RunOutcome {
    Measured(LatencyReport),
    NoSamples,
    NoStampedSamples,
}

/// Drives one full measurement run and prints its outcome.
///
/// # Errors
///
/// Returns an error for catastrophic conditions only: failure to prepare
/// the working files, to spawn a child process, or to read the output
/// file. Empty or stamp-less runs are reported, not failed.
pub(crate) async fn run_harness(args: &HarnessArgs) -> AppResult<()> {
    let outcome = execute(args).await?;
    report_outcome(&outcome);
    Ok(())
}

async fn execute(args: &HarnessArgs) -> AppResult<RunOutcome> {
    prepare_files(&args.input, &args.output).await?;

    let mut phase = Phase::NotStarted;
    let monitor_cmd = args
        .monitor_cmd
        .clone()
        .unwrap_or_else(|| default_monitor_cmd(&args.input, &args.output));
    let mut monitor = ManagedChild::spawn_shell("monitor", &monitor_cmd)?;
    advance(&mut phase, Phase::WarmingUp);

    tokio::time::sleep(args.warmup).await;

    let mut writer = spawn_writer(args)?;
    advance(&mut phase, Phase::Loading);

    let mut tail = FileTail::new(&args.output);
    let mut samples = LatencySamples::new();
    let mut quiescence = QuiescenceClock::start();

    loop {
        let lines = tail.poll().await?;
        if !lines.is_empty() {
            let now_ns = epoch_ns()?;
            for line in &lines {
                samples.note_line();
                if let Some(origin) = stamp::origin_ns(line) {
                    samples.record(origin, now_ns, stamp::monitor_ns(line));
                }
            }
            quiescence.touch();
        }

        if phase == Phase::Loading && writer.has_exited() {
            advance(&mut phase, Phase::Draining);
        }
        if phase == Phase::Draining && quiescence.idle_for() > args.idle_threshold {
            advance(&mut phase, Phase::Stopped);
            break;
        }

        tokio::time::sleep(args.poll_interval).await;
    }

    monitor.terminate();
    tracing::info!(
        lines_seen = samples.lines_seen(),
        stamped = samples.stamped(),
        output_bytes = tail.offset(),
        "run stopped"
    );

    if samples.is_empty() {
        return Ok(RunOutcome::NoSamples);
    }
    if args.require_stamp && samples.stamped() == 0 {
        return Ok(RunOutcome::NoStampedSamples);
    }
    Ok(RunOutcome::Measured(samples.summarize()))
}

fn advance(phase: &mut Phase, next: Phase) {
    tracing::debug!(from = ?*phase, to = ?next, "phase transition");
    *phase = next;
}

/// Deletes stale run files and recreates the input file empty, so the
/// monitor can open it before the writer produces anything.
async fn prepare_files(input: &str, output: &str) -> AppResult<()> {
    for path in [input, output] {
        if let Err(err) = tokio::fs::remove_file(path).await
            && err.kind() != std::io::ErrorKind::NotFound
        {
            return Err(AppError::run(RunError::PrepareFile {
                path: PathBuf::from(path),
                source: err,
            }));
        }
    }
    tokio::fs::File::create(input).await.map_err(|err| {
        AppError::run(RunError::PrepareFile {
            path: PathBuf::from(input),
            source: err,
        })
    })?;
    Ok(())
}

/// Starts the load generator: a user-supplied shell command, or this
/// binary's own `generate` subcommand when none is configured.
fn spawn_writer(args: &HarnessArgs) -> AppResult<ManagedChild> {
    if let Some(command) = args.writer_cmd.as_deref() {
        return ManagedChild::spawn_shell("writer", command);
    }

    let exe = std::env::current_exe()
        .map_err(|err| AppError::run(RunError::CurrentExe { source: err }))?;
    let writer_args = vec![
        "generate".to_owned(),
        "--path".to_owned(),
        args.input.clone(),
        "--lines".to_owned(),
        args.lines.to_string(),
        "--rate".to_owned(),
        args.rate.to_string(),
        "--key-probability".to_owned(),
        args.key_probability.to_string(),
        "--long-fraction".to_owned(),
        args.long_fraction.to_string(),
    ];
    ManagedChild::spawn_program("writer", &exe, &writer_args)
}

fn report_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Measured(report) => {
            for line in report.lines() {
                println!("{}", line);
            }
        }
        RunOutcome::NoSamples => {
            println!("No filtered lines observed, check your monitor command or filter keys");
        }
        RunOutcome::NoStampedSamples => {
            println!("No #MON_TS stamps found, check if the monitor was started with --bench-stamp");
        }
    }
}
