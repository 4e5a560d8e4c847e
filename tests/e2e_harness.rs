
use tempfile::tempdir;

use support_harness::{run_tailbench, successful_stdout};

fn prep_paths() -> Result<(tempfile::TempDir, String, String), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let input = dir.path().join("a.log").to_string_lossy().into_owned();
    let output = dir.path().join("b.log").to_string_lossy().into_owned();
    Ok((dir, input, output))
}

/// A monitor stand-in that copies the input file to the output verbatim.
///
/// `tail --pid=$$` makes the copier exit once the harness terminates the
/// spawned shell, so no process outlives the test.
fn passthrough_monitor_cmd(input: &str, output: &str) -> String {
    format!("tail -F --pid=$$ {} >> {} 2>/dev/null", input, output)
}

/// A monitor stand-in that appends a `#MON_TS` processing stamp per line.
fn stamping_monitor_cmd(input: &str, output: &str) -> String {
    format!(
        "tail -F --pid=$$ {} 2>/dev/null | while IFS= read -r line; do \
         printf '%s\\t#MON_TS=%s\\n' \"$line\" \"$(date +%s%N)\"; done >> {}",
        input, output
    )
}

#[test]
fn e2e_no_data_run_reports_informationally() -> Result<(), String> {
    let (_dir, input, output) = prep_paths()?;

    let run = run_tailbench([
        "--monitor-cmd",
        "sleep 30",
        "--writer-cmd",
        "true",
        "--input",
        &input,
        "--output",
        &output,
        "--warmup",
        "20ms",
        "--poll-interval",
        "5ms",
        "--idle-threshold",
        "200ms",
    ])?;

    let stdout = successful_stdout(&run)?;
    if !stdout.contains("No filtered lines observed") {
        return Err(format!("Unexpected stdout: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_passthrough_monitor_yields_end_to_end_percentiles() -> Result<(), String> {
    let (_dir, input, output) = prep_paths()?;
    let monitor_cmd = passthrough_monitor_cmd(&input, &output);

    let run = run_tailbench([
        "--monitor-cmd",
        &monitor_cmd,
        "--input",
        &input,
        "--output",
        &output,
        "--lines",
        "40",
        "--rate",
        "400",
        "--warmup",
        "100ms",
        "--poll-interval",
        "5ms",
        "--idle-threshold",
        "500ms",
    ])?;

    let stdout = successful_stdout(&run)?;
    if !stdout.contains("End-to-end: p50=") {
        return Err(format!("Expected an end-to-end summary, got: {}", stdout));
    }
    if !stdout.contains("over 40 lines") {
        return Err(format!("Expected all 40 lines measured, got: {}", stdout));
    }
    if stdout.contains("Process: p50=") {
        return Err(format!(
            "Passthrough monitor should not produce stamps: {}",
            stdout
        ));
    }
    Ok(())
}

#[test]
fn e2e_stamping_monitor_yields_processing_percentiles() -> Result<(), String> {
    let (_dir, input, output) = prep_paths()?;
    let monitor_cmd = stamping_monitor_cmd(&input, &output);

    let run = run_tailbench([
        "--monitor-cmd",
        &monitor_cmd,
        "--input",
        &input,
        "--output",
        &output,
        "--lines",
        "20",
        "--rate",
        "200",
        "--warmup",
        "100ms",
        "--poll-interval",
        "5ms",
        "--idle-threshold",
        "500ms",
        "--require-stamp",
    ])?;

    let stdout = successful_stdout(&run)?;
    if !stdout.contains("End-to-end: p50=") {
        return Err(format!("Expected an end-to-end summary, got: {}", stdout));
    }
    if !stdout.contains("Process: p50=") {
        return Err(format!("Expected a processing summary, got: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_require_stamp_without_stamps_reports_distinctly() -> Result<(), String> {
    let (_dir, input, output) = prep_paths()?;
    let monitor_cmd = passthrough_monitor_cmd(&input, &output);

    let run = run_tailbench([
        "--monitor-cmd",
        &monitor_cmd,
        "--input",
        &input,
        "--output",
        &output,
        "--lines",
        "10",
        "--rate",
        "200",
        "--warmup",
        "100ms",
        "--poll-interval",
        "5ms",
        "--idle-threshold",
        "500ms",
        "--require-stamp",
    ])?;

    let stdout = successful_stdout(&run)?;
    if !stdout.contains("No #MON_TS stamps found") {
        return Err(format!("Unexpected stdout: {}", stdout));
    }
    if stdout.contains("End-to-end: p50=") {
        return Err(format!(
            "A failed stamp requirement must not print numbers: {}",
            stdout
        ));
    }
    Ok(())
}
