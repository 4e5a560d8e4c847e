/// Input file the load generator appends to when none is configured.
pub(crate) const DEFAULT_INPUT_PATH: &str = "a.log";
/// Output file the monitor under test writes when none is configured.
pub(crate) const DEFAULT_OUTPUT_PATH: &str = "b.log";
/// Filter key the default monitor invocation and the built-in generator
/// agree on.
pub const DEFAULT_MATCH_KEY: &str = "key1";

/// Default shell command starting the monitor under test.
#[must_use]
pub fn default_monitor_cmd(input: &str, output: &str) -> String {
    format!(
        "./log-monitor {} {} --bench-stamp {}",
        input, output, DEFAULT_MATCH_KEY
    )
}
