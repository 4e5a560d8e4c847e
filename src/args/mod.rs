//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;

#[cfg(test)]
mod test_support;

pub use cli::{Command, GenerateArgs, HarnessArgs};
pub use defaults::{DEFAULT_MATCH_KEY, default_monitor_cmd};
