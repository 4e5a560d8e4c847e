//! Run orchestration: process lifecycles, the poll loop, and quiescence.
mod process;
mod quiescence;
mod runner;

pub(crate) use runner::run_harness;
