//! Core library for the `tailbench` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, configuration parsing, incremental file tailing, timestamp
//! extraction, and latency aggregation. The primary user-facing interface is
//! the `tailbench` command-line harness; library APIs may evolve as the CLI
//! grows.
pub mod args;
pub mod config;
pub mod error;
pub mod metrics;
pub mod stamp;
pub mod tail;
