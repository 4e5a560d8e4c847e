mod app;
mod args;
mod clock;
mod config;
mod entry;
mod error;
mod loadgen;
mod logger;
mod metrics;
mod stamp;
mod tail;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
