mod app;
mod config;
mod run;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use run::RunError;
