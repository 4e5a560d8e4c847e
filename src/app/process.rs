use std::path::Path;

use tokio::process::{Child, Command};

use crate::error::{AppError, AppResult, RunError};

/// A child process owned by the run.
///
/// The underlying handle kills the child on drop, so the monitor and the
/// writer are reaped on every exit path: normal completion, early error
/// return, or the harness itself being interrupted.
#[derive(Debug)]
pub(crate) struct ManagedChild {
    role: &'static str,
    child: Child,
}

impl ManagedChild {
    /// Starts `command` through the shell, as the monitor and writer
    /// overrides are configured as opaque command strings.
    pub(crate) fn spawn_shell(role: &'static str, command: &str) -> AppResult<Self> {
        let child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| {
                AppError::run(RunError::Spawn {
                    role,
                    command: command.to_owned(),
                    source: err,
                })
            })?;
        tracing::debug!(role, command, "spawned shell child");
        Ok(Self { role, child })
    }

    /// Starts a program directly, without shell interpretation.
    pub(crate) fn spawn_program(
        role: &'static str,
        program: &Path,
        args: &[String],
    ) -> AppResult<Self> {
        let child = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| {
                AppError::run(RunError::Spawn {
                    role,
                    command: program.to_string_lossy().into_owned(),
                    source: err,
                })
            })?;
        tracing::debug!(role, program = %program.display(), "spawned child");
        Ok(Self { role, child })
    }

    /// Non-blocking exit check.
    ///
    /// A failed wait means the handle is gone, which the poll loop treats
    /// the same as an exited child rather than spinning forever.
    pub(crate) fn has_exited(&mut self) -> bool {
        match self.child.try_wait() {
            Ok(Some(_)) | Err(_) => true,
            Ok(None) => false,
        }
    }

    /// Best-effort termination; failure is logged, not surfaced, since the
    /// user cannot act on it from inside the harness.
    pub(crate) fn terminate(&mut self) {
        if let Err(err) = self.child.start_kill() {
            tracing::warn!(role = self.role, "failed to terminate child: {}", err);
        }
    }
}
