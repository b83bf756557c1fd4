//! Runs external toolchains with `std::process::Command`.

use std::process::{Command, Stdio};

use fsgo_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandSpec},
    },
    error::FsgoResult,
};
use tracing::{debug, instrument};

/// Spawns the real program and waits for it. The child shares the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %command, cwd = %command.cwd.display()))]
    fn run(&self, command: &CommandSpec) -> FsgoResult<()> {
        let failed = |reason: String| ApplicationError::CommandFailed {
            command: command.command_line(),
            reason,
        };

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| failed(e.to_string()))?;

        debug!(%status, "command exited");
        if status.success() {
            Ok(())
        } else {
            Err(failed(format!("exited with {}", status)).into())
        }
    }
}
