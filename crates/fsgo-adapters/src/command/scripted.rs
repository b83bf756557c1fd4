//! A command runner that records invocations instead of spawning them.

use std::fmt;
use std::sync::{Arc, Mutex};

use fsgo_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandSpec, Filesystem},
    },
    error::{FsgoError, FsgoResult},
};
use tracing::debug;

/// Records every command and fails the ones whose command line contains a
/// registered pattern. Clones share the log.
///
/// A successful command can also leave a directory behind, the way a project
/// creator such as `create-react-app` does.
#[derive(Clone, Default)]
pub struct ScriptedCommandRunner {
    inner: Arc<Mutex<Script>>,
}

#[derive(Default)]
struct Script {
    log: Vec<CommandSpec>,
    failures: Vec<(String, String)>,
    creates: Vec<Creates>,
}

/// `cwd/dir` is made on `filesystem` when a command matching `pattern` succeeds.
struct Creates {
    pattern: String,
    dir: String,
    filesystem: Arc<dyn Filesystem>,
}

impl ScriptedCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every command whose line contains `pattern`.
    pub fn fail_when(self, pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        if let Ok(mut script) = self.inner.lock() {
            script.failures.push((pattern.into(), reason.into()));
        }
        self
    }

    /// After a successful command whose line contains `pattern`, create
    /// `dir` under the command's working directory on `filesystem`.
    pub fn creating(
        self,
        pattern: impl Into<String>,
        dir: impl Into<String>,
        filesystem: impl Filesystem + 'static,
    ) -> Self {
        if let Ok(mut script) = self.inner.lock() {
            script.creates.push(Creates {
                pattern: pattern.into(),
                dir: dir.into(),
                filesystem: Arc::new(filesystem),
            });
        }
        self
    }

    /// Every command run so far, in order.
    pub fn commands(&self) -> Vec<CommandSpec> {
        self.inner
            .lock()
            .map(|s| s.log.clone())
            .unwrap_or_default()
    }

    /// Command lines run so far, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.commands().iter().map(CommandSpec::command_line).collect()
    }
}

impl fmt::Debug for ScriptedCommandRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedCommandRunner")
            .field("commands", &self.command_lines())
            .finish()
    }
}

impl CommandRunner for ScriptedCommandRunner {
    fn run(&self, command: &CommandSpec) -> FsgoResult<()> {
        let mut script = self
            .inner
            .lock()
            .map_err(|_| FsgoError::internal("command script lock poisoned"))?;
        let line = command.command_line();
        debug!(command = %line, "scripted command");
        script.log.push(command.clone());

        if let Some((_, reason)) = script.failures.iter().find(|(p, _)| line.contains(p.as_str())) {
            return Err(ApplicationError::CommandFailed {
                command: line,
                reason: reason.clone(),
            }
            .into());
        }

        for effect in script.creates.iter().filter(|c| line.contains(c.pattern.as_str())) {
            effect
                .filesystem
                .create_dir_all(&command.cwd.join(&effect.dir))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::MemoryFilesystem;

    #[test]
    fn records_and_fails_by_pattern() {
        let runner = ScriptedCommandRunner::new().fail_when("go get", "offline");
        let cwd = Path::new("/p");

        assert!(runner.run(&CommandSpec::new("go", cwd).args(["mod", "init", "server"])).is_ok());
        assert!(runner.run(&CommandSpec::new("go", cwd).args(["get", "go.uber.org/zap"])).is_err());

        assert_eq!(
            runner.command_lines(),
            vec!["go mod init server", "go get go.uber.org/zap"]
        );
    }

    #[test]
    fn successful_creator_leaves_its_directory() {
        let fs = MemoryFilesystem::with_current_dir("/p");
        let runner = ScriptedCommandRunner::new().creating("create-react-app", "client", fs.clone());

        runner
            .run(&CommandSpec::shell("npx create-react-app client", "/p"))
            .unwrap();

        assert!(fs.is_dir(Path::new("/p/client")));
    }

    #[test]
    fn failed_creator_leaves_nothing() {
        let fs = MemoryFilesystem::with_current_dir("/p");
        let runner = ScriptedCommandRunner::new()
            .fail_when("create-react-app", "exit status: 1")
            .creating("create-react-app", "client", fs.clone());

        assert!(
            runner
                .run(&CommandSpec::shell("npx create-react-app client", "/p"))
                .is_err()
        );
        assert!(!fs.exists(Path::new("/p/client")));
    }
}
