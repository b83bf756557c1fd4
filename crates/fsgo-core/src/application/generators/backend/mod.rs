//! Go backend generators and their shared pipeline.
//!
//! Every backend goes through the same steps:
//!
//! 1. create `server/` (fatal)
//! 2. `go mod init server` in `server/` (advisory)
//! 3. `go get <dep>` for each dependency (advisory, independent)
//! 4. create the directory tree (fatal)
//! 5. write the template files (fatal, no rollback)
//!
//! Only the dependency list and a handful of framework files differ.

mod chi;
mod echo;
mod fiber;
mod gin;

pub use chi::ChiGenerator;
pub use echo::EchoGenerator;
pub use fiber::FiberGenerator;
pub use gin::GinGenerator;

use tracing::{info, instrument};

use super::{BackendGenerator, GenerationContext, TemplateFile};
use crate::application::ports::CommandSpec;
use crate::domain::ProjectConfig;
use crate::error::FsgoResult;

/// Backend directory under the project root.
pub const SERVER_DIR: &str = "server";

/// Go module name passed to `go mod init`; templates import `server/...`.
pub const MODULE_NAME: &str = "server";

pub(crate) const COMMON_DIRECTORIES: &[&str] = &[
    "api",
    "cmd/server/tmp",
    "cmd/test",
    "db/migrations",
    "internal/config",
    "internal/middleware",
    "internal/routes",
    "pkg/logger",
    "pkg/response",
    "pkg/utils",
    "tmp",
];

pub(crate) const COMMON_FILES: &[TemplateFile] = &[
    TemplateFile::new("internal/config/config.go", "backend/common/config.go"),
    TemplateFile::new("pkg/utils/env.go", "backend/common/env.go"),
    TemplateFile::new("pkg/logger/zap.go", "backend/common/zap.go"),
    TemplateFile::new(
        "pkg/response/httpStatusCode.go",
        "backend/common/httpStatusCode.go",
    ),
    TemplateFile::new("cmd/test/db.go", "backend/common/test-db.go"),
    TemplateFile::new("db/connect.go", "backend/common/connect.go"),
    TemplateFile::new("db/migrations/migrate.go", "backend/common/migrate.go"),
    TemplateFile::new("db/migrations/schema.sql", "backend/common/schema.sql"),
    TemplateFile::new("Dockerfile", "backend/common/Dockerfile"),
    TemplateFile::new(".air.toml", "backend/common/air.toml"),
    TemplateFile::new(".env", "backend/common/env"),
    TemplateFile::new(".env.example", "backend/common/env.example"),
];

#[instrument(skip_all, fields(framework = %generator.framework(), project = %config.name()))]
pub(crate) fn run_pipeline<G>(
    generator: &G,
    config: &ProjectConfig,
    ctx: &GenerationContext<'_>,
) -> FsgoResult<()>
where
    G: BackendGenerator + ?Sized,
{
    info!("Creating {} backend", generator.framework());

    let server = ctx.root().join(SERVER_DIR);
    ctx.filesystem().create_dir_all(&server)?;

    ctx.run_advisory(&CommandSpec::new("go", &server).args(["mod", "init", MODULE_NAME]));

    let deps = generator.dependencies();
    let mut installed = 0;
    for dep in deps {
        if ctx.run_advisory(&CommandSpec::new("go", &server).args(["get", *dep])) {
            installed += 1;
        }
    }
    info!(installed, total = deps.len(), "Go dependencies fetched");

    ctx.create_dirs(&server, &generator.directories())?;
    ctx.write_templates(&server, &generator.files())?;

    info!("Backend created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ApplicationError;
    use crate::application::generators::testing::{MissingKeyCatalog, StubCatalog, api_config};
    use crate::application::ports::{MockCommandRunner, MockFilesystem};
    use crate::domain::BackendFramework;
    use crate::error::FsgoError;

    fn permissive_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs
    }

    fn recording_runner(log: Arc<Mutex<Vec<CommandSpec>>>) -> MockCommandRunner {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(move |cmd| {
            log.lock().unwrap().push(cmd.clone());
            Ok(())
        });
        runner
    }

    #[test]
    fn commands_run_inside_server_dir_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let runner = recording_runner(log.clone());
        let fs = permissive_fs();
        let ctx = GenerationContext::new("/work/app", &fs, &runner, &StubCatalog);

        GinGenerator
            .generate(&api_config(BackendFramework::Gin), &ctx)
            .unwrap();

        let log = log.lock().unwrap();
        assert_eq!(log[0].command_line(), "go mod init server");
        assert_eq!(log.len(), 1 + GinGenerator.dependencies().len());
        for (cmd, dep) in log[1..].iter().zip(GinGenerator.dependencies()) {
            assert_eq!(cmd.command_line(), format!("go get {dep}"));
        }
        assert!(log.iter().all(|c| c.cwd == Path::new("/work/app/server")));
    }

    #[test]
    fn failing_installs_do_not_stop_generation() {
        let attempts = Arc::new(Mutex::new(0usize));
        let counter = attempts.clone();
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(move |cmd| {
            *counter.lock().unwrap() += 1;
            Err(ApplicationError::CommandFailed {
                command: cmd.command_line(),
                reason: "No such file or directory".into(),
            }
            .into())
        });
        let written = Arc::new(Mutex::new(Vec::<PathBuf>::new()));
        let sink = written.clone();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |p, _| {
            sink.lock().unwrap().push(p.to_path_buf());
            Ok(())
        });
        let ctx = GenerationContext::new("/p", &fs, &runner, &StubCatalog);

        FiberGenerator
            .generate(&api_config(BackendFramework::Fiber), &ctx)
            .unwrap();

        assert_eq!(
            *attempts.lock().unwrap(),
            1 + FiberGenerator.dependencies().len()
        );
        assert_eq!(written.lock().unwrap().len(), FiberGenerator.files().len());
    }

    #[test]
    fn directory_failure_is_fatal() {
        let runner = recording_runner(Arc::default());
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|p| {
            if p.ends_with("pkg/logger") {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "Permission denied".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        fs.expect_write_file().never();
        let ctx = GenerationContext::new("/p", &fs, &runner, &StubCatalog);

        let err = EchoGenerator
            .generate(&api_config(BackendFramework::Echo), &ctx)
            .unwrap_err();
        assert!(matches!(
            err,
            FsgoError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn missing_template_is_fatal() {
        let runner = recording_runner(Arc::default());
        let fs = permissive_fs();
        let catalog = MissingKeyCatalog("backend/common/Dockerfile");
        let ctx = GenerationContext::new("/p", &fs, &runner, &catalog);

        let err = ChiGenerator
            .generate(&api_config(BackendFramework::Chi), &ctx)
            .unwrap_err();
        assert!(err.to_string().contains("backend/common/Dockerfile"));
    }

    #[test]
    fn fiber_tree_extends_common_tree() {
        let dirs = FiberGenerator.directories();
        assert!(dirs.starts_with(COMMON_DIRECTORIES));
        for extra in ["internal/controller", "internal/model", "internal/repo", "internal/service"] {
            assert!(dirs.contains(&extra));
        }
        assert!(!GinGenerator.directories().contains(&"internal/model"));
    }

    #[test]
    fn every_backend_writes_shared_and_entry_files() {
        let generators: [&dyn BackendGenerator; 4] =
            [&FiberGenerator, &GinGenerator, &EchoGenerator, &ChiGenerator];
        for g in generators {
            let paths: Vec<_> = g.files().iter().map(|f| f.path).collect();
            for required in [
                "cmd/server/main.go",
                "api/api.go",
                "internal/routes/routes.go",
                "pkg/response/response.go",
                "internal/middleware/user-api-key.go",
                ".env",
                ".env.example",
                ".air.toml",
                "Dockerfile",
            ] {
                assert!(paths.contains(&required), "{} misses {required}", g.framework());
            }
        }
    }
}
