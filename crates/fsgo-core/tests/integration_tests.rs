//! Integration tests for fsgo-core's public API.
//!
//! Exercises the orchestrator with hand-written port implementations and a
//! generator registered from outside the crate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use fsgo_core::application::{ApplicationError, GenerationStep, TemplateFile};
use fsgo_core::prelude::*;

#[derive(Clone, Default)]
struct RecordingFs {
    entries: Arc<Mutex<BTreeMap<PathBuf, Option<String>>>>,
}

impl RecordingFs {
    fn is_dir(&self, path: &str) -> bool {
        matches!(self.entries.lock().unwrap().get(Path::new(path)), Some(None))
    }

    fn file(&self, path: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap()
            .get(Path::new(path))
            .cloned()
            .flatten()
    }
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> FsgoResult<()> {
        let mut entries = self.entries.lock().unwrap();
        for ancestor in path.ancestors() {
            entries.entry(ancestor.to_path_buf()).or_insert(None);
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> FsgoResult<()> {
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.entries
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), Some(content.to_string()));
        Ok(())
    }

    fn current_dir(&self) -> FsgoResult<PathBuf> {
        Ok(PathBuf::from("/home/dev"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.entries.lock().unwrap().contains_key(path)
    }
}

#[derive(Clone, Default)]
struct RecordingRunner {
    log: Arc<Mutex<Vec<CommandSpec>>>,
    /// When set, frontend creators make `client/` here like the real ones.
    creates_client: Option<RecordingFs>,
}

impl RecordingRunner {
    fn creating_client(fs: &RecordingFs) -> Self {
        Self {
            creates_client: Some(fs.clone()),
            ..Self::default()
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> FsgoResult<()> {
        self.log.lock().unwrap().push(command.clone());
        if let Some(fs) = &self.creates_client {
            if command.program == "sh" {
                fs.create_dir_all(&command.cwd.join("client"))?;
            }
        }
        Ok(())
    }
}

struct KeyEchoCatalog;

impl TemplateCatalog for KeyEchoCatalog {
    fn render(&self, key: &str) -> FsgoResult<&str> {
        Ok(if key.starts_with("root/") {
            "root file\n"
        } else {
            "template\n"
        })
    }

    fn keys(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// A Vue generator supplied by an embedding application.
struct VueGenerator;

const VUE_ENV: &[TemplateFile] = &[TemplateFile::new(".env", "frontend/vue/env")];

impl FrontendGenerator for VueGenerator {
    fn framework(&self) -> FrontendFramework {
        FrontendFramework::Vue
    }

    fn build_commands(&self) -> &'static [&'static str] {
        &["npm run build", "npm run preview"]
    }

    fn create_command(&self, frontend: &FrontendConfig) -> String {
        let mut cmd = String::from("npm create vue@latest client -- --default");
        if frontend.typescript {
            cmd.push_str(" --ts");
        }
        cmd
    }

    fn env_files(&self) -> &'static [TemplateFile] {
        VUE_ENV
    }
}

fn vue_config() -> ProjectConfig {
    ProjectConfig::builder()
        .name("app1")
        .path("app1")
        .project_type(ProjectType::Web)
        .backend(BackendFramework::Fiber)
        .frontend(FrontendConfig::new(FrontendFramework::Vue).with_tailwind_css(false))
        .build()
        .unwrap()
}

fn generator(
    registry: GeneratorRegistry,
    fs: &RecordingFs,
    runner: &RecordingRunner,
) -> ProjectGenerator {
    ProjectGenerator::new(
        registry,
        Box::new(fs.clone()),
        Box::new(runner.clone()),
        Box::new(KeyEchoCatalog),
    )
}

#[test]
fn builtin_registry_rejects_vue_after_backend() {
    let fs = RecordingFs::default();
    let runner = RecordingRunner::default();

    let err = generator(GeneratorRegistry::with_builtin(), &fs, &runner)
        .generate_config(&vue_config())
        .unwrap_err();

    let FsgoError::Application(app) = &err else {
        panic!("unexpected error: {err}");
    };
    assert!(matches!(
        app.root_cause(),
        ApplicationError::GeneratorNotFound { framework, .. } if framework == "Vue"
    ));
    assert!(fs.is_dir("/home/dev/app1/server/cmd/server/tmp"));
    assert!(!fs.exists(Path::new("/home/dev/app1/client")));
    assert!(fs.file("/home/dev/app1/Makefile").is_none());
}

#[test]
fn registering_a_generator_enables_the_framework() {
    let fs = RecordingFs::default();
    let runner = RecordingRunner::creating_client(&fs);
    let mut registry = GeneratorRegistry::with_builtin();
    assert!(registry.register_frontend(Box::new(VueGenerator)).is_none());

    let report = generator(registry, &fs, &runner)
        .generate_config(&vue_config())
        .unwrap();

    assert_eq!(report.frontend, Some(FrontendFramework::Vue));
    assert_eq!(report.build_commands, vec!["npm run build", "npm run preview"]);
    assert_eq!(fs.file("/home/dev/app1/client/.env").as_deref(), Some("template\n"));
    assert_eq!(fs.file("/home/dev/app1/README.md").as_deref(), Some("root file\n"));

    let log = runner.log.lock().unwrap();
    let create = log
        .iter()
        .find(|c| c.command_line().starts_with("npm create vue"))
        .unwrap();
    assert_eq!(create.cwd, PathBuf::from("/home/dev/app1"));
}

#[test]
fn creator_that_exits_cleanly_without_client_dir_fails() {
    let fs = RecordingFs::default();
    let runner = RecordingRunner::default();
    let mut registry = GeneratorRegistry::with_builtin();
    registry.register_frontend(Box::new(VueGenerator));

    let err = generator(registry, &fs, &runner)
        .generate_config(&vue_config())
        .unwrap_err();

    let FsgoError::Application(app) = &err else {
        panic!("unexpected error: {err}");
    };
    assert!(matches!(
        app,
        ApplicationError::StepFailed {
            step: GenerationStep::GenerateFrontend,
            ..
        }
    ));
    assert!(matches!(
        app.root_cause(),
        ApplicationError::FilesystemError { path, .. } if path == Path::new("/home/dev/app1/client")
    ));
    assert!(!fs.exists(Path::new("/home/dev/app1/client")));
    assert!(fs.file("/home/dev/app1/Makefile").is_none());
}

#[test]
fn every_go_command_runs_in_server_dir() {
    let fs = RecordingFs::default();
    let runner = RecordingRunner::default();
    let config = ProjectConfig::builder()
        .name("svc")
        .path("svc")
        .project_type(ProjectType::Api)
        .backend(BackendFramework::Gin)
        .build()
        .unwrap();

    generator(GeneratorRegistry::with_builtin(), &fs, &runner)
        .generate_config(&config)
        .unwrap();

    let log = runner.log.lock().unwrap();
    assert!(!log.is_empty());
    assert!(log.iter().all(|c| c.program == "go"));
    assert!(log.iter().all(|c| c.cwd == Path::new("/home/dev/svc/server")));
    assert!(!fs.exists(Path::new("/home/dev/svc/client")));
}
