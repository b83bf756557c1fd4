//! The `ConfigCollector` used by `fsgo new`.
//!
//! Each answer comes from the first source that has it:
//!
//! 1. the command-line flag
//! 2. an interactive prompt, when a terminal is available
//! 3. the configuration defaults
//!
//! A value with none of the three is a collection error naming the flag.

use std::path::PathBuf;

use fsgo_core::{
    application::{ApplicationError, ConfigCollector},
    domain::{
        BackendFramework, CURRENT_DIR, FrontendConfig, FrontendFramework, ProjectConfig,
        ProjectType,
    },
    error::{Context, FsgoError, FsgoResult},
};
use tracing::debug;

use crate::{cli::NewArgs, config::Defaults, output::OutputManager};

/// Question-asking seam, so the collector can be driven without a terminal.
pub trait Prompt {
    /// Index into `items`. `None` means the user backed out.
    fn select(&self, question: &str, items: &[String], default: usize)
    -> FsgoResult<Option<usize>>;

    /// `None` means the user backed out.
    fn confirm(&self, question: &str, default: bool) -> FsgoResult<Option<bool>>;

    /// Free text; an empty answer takes `default`.
    fn input(&self, question: &str, default: &str) -> FsgoResult<String>;
}

pub struct CliCollector<'a> {
    args: &'a NewArgs,
    defaults: &'a Defaults,
    cwd: PathBuf,
    prompt: Option<Box<dyn Prompt + 'a>>,
    skip_confirm: bool,
    output: &'a OutputManager,
}

impl<'a> CliCollector<'a> {
    pub fn new(
        args: &'a NewArgs,
        defaults: &'a Defaults,
        cwd: PathBuf,
        output: &'a OutputManager,
    ) -> Self {
        Self {
            args,
            defaults,
            cwd,
            prompt: None,
            skip_confirm: args.yes,
            output,
        }
    }

    /// Ask for missing values instead of falling back to defaults.
    pub fn with_prompt(mut self, prompt: Box<dyn Prompt + 'a>) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn skip_confirm(mut self, skip: bool) -> Self {
        self.skip_confirm = self.skip_confirm || skip;
        self
    }

    fn location(&self) -> FsgoResult<String> {
        if let Some(location) = &self.args.location {
            return Ok(location.clone());
        }
        match &self.prompt {
            Some(prompt) => {
                let answer =
                    prompt.input("Project name (. for the current directory)", CURRENT_DIR)?;
                if answer.trim().is_empty() {
                    return Err(missing("LOCATION"));
                }
                Ok(answer)
            }
            None => Err(missing("LOCATION")),
        }
    }

    fn choose<T: Copy + PartialEq>(
        &self,
        flag: Option<T>,
        question: &str,
        options: &[T],
        label: impl Fn(T) -> String,
        default: Option<T>,
        flag_name: &str,
    ) -> FsgoResult<T> {
        if let Some(value) = flag {
            return Ok(value);
        }
        if let Some(prompt) = &self.prompt {
            let items: Vec<String> = options.iter().map(|&o| label(o)).collect();
            let preselected = default
                .and_then(|d| options.iter().position(|&o| o == d))
                .unwrap_or(0);
            return match prompt.select(question, &items, preselected)? {
                Some(index) => options
                    .get(index)
                    .copied()
                    .ok_or_else(|| FsgoError::internal(format!("prompt returned index {index}"))),
                None => Err(ApplicationError::Cancelled.into()),
            };
        }
        default.ok_or_else(|| missing(flag_name))
    }

    fn toggle(&self, flag: Option<bool>, question: &str, default: bool) -> FsgoResult<bool> {
        if let Some(value) = flag {
            return Ok(value);
        }
        match &self.prompt {
            Some(prompt) => prompt
                .confirm(question, default)?
                .ok_or_else(|| ApplicationError::Cancelled.into()),
            None => Ok(default),
        }
    }

    fn frontend(&self) -> FsgoResult<FrontendConfig> {
        let framework = self.choose(
            self.args.frontend.map(FrontendFramework::from),
            "Frontend framework",
            &FrontendFramework::ALL,
            |f| f.as_str().to_string(),
            self.defaults.frontend,
            "--frontend",
        )?;
        let d = self.defaults;
        Ok(FrontendConfig::new(framework)
            .with_typescript(self.toggle(self.args.typescript(), "Use TypeScript?", d.typescript)?)
            .with_tailwind_css(self.toggle(
                self.args.tailwind_css(),
                "Use Tailwind CSS?",
                d.tailwind_css,
            )?)
            .with_eslint(self.toggle(self.args.eslint(), "Use ESLint?", d.eslint)?))
    }
}

impl ConfigCollector for CliCollector<'_> {
    fn collect(&self) -> FsgoResult<ProjectConfig> {
        let location = self.location()?;
        let project_type = self.choose(
            self.args.project_type.map(ProjectType::from),
            "Project type",
            &ProjectType::ALL,
            |t| format!("{} - {}", t.as_str(), t.description()),
            self.defaults.project_type,
            "--type",
        )?;
        let backend = self.choose(
            self.args.backend.map(BackendFramework::from),
            "Backend framework",
            &BackendFramework::ALL,
            |b| b.as_str().to_string(),
            self.defaults.backend,
            "--backend",
        )?;

        let mut builder = ProjectConfig::builder()
            .location(&location, &self.cwd)
            .project_type(project_type)
            .backend(backend);
        if project_type.has_frontend() {
            builder = builder.frontend(self.frontend()?);
        } else if self.args.frontend.is_some() {
            debug!("--frontend ignored for an API project");
        }

        Ok(builder.build()?)
    }

    fn summarize(&self, config: &ProjectConfig) -> FsgoResult<()> {
        if self.output.is_json() {
            return Ok(());
        }
        self.print_summary(config)
            .context("writing the configuration summary")?;

        if self.skip_confirm {
            return Ok(());
        }
        match &self.prompt {
            Some(prompt) => match prompt.confirm("Create project?", true)? {
                Some(true) => Ok(()),
                _ => Err(ApplicationError::Cancelled.into()),
            },
            None => Ok(()),
        }
    }
}

impl CliCollector<'_> {
    fn print_summary(&self, config: &ProjectConfig) -> std::io::Result<()> {
        let out = self.output;
        out.header("Project configuration")?;
        out.field("Name", config.name())?;
        out.field("Location", config.path())?;
        out.field("Type", config.project_type().as_str())?;
        out.field("Backend", config.backend_framework().as_str())?;
        if let Some(frontend) = config.frontend() {
            out.field("Frontend", frontend.framework.as_str())?;
            out.field("TypeScript", yes_no(frontend.typescript))?;
            out.field("Tailwind CSS", yes_no(frontend.tailwind_css))?;
            out.field("ESLint", yes_no(frontend.eslint))?;
        }
        out.print("")
    }
}

fn yes_no(on: bool) -> &'static str {
    if on { "yes" } else { "no" }
}

fn missing(flag: &str) -> FsgoError {
    ApplicationError::ConfigCollection {
        reason: format!("{flag} is required; pass it or run in a terminal"),
    }
    .into()
}

// ── dialoguer ────────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
pub use terminal::TerminalPrompt;

#[cfg(feature = "interactive")]
mod terminal {
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
    use fsgo_core::{application::ApplicationError, error::FsgoResult};

    use super::Prompt;

    /// Prompts on stderr via dialoguer.
    pub struct TerminalPrompt {
        theme: ColorfulTheme,
    }

    impl TerminalPrompt {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
            }
        }
    }

    fn prompt_error(e: dialoguer::Error) -> fsgo_core::error::FsgoError {
        ApplicationError::ConfigCollection {
            reason: e.to_string(),
        }
        .into()
    }

    impl Prompt for TerminalPrompt {
        fn select(
            &self,
            question: &str,
            items: &[String],
            default: usize,
        ) -> FsgoResult<Option<usize>> {
            Select::with_theme(&self.theme)
                .with_prompt(question)
                .items(items)
                .default(default)
                .interact_opt()
                .map_err(prompt_error)
        }

        fn confirm(&self, question: &str, default: bool) -> FsgoResult<Option<bool>> {
            Confirm::with_theme(&self.theme)
                .with_prompt(question)
                .default(default)
                .interact_opt()
                .map_err(prompt_error)
        }

        fn input(&self, question: &str, default: &str) -> FsgoResult<String> {
            Input::<String>::with_theme(&self.theme)
                .with_prompt(question)
                .default(default.to_string())
                .interact_text()
                .map_err(prompt_error)
        }
    }
}
