//! Implementation of the `fsgo new` command.
//!
//! Responsibility: wire the adapters to the core `ProjectGenerator`, hand it
//! a collector built from the arguments, and display the report. No
//! generation logic lives here.

use std::io::IsTerminal;

use serde::Serialize;
use tracing::{info, instrument};

use fsgo_adapters::{LocalFilesystem, SystemCommandRunner, resolve_catalog};
use fsgo_core::application::{GenerationReport, GeneratorRegistry, ProjectGenerator};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    collector::CliCollector,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `fsgo new` command.
///
/// Dispatch sequence:
/// 1. Resolve the template catalog (overlay directory, if configured)
/// 2. Build the collector: flags, then prompts or config defaults
/// 3. Run the generator (it collects, validates and summarises first)
/// 4. Print the report and next steps
#[instrument(skip_all, fields(location = args.location.as_deref().unwrap_or("?")))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "reading the current directory")?;

    let catalog = resolve_catalog(config.templates.local_path.as_deref())?;
    let generator = ProjectGenerator::new(
        GeneratorRegistry::with_builtin(),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
        catalog,
    );

    let mut collector =
        CliCollector::new(&args, &config.defaults, cwd, &output).skip_confirm(global.quiet);
    if prompts_available(&args) {
        collector = with_terminal_prompt(collector);
    }

    let report = generator.generate(&collector)?;
    info!(root = %report.root.display(), "Project generated");

    print_report(&report, &output)
}

/// Prompts need the feature, a terminal on both ends, and no opt-out.
fn prompts_available(args: &NewArgs) -> bool {
    cfg!(feature = "interactive")
        && !args.no_interactive
        && std::io::stdin().is_terminal()
        && std::io::stderr().is_terminal()
}

#[cfg(feature = "interactive")]
fn with_terminal_prompt(collector: CliCollector<'_>) -> CliCollector<'_> {
    collector.with_prompt(Box::new(crate::collector::TerminalPrompt::new()))
}

#[cfg(not(feature = "interactive"))]
fn with_terminal_prompt(collector: CliCollector<'_>) -> CliCollector<'_> {
    collector
}

/// JSON shape of a finished run.
#[derive(Debug, Serialize)]
struct ReportView<'a> {
    name: &'a str,
    path: &'a str,
    root: String,
    #[serde(rename = "type")]
    project_type: &'static str,
    backend: &'static str,
    frontend: Option<&'static str>,
    build_commands: &'a [String],
    next_steps: Vec<String>,
}

impl<'a> From<&'a GenerationReport> for ReportView<'a> {
    fn from(report: &'a GenerationReport) -> Self {
        Self {
            name: &report.name,
            path: &report.path,
            root: report.root.display().to_string(),
            project_type: report.project_type.slug(),
            backend: report.backend.slug(),
            frontend: report.frontend.map(|f| f.slug()),
            build_commands: &report.build_commands,
            next_steps: report.next_steps(),
        }
    }
}

fn print_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(&ReportView::from(report));
    }

    output.success(&format!(
        "Project '{}' created at {}",
        report.name,
        report.root.display()
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    for step in report.next_steps() {
        output.print(&format!("  {step}"))?;
    }
    if !report.build_commands.is_empty() {
        output.print("")?;
        output.print("Frontend (in client/):")?;
        for command in &report.build_commands {
            output.print(&format!("  {command}"))?;
        }
    }
    Ok(())
}
