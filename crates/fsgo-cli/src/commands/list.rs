//! Implementation of the `fsgo list` command.

use serde::Serialize;

use fsgo_core::application::GeneratorRegistry;
use fsgo_core::domain::{BackendFramework, FrontendFramework};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct FrameworkRow {
    side: &'static str,
    name: &'static str,
    slug: &'static str,
    available: bool,
}

/// Every enumerated framework, backends first, with whether the registry
/// can generate it.
fn rows(registry: &GeneratorRegistry) -> Vec<FrameworkRow> {
    let backends = BackendFramework::ALL.iter().map(|fw| FrameworkRow {
        side: "backend",
        name: fw.as_str(),
        slug: fw.slug(),
        available: registry.backend(*fw).is_some(),
    });
    let frontends = FrontendFramework::ALL.iter().map(|fw| FrameworkRow {
        side: "frontend",
        name: fw.as_str(),
        slug: fw.slug(),
        available: registry.frontend(*fw).is_some(),
    });
    backends.chain(frontends).collect()
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let rows = rows(&GeneratorRegistry::with_builtin());

    match args.format {
        ListFormat::Table => {
            output.header("Frameworks:")?;
            for row in &rows {
                let status = if row.available {
                    "available"
                } else {
                    "not yet available"
                };
                output.print(&format!(
                    "  {:<9} {:<10} {:<10} {}",
                    row.side, row.name, row.slug, status
                ))?;
            }
        }
        ListFormat::Json => output.json(&rows)?,
        ListFormat::List => {
            for row in rows.iter().filter(|r| r.available) {
                output.print(&format!("{} {}", row.side, row.slug))?;
            }
        }
    }

    Ok(())
}
