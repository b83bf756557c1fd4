//! JS frontend generators and their shared pipeline.
//!
//! Unlike the backend, the frontend project itself comes from an external
//! creator (`bun create next-app`, `create-react-app`, `npm create svelte`),
//! so its failure ends the run. After it, the generator adds its own
//! directories, files and environment files under `client/`.

mod next;
mod react;
mod svelte;

pub use next::NextJsGenerator;
pub use react::ReactGenerator;
pub use svelte::SvelteGenerator;

use tracing::{info, instrument};

use super::{FrontendGenerator, GenerationContext};
use crate::application::ApplicationError;
use crate::application::ports::CommandSpec;
use crate::domain::ProjectConfig;
use crate::error::{FsgoError, FsgoResult};

/// Frontend directory under the project root; every creator is told to use it.
pub const CLIENT_DIR: &str = "client";

#[instrument(skip_all, fields(framework = %generator.framework(), project = %config.name()))]
pub(crate) fn run_pipeline<G>(
    generator: &G,
    config: &ProjectConfig,
    ctx: &GenerationContext<'_>,
) -> FsgoResult<()>
where
    G: FrontendGenerator + ?Sized,
{
    let frontend = config.frontend().ok_or_else(|| {
        FsgoError::internal(format!(
            "{} project reached frontend generation without a frontend",
            config.project_type()
        ))
    })?;

    info!("Creating {} frontend", generator.framework());

    let create = CommandSpec::shell(generator.create_command(frontend), ctx.root());
    ctx.run_required(&create)?;

    // The creator owns `client/`; a run that exits 0 without it is a failure.
    let client = ctx.root().join(CLIENT_DIR);
    if !ctx.filesystem().exists(&client) {
        return Err(ApplicationError::FilesystemError {
            path: client,
            reason: "frontend creator did not create the directory".into(),
        }
        .into());
    }
    ctx.create_dirs(&client, generator.directories())?;
    ctx.write_templates(&client, generator.files())?;
    ctx.write_templates(&client, generator.env_files())?;

    info!("Frontend created");
    Ok(())
}
