use crate::application::generators::{FrontendGenerator, TemplateFile};
use crate::domain::{FrontendConfig, FrontendFramework};

/// React via `create-react-app`. Only the TypeScript toggle maps to a flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReactGenerator;

const ENV_FILES: &[TemplateFile] = &[
    TemplateFile::new(".env", "frontend/react/env"),
    TemplateFile::new(".env.example", "frontend/react/env.example"),
];

impl FrontendGenerator for ReactGenerator {
    fn framework(&self) -> FrontendFramework {
        FrontendFramework::React
    }

    fn build_commands(&self) -> &'static [&'static str] {
        &["npm run build", "npm start"]
    }

    fn create_command(&self, frontend: &FrontendConfig) -> String {
        let mut cmd = String::from("npx create-react-app client");
        if frontend.typescript {
            cmd.push_str(" --template typescript");
        }
        cmd
    }

    fn env_files(&self) -> &'static [TemplateFile] {
        ENV_FILES
    }
}
