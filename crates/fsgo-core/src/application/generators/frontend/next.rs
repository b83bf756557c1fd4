use crate::application::generators::{FrontendGenerator, TemplateFile};
use crate::domain::{FrontendConfig, FrontendFramework};

/// Next.js with the App Router, created through `bun create next-app`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NextJsGenerator;

const DIRECTORIES: &[&str] = &[
    "public/assets/fonts/components-fonts",
    "public/assets/fonts/logo-font",
    "public/assets/icons",
    "src/app/auth/callback",
    "src/app/auth/signin",
    "src/components/homepage",
    "src/components/ui/navbar",
    "src/components/ui/texts",
    "src/lib",
    "src/styles",
];

const FILES: &[TemplateFile] = &[
    TemplateFile::new("src/components/homepage/Hero.tsx", "frontend/next/Hero.tsx"),
    TemplateFile::new(
        "src/components/ui/navbar/Navbar.tsx",
        "frontend/next/Navbar.tsx",
    ),
    TemplateFile::new(
        "src/components/ui/texts/Typography.tsx",
        "frontend/next/Typography.tsx",
    ),
    TemplateFile::new("src/app/auth/signin/page.tsx", "frontend/next/signin-page.tsx"),
    TemplateFile::new(
        "src/app/auth/callback/page.tsx",
        "frontend/next/callback-page.tsx",
    ),
];

const ENV_FILES: &[TemplateFile] = &[
    TemplateFile::new(".env", "frontend/next/env"),
    TemplateFile::new(".env.example", "frontend/next/env.example"),
];

impl FrontendGenerator for NextJsGenerator {
    fn framework(&self) -> FrontendFramework {
        FrontendFramework::NextJs
    }

    fn build_commands(&self) -> &'static [&'static str] {
        &["bun run build", "bun run start"]
    }

    fn create_command(&self, frontend: &FrontendConfig) -> String {
        // `yes ""` accepts the remaining interactive defaults.
        let mut cmd = String::from("yes \"\" | bun create next-app@latest client");
        cmd.push_str(if frontend.typescript {
            " --typescript"
        } else {
            " --js"
        });
        if frontend.eslint {
            cmd.push_str(" --eslint");
        }
        if frontend.tailwind_css {
            cmd.push_str(" --tailwind");
        }
        cmd.push_str(" --app");
        cmd
    }

    fn directories(&self) -> &'static [&'static str] {
        DIRECTORIES
    }

    fn files(&self) -> &'static [TemplateFile] {
        FILES
    }

    fn env_files(&self) -> &'static [TemplateFile] {
        ENV_FILES
    }
}
