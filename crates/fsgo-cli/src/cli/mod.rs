//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use fsgo_core::domain::{BackendFramework, FrontendFramework, ProjectType};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fsgo",
    bin_name = "fsgo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Full-stack Go project generator",
    long_about = "fsgo generates a Go backend (Fiber, Gin, Echo or Chi) and, for web \
                  projects, a JavaScript frontend (Next.js, React, Svelte) wired \
                  together with a Makefile.",
    after_help = "EXAMPLES:\n\
        \x20 fsgo new                                   # answer the prompts\n\
        \x20 fsgo new shop --type api --backend gin -y\n\
        \x20 fsgo new . --type web --backend fiber --frontend nextjs --no-eslint\n\
        \x20 fsgo list\n\
        \x20 fsgo completions bash > /usr/share/bash-completion/completions/fsgo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "Values not given as flags are asked for interactively.\n\
            With --no-interactive (or without a terminal) they come from the\n\
            configuration defaults, or the command fails.\n\n\
            EXAMPLES:\n\
            \x20 fsgo new my-app\n\
            \x20 fsgo new my-api  --type api --backend chi --yes\n\
            \x20 fsgo new my-site --type web --backend echo --frontend react --no-typescript"
    )]
    New(NewArgs),

    /// List supported frameworks.
    #[command(
        visible_alias = "ls",
        about = "List frameworks and whether they can be generated",
        after_help = "EXAMPLES:\n\
            \x20 fsgo list\n\
            \x20 fsgo list --format json"
    )]
    List(ListArgs),

    /// Initialise an fsgo configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 fsgo init                     # default location\n\
            \x20 fsgo -c ./fsgo.toml init      # explicit file\n\
            \x20 fsgo init --force             # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fsgo completions bash > ~/.local/share/bash-completion/completions/fsgo\n\
            \x20 fsgo completions zsh  > ~/.zfunc/_fsgo\n\
            \x20 fsgo completions fish > ~/.config/fish/completions/fsgo.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the fsgo configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 fsgo config get defaults.backend\n\
            \x20 fsgo config set defaults.backend gin\n\
            \x20 fsgo config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `fsgo new`.
#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Where to generate. `.` uses the current directory and names the
    /// project after it; anything else is both the name and the path.
    #[arg(value_name = "LOCATION", help = "Project name, or . for the current directory")]
    pub location: Option<String>,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Project type"
    )]
    pub project_type: Option<TypeArg>,

    #[arg(
        short = 'b',
        long = "backend",
        value_name = "FRAMEWORK",
        value_enum,
        help = "Backend framework"
    )]
    pub backend: Option<BackendArg>,

    /// Ignored for API projects.
    #[arg(
        short = 'f',
        long = "frontend",
        value_name = "FRAMEWORK",
        value_enum,
        help = "Frontend framework (web projects)"
    )]
    pub frontend: Option<FrontendArg>,

    #[arg(long = "typescript", overrides_with = "no_typescript", help = "Use TypeScript")]
    pub typescript: bool,
    #[arg(long = "no-typescript", overrides_with = "typescript", help = "Use JavaScript")]
    pub no_typescript: bool,

    #[arg(long = "tailwind", overrides_with = "no_tailwind", help = "Use Tailwind CSS")]
    pub tailwind: bool,
    #[arg(long = "no-tailwind", overrides_with = "tailwind", help = "Skip Tailwind CSS")]
    pub no_tailwind: bool,

    #[arg(long = "eslint", overrides_with = "no_eslint", help = "Use ESLint")]
    pub eslint: bool,
    #[arg(long = "no-eslint", overrides_with = "eslint", help = "Skip ESLint")]
    pub no_eslint: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Never prompt; fall back to configuration defaults.
    #[arg(long = "no-interactive", help = "Do not prompt for missing values")]
    pub no_interactive: bool,
}

impl NewArgs {
    pub fn typescript(&self) -> Option<bool> {
        toggle(self.typescript, self.no_typescript)
    }

    pub fn tailwind_css(&self) -> Option<bool> {
        toggle(self.tailwind, self.no_tailwind)
    }

    pub fn eslint(&self) -> Option<bool> {
        toggle(self.eslint, self.no_eslint)
    }
}

/// `--x` / `--no-x` pair: the later flag wins, neither means "not given".
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `fsgo list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One generatable framework per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `fsgo init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fsgo completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `fsgo config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.backend`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    /// Backend and frontend.
    Web,
    /// Backend only.
    #[value(alias = "rest")]
    Api,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Fiber,
    Gin,
    Echo,
    Chi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrontendArg {
    #[value(name = "nextjs", alias = "next")]
    NextJs,
    React,
    Vue,
    Svelte,
    #[value(name = "sveltekit")]
    SvelteKit,
    Solid,
}

// ── conversions CLI → core ────────────────────────────────────────────────────

impl From<TypeArg> for ProjectType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Web => ProjectType::Web,
            TypeArg::Api => ProjectType::Api,
        }
    }
}

impl From<BackendArg> for BackendFramework {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Fiber => BackendFramework::Fiber,
            BackendArg::Gin => BackendFramework::Gin,
            BackendArg::Echo => BackendFramework::Echo,
            BackendArg::Chi => BackendFramework::Chi,
        }
    }
}

impl From<FrontendArg> for FrontendFramework {
    fn from(arg: FrontendArg) -> Self {
        match arg {
            FrontendArg::NextJs => FrontendFramework::NextJs,
            FrontendArg::React => FrontendFramework::React,
            FrontendArg::Vue => FrontendFramework::Vue,
            FrontendArg::Svelte => FrontendFramework::Svelte,
            FrontendArg::SvelteKit => FrontendFramework::SvelteKit,
            FrontendArg::Solid => FrontendFramework::Solid,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    fn new_args(argv: &[&str]) -> NewArgs {
        let mut full = vec!["fsgo", "new"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::New(args) => args,
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let args = new_args(&["shop", "--type", "web", "-b", "gin", "-f", "nextjs", "-y"]);
        assert_eq!(args.location.as_deref(), Some("shop"));
        assert_eq!(args.project_type, Some(TypeArg::Web));
        assert_eq!(args.backend, Some(BackendArg::Gin));
        assert_eq!(args.frontend, Some(FrontendArg::NextJs));
        assert!(args.yes);
    }

    #[test]
    fn location_is_optional() {
        let args = new_args(&[]);
        assert!(args.location.is_none());
        assert!(args.project_type.is_none());
    }

    #[test]
    fn next_alias() {
        assert_eq!(
            new_args(&["-f", "next"]).frontend,
            Some(FrontendArg::NextJs)
        );
    }

    #[test]
    fn toggles_default_to_unset() {
        let args = new_args(&["app"]);
        assert_eq!(args.typescript(), None);
        assert_eq!(args.tailwind_css(), None);
        assert_eq!(args.eslint(), None);
    }

    #[test]
    fn last_toggle_flag_wins() {
        let args = new_args(&["app", "--typescript", "--no-typescript", "--no-eslint"]);
        assert_eq!(args.typescript(), Some(false));
        assert_eq!(args.eslint(), Some(false));

        let args = new_args(&["app", "--no-tailwind", "--tailwind"]);
        assert_eq!(args.tailwind_css(), Some(true));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result = Cli::try_parse_from(["fsgo", "new", "x", "--backend", "beego"]);
        assert!(result.is_err());
    }

    #[test]
    fn arg_enums_map_onto_every_core_variant() {
        let backends: Vec<BackendFramework> = BackendArg::value_variants()
            .iter()
            .map(|&a| a.into())
            .collect();
        assert_eq!(backends, BackendFramework::ALL);

        let frontends: Vec<FrontendFramework> = FrontendArg::value_variants()
            .iter()
            .map(|&a| a.into())
            .collect();
        assert_eq!(frontends, FrontendFramework::ALL);
    }

    #[test]
    fn cli_names_match_core_slugs() {
        for arg in FrontendArg::value_variants() {
            let name = arg.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(name, FrontendFramework::from(*arg).slug());
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["fsgo", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
