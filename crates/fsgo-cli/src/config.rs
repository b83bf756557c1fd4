//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `FSGO_DEFAULTS__BACKEND=gin`
//! 3. Config file (`--config`, `FSGO_CONFIG`, or the platform default)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use fsgo_core::domain::{BackendFramework, FrontendFramework, ProjectType};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Prefix for environment overrides; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "FSGO";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers used when a value is neither passed nor prompted for.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Deliberately unset out of the box: `new` must be told web or api.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendFramework>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend: Option<FrontendFramework>,
    pub typescript: bool,
    pub tailwind_css: bool,
    pub eslint: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_type: None,
            backend: Some(BackendFramework::Fiber),
            frontend: Some(FrontendFramework::NextJs),
            typescript: true,
            tailwind_css: true,
            eslint: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory whose files override the built-in templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

/// Every key `config get` / `config set` understands.
pub const KEYS: &[&str] = &[
    "defaults.type",
    "defaults.backend",
    "defaults.frontend",
    "defaults.typescript",
    "defaults.tailwind_css",
    "defaults.eslint",
    "output.no_color",
    "output.format",
    "templates.local_path",
];

impl AppConfig {
    /// Load configuration: defaults, then the file, then `FSGO_*` variables.
    ///
    /// An explicitly given file must exist when `require_file` is set; the
    /// default one is always optional.
    pub fn load(config_file: Option<&PathBuf>, require_file: bool) -> anyhow::Result<Self> {
        let path = Self::resolve_path(config_file);

        let settings = config::Config::builder()
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(require_file && config_file.is_some()),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Read only the file, ignoring the environment. Used by `config set`
    /// so that overrides from the environment are not persisted.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| CliError::IoError {
            message: format!("Failed to read '{}'", path.display()),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| CliError::ConfigError {
            message: format!("'{}' is not valid configuration: {e}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.fsgo.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "fsgo", "fsgo")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".fsgo.toml"))
    }

    /// The file in effect: the explicit one, else the default.
    pub fn resolve_path(explicit: Option<&PathBuf>) -> PathBuf {
        explicit.cloned().unwrap_or_else(Self::config_path)
    }

    /// Current value of a dotted key, as it would be written on the
    /// command line. Unset optional values print as an empty string.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let d = &self.defaults;
        Ok(match key {
            "defaults.type" => d.project_type.map(|t| t.slug()).unwrap_or_default().into(),
            "defaults.backend" => d.backend.map(|b| b.slug()).unwrap_or_default().into(),
            "defaults.frontend" => d.frontend.map(|f| f.slug()).unwrap_or_default().into(),
            "defaults.typescript" => d.typescript.to_string(),
            "defaults.tailwind_css" => d.tailwind_css.to_string(),
            "defaults.eslint" => d.eslint.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.to_string(),
            "templates.local_path" => self
                .templates
                .local_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => return Err(unknown_key(key)),
        })
    }

    /// Set a dotted key from its command-line spelling. An empty value
    /// clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> CliResult<()> {
        let value = value.trim();
        let d = &mut self.defaults;
        match key {
            "defaults.type" => d.project_type = parse_optional(key, value)?,
            "defaults.backend" => d.backend = parse_optional(key, value)?,
            "defaults.frontend" => d.frontend = parse_optional(key, value)?,
            "defaults.typescript" => d.typescript = parse_bool(key, value)?,
            "defaults.tailwind_css" => d.tailwind_css = parse_bool(key, value)?,
            "defaults.eslint" => d.eslint = parse_bool(key, value)?,
            "output.no_color" => self.output.no_color = parse_bool(key, value)?,
            "output.format" => {
                self.output.format = <OutputFormat as clap::ValueEnum>::from_str(value, true)
                    .map_err(|_| invalid_value(key, value, "auto, human, plain or json"))?
            }
            "templates.local_path" => {
                self.templates.local_path = (!value.is_empty()).then(|| PathBuf::from(value))
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn parse_optional<T>(key: &str, value: &str) -> CliResult<Option<T>>
where
    T: std::str::FromStr<Err = fsgo_core::domain::DomainError>,
{
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|e| CliError::InvalidInput {
        message: format!("{key}: {e}"),
        source: Some(Box::new(e)),
    })
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid_value(key, value, "true or false")),
    }
}

fn invalid_value(key: &str, value: &str, expected: &str) -> CliError {
    CliError::InvalidInput {
        message: format!("{key} cannot be '{value}', expected {expected}"),
        source: None,
    }
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_leave_type_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.project_type, None);
        assert_eq!(cfg.defaults.backend, Some(BackendFramework::Fiber));
        assert!(cfg.defaults.typescript);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\ntype = \"api\"\nbackend = \"chi\"\neslint = false").unwrap();

        let cfg = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.defaults.project_type, Some(ProjectType::Api));
        assert_eq!(cfg.defaults.backend, Some(BackendFramework::Chi));
        assert!(!cfg.defaults.eslint);
        assert!(cfg.defaults.tailwind_css);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nno_color = true\nformat = \"plain\"").unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf()), true).unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Plain);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing), true).is_err());
        assert!(AppConfig::load(Some(&missing), false).is_ok());
    }

    #[test]
    fn written_defaults_read_back_unchanged() {
        let text = AppConfig::default().to_toml().unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn every_key_can_be_read() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(cfg.get(key).is_ok(), "{key}");
        }
        assert_eq!(cfg.get("defaults.frontend").unwrap(), "nextjs");
        assert_eq!(cfg.get("defaults.type").unwrap(), "");
    }

    #[test]
    fn set_parses_domain_values() {
        let mut cfg = AppConfig::default();
        cfg.set("defaults.backend", "Gin").unwrap();
        cfg.set("defaults.frontend", "svelte-kit").unwrap();
        cfg.set("defaults.tailwind_css", "no").unwrap();
        cfg.set("output.format", "json").unwrap();

        assert_eq!(cfg.defaults.backend, Some(BackendFramework::Gin));
        assert_eq!(cfg.defaults.frontend, Some(FrontendFramework::SvelteKit));
        assert!(!cfg.defaults.tailwind_css);
        assert_eq!(cfg.output.format, OutputFormat::Json);

        cfg.set("defaults.backend", "").unwrap();
        assert_eq!(cfg.defaults.backend, None);
    }

    #[test]
    fn set_rejects_bad_values_and_keys() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            cfg.set("defaults.backend", "beego"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(matches!(
            cfg.set("defaults.eslint", "maybe"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(matches!(
            cfg.get("defaults.lang"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
