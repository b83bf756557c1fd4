//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, FsgoError};

/// One stage of a generation run; used to tag fatal errors on their way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationStep {
    CollectConfiguration,
    PrepareProjectDirectory,
    GenerateBackend,
    GenerateFrontend,
    CreateRootFiles,
}

impl GenerationStep {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CollectConfiguration => "collect configuration",
            Self::PrepareProjectDirectory => "prepare project directory",
            Self::GenerateBackend => "generate backend",
            Self::GenerateFrontend => "generate frontend",
            Self::CreateRootFiles => "create root files",
        }
    }
}

impl fmt::Display for GenerationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No generator is registered for the requested framework.
    #[error("No {side} generator registered for {framework}")]
    GeneratorNotFound {
        side: &'static str,
        framework: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command could not be started or exited unsuccessfully.
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// The template catalog has no entry under this logical path.
    #[error("Template not found in catalog: {key}")]
    TemplateMissing { key: String },

    /// The configuration collector could not produce a configuration.
    #[error("Could not collect project configuration: {reason}")]
    ConfigCollection { reason: String },

    /// The user declined to continue.
    #[error("Generation cancelled")]
    Cancelled,

    /// A fatal error, tagged with the step and the subject it concerned.
    #[error("Failed to {step} ({subject}): {source}")]
    StepFailed {
        step: GenerationStep,
        subject: String,
        #[source]
        source: Box<FsgoError>,
    },
}

impl ApplicationError {
    /// Wrap an error with the step that produced it.
    pub fn step(step: GenerationStep, subject: impl Into<String>, source: FsgoError) -> Self {
        Self::StepFailed {
            step,
            subject: subject.into(),
            source: Box::new(source),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::GeneratorNotFound { side, framework } => vec![
                format!("{} has no {} generator yet", framework, side),
                "Try: fsgo list to see which frameworks can be generated".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Command that failed: {}", command),
                "Check that the required toolchain is installed and on PATH".into(),
            ],
            Self::TemplateMissing { key } => vec![
                format!("No template named '{}'", key),
                "If you use templates.local_path, check the overlay directory".into(),
            ],
            Self::ConfigCollection { .. } => vec![
                "Pass the missing values as flags, e.g. --type api --backend fiber".into(),
                "Or run in a terminal to answer the prompts".into(),
            ],
            Self::Cancelled => vec!["Nothing was written".into()],
            Self::StepFailed { source, .. } => source.suggestions(),
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::GeneratorNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::TemplateMissing { .. } => ErrorCategory::Internal,
            Self::CommandFailed { .. } => ErrorCategory::ExternalTool,
            Self::ConfigCollection { .. } => ErrorCategory::Validation,
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::StepFailed { source, .. } => source.category(),
        }
    }

    /// The innermost error beneath any `StepFailed` wrappers.
    pub fn root_cause(&self) -> &ApplicationError {
        match self {
            Self::StepFailed { source, .. } => match source.as_ref() {
                FsgoError::Application(inner) => inner.root_cause(),
                _ => self,
            },
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wrapper_names_step_and_subject() {
        let inner = FsgoError::from(ApplicationError::GeneratorNotFound {
            side: "frontend",
            framework: "Vue".into(),
        });
        let err = ApplicationError::step(GenerationStep::GenerateFrontend, "Vue", inner);
        let msg = err.to_string();
        assert!(msg.contains("generate frontend"));
        assert!(msg.contains("Vue"));
    }

    #[test]
    fn step_wrapper_keeps_inner_category() {
        let inner = FsgoError::from(ApplicationError::GeneratorNotFound {
            side: "backend",
            framework: "Chi".into(),
        });
        let err = ApplicationError::step(GenerationStep::GenerateBackend, "Chi", inner);
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(matches!(
            err.root_cause(),
            ApplicationError::GeneratorNotFound { .. }
        ));
    }

    #[test]
    fn command_failure_is_external_tool() {
        let err = ApplicationError::CommandFailed {
            command: "go mod init server".into(),
            reason: "not found".into(),
        };
        assert_eq!(err.category(), ErrorCategory::ExternalTool);
        assert!(err.suggestions()[0].contains("go mod init server"));
    }
}
