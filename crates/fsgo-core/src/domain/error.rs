// ============================================================================
// domain/error.rs - CONFIGURATION MODEL ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they are carried inside wrapped step errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    // ========================================================================
    // Invariant Violations
    // ========================================================================
    #[error("Project type '{project_type}' {reason}")]
    FrontendMismatch {
        project_type: String,
        reason: &'static str,
    },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfig(msg) => vec![
                "Check your project configuration".into(),
                format!("Details: {}", msg),
            ],
            Self::UnknownValue { kind, value } => match *kind {
                "project type" => vec![
                    format!("'{}' is not a project type", value),
                    "  • web  - Full-stack with frontend + backend".into(),
                    "  • api  - Backend only".into(),
                ],
                "backend framework" => vec![
                    format!("'{}' is not a supported backend", value),
                    "Supported backends: fiber, gin, echo, chi".into(),
                ],
                "frontend framework" => vec![
                    format!("'{}' is not a known frontend", value),
                    "Try: fsgo list to see frontends and their status".into(),
                ],
                _ => vec![format!("Unknown {}: {}", kind, value)],
            },
            Self::FrontendMismatch { .. } => vec![
                "Web projects need a frontend configuration".into(),
                "API projects must not carry one".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                "Use --help for usage information".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig(_) | Self::UnknownValue { .. } => ErrorCategory::Validation,
            Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::FrontendMismatch { .. } => ErrorCategory::Invariant,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Invariant,
}
