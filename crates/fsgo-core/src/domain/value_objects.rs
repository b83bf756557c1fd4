//! Domain value objects: ProjectType, BackendFramework, FrontendFramework.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They know their display names, their command-line slugs and how to parse
//! themselves. Which of them actually have a generator is NOT decided here:
//! that is the registry's job (`crate::application::registry`).
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `slug` and `FromStr` arms here
//! 3. Add it to `ALL`
//! 4. Implement a generator and register it if it should be generatable

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectType ───────────────────────────────────────────────────────────────

/// What kind of project to scaffold.
///
/// `Web` generates a backend *and* a frontend; `Api` generates the backend
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Web,
    Api,
}

impl ProjectType {
    pub const ALL: [ProjectType; 2] = [Self::Web, Self::Api];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Api => "API",
        }
    }

    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Api => "api",
        }
    }

    /// One-line explanation shown next to the choice in prompts.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Web => "Full-stack with frontend + backend",
            Self::Api => "Backend only",
        }
    }

    /// Whether this project type carries a frontend.
    pub const fn has_frontend(self) -> bool {
        matches!(self, Self::Web)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "web" | "fullstack" => Ok(Self::Web),
            "api" | "rest" | "backend" => Ok(Self::Api),
            other => Err(DomainError::UnknownValue {
                kind: "project type",
                value: other.to_string(),
            }),
        }
    }
}

// ── BackendFramework ──────────────────────────────────────────────────────────

/// Go web frameworks a backend can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendFramework {
    Fiber,
    Gin,
    Echo,
    Chi,
}

impl BackendFramework {
    pub const ALL: [BackendFramework; 4] = [Self::Fiber, Self::Gin, Self::Echo, Self::Chi];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fiber => "Fiber",
            Self::Gin => "Gin",
            Self::Echo => "Echo",
            Self::Chi => "Chi",
        }
    }

    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Fiber => "fiber",
            Self::Gin => "gin",
            Self::Echo => "echo",
            Self::Chi => "chi",
        }
    }
}

impl fmt::Display for BackendFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendFramework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fiber" => Ok(Self::Fiber),
            "gin" => Ok(Self::Gin),
            "echo" => Ok(Self::Echo),
            "chi" => Ok(Self::Chi),
            other => Err(DomainError::UnknownValue {
                kind: "backend framework",
                value: other.to_string(),
            }),
        }
    }
}

// ── FrontendFramework ─────────────────────────────────────────────────────────

/// Frontend frameworks a user can pick.
///
/// This list is deliberately wider than the set of frontend generators: a
/// framework may be offered before its generator exists, in which case the
/// run fails with a lookup error at the frontend step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontendFramework {
    NextJs,
    React,
    Vue,
    Svelte,
    SvelteKit,
    Solid,
}

impl FrontendFramework {
    pub const ALL: [FrontendFramework; 6] = [
        Self::NextJs,
        Self::React,
        Self::Vue,
        Self::Svelte,
        Self::SvelteKit,
        Self::Solid,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NextJs => "Next.js",
            Self::React => "React",
            Self::Vue => "Vue",
            Self::Svelte => "Svelte",
            Self::SvelteKit => "SvelteKit",
            Self::Solid => "Solid",
        }
    }

    pub const fn slug(&self) -> &'static str {
        match self {
            Self::NextJs => "nextjs",
            Self::React => "react",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
            Self::SvelteKit => "sveltekit",
            Self::Solid => "solid",
        }
    }
}

impl fmt::Display for FrontendFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrontendFramework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nextjs" | "next.js" | "next" => Ok(Self::NextJs),
            "react" => Ok(Self::React),
            "vue" => Ok(Self::Vue),
            "svelte" => Ok(Self::Svelte),
            "sveltekit" | "svelte-kit" => Ok(Self::SvelteKit),
            "solid" | "solidjs" => Ok(Self::Solid),
            other => Err(DomainError::UnknownValue {
                kind: "frontend framework",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_parses_slugs_and_display_names() {
        assert_eq!(ProjectType::from_str("web").unwrap(), ProjectType::Web);
        assert_eq!(ProjectType::from_str("API").unwrap(), ProjectType::Api);
        assert_eq!(ProjectType::from_str("rest").unwrap(), ProjectType::Api);
        assert!(ProjectType::from_str("desktop").is_err());
    }

    #[test]
    fn only_web_has_frontend() {
        assert!(ProjectType::Web.has_frontend());
        assert!(!ProjectType::Api.has_frontend());
    }

    #[test]
    fn backend_round_trips_through_display_name() {
        for fw in BackendFramework::ALL {
            assert_eq!(BackendFramework::from_str(fw.as_str()).unwrap(), fw);
            assert_eq!(BackendFramework::from_str(fw.slug()).unwrap(), fw);
        }
    }

    #[test]
    fn frontend_accepts_dotted_next_name() {
        assert_eq!(
            FrontendFramework::from_str("Next.js").unwrap(),
            FrontendFramework::NextJs
        );
        assert_eq!(
            FrontendFramework::from_str("svelte-kit").unwrap(),
            FrontendFramework::SvelteKit
        );
    }

    #[test]
    fn unknown_framework_error_names_value() {
        let err = BackendFramework::from_str("Rocket").unwrap_err();
        assert!(err.to_string().contains("rocket"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&FrontendFramework::SvelteKit).unwrap();
        assert_eq!(json, "\"sveltekit\"");
        let back: BackendFramework = serde_json::from_str("\"chi\"").unwrap();
        assert_eq!(back, BackendFramework::Chi);
    }
}
