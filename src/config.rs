// ABOUTME: Environment-driven configuration for a prune run.
// ABOUTME: Reads the CI-provided variables and derives org, tag, and paths.

use crate::error::{Error, Result};
use tracing::debug;

pub const ENV_REGISTRY: &str = "REGISTRY";
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_CONTAINER_NAME: &str = "CONTAINER_NAME";
pub const ENV_UNIQUE_TAG: &str = "UNIQUE_TAG";
pub const ENV_USER: &str = "USER";
pub const ENV_CURRENT_COMMIT: &str = "CURRENT_COMMIT";

#[derive(Debug, Clone)]
pub struct Config {
    pub registry: String,
    pub token: String,
    pub container_name: String,
    /// Tag of the image just published, already sanitized.
    pub unique_tag: String,
    pub user: String,
    /// Informational only; the CI workflow exports it but no logic needs it.
    pub current_commit: Option<String>,
    /// Organization owning the package, derived from the registry path.
    pub org: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let registry = require(ENV_REGISTRY)?;
        let token = require(ENV_TOKEN)?;
        let container_name = require(ENV_CONTAINER_NAME)?;
        let unique_tag = sanitize_tag(&require(ENV_UNIQUE_TAG)?);
        let user = require(ENV_USER)?;
        let current_commit = std::env::var(ENV_CURRENT_COMMIT).ok();

        if let Some(ref commit) = current_commit {
            debug!("running for commit {commit}");
        }

        let org = org_from_registry(&registry)?;

        Ok(Self {
            registry,
            token,
            container_name,
            unique_tag,
            user,
            current_commit,
            org,
        })
    }

    /// Full image path used in console messages,
    /// e.g. `ghcr.io/my-org/app:pr-42`.
    pub fn container_path(&self) -> String {
        format!(
            "{}/{}:{}",
            self.registry, self.container_name, self.unique_tag
        )
    }
}

fn require(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::MissingEnvVar(name.to_string()))
}

/// Registry tag strings disallow slashes, so branch-derived tags like
/// `feature/x` are pushed as `feature-x`.
pub fn sanitize_tag(raw: &str) -> String {
    raw.replace('/', "-")
}

/// The organization is the path segment after the registry host,
/// e.g. `ghcr.io/my-org` yields `my-org`.
pub fn org_from_registry(registry: &str) -> Result<String> {
    registry
        .split('/')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidRegistry(registry.to_string()))
}
