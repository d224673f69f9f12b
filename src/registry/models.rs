// ABOUTME: Response models for the GitHub package-versions API.
// ABOUTME: Only the fields the prune logic needs are deserialized.

use serde::Deserialize;

/// One stored artifact version of a container package.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageVersion {
    pub id: u64,

    /// Content digest of the version. Informational only.
    #[serde(default)]
    pub name: Option<String>,

    pub metadata: VersionMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionMetadata {
    pub container: ContainerMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContainerMetadata {
    /// Tags attached to this version, in registry order. May be empty for
    /// untagged (digest-only) versions.
    #[serde(default)]
    pub tags: Vec<String>,
}
