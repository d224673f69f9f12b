// ABOUTME: GitHub container-registry API access.
// ABOUTME: Exposes the client and its request/response types.

mod client;
mod error;
mod models;

pub use client::{DEFAULT_API_BASE, RegistryClient};
pub use error::RegistryError;
pub use models::{ContainerMetadata, PackageVersion, VersionMetadata};
