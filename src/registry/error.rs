// ABOUTME: Error types for registry API calls.
// ABOUTME: Distinguishes transport failures from non-success HTTP statuses.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("building HTTP client failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("listing versions for container {container} failed: {status}: {body}")]
    List {
        container: String,
        status: StatusCode,
        body: String,
    },

    #[error("deleting version {version_id} failed: {status}: {body}")]
    Delete {
        version_id: u64,
        status: StatusCode,
        body: String,
    },

    #[error("decoding version list failed: {0}")]
    Decode(#[source] reqwest::Error),
}
