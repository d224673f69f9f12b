// ABOUTME: Selection of the previous image version from a version listing.
// ABOUTME: Picks the first version tagged with exactly one non-current tag.

use crate::registry::PackageVersion;
use tracing::debug;

/// The stale image selected for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousImage {
    pub tag: String,
    pub id: u64,
}

/// Scan `versions` in API return order and pick the first one carrying
/// exactly one tag that differs from `current_tag`. The version tagged only
/// with the current tag is the image just published; versions with several
/// tags (or none) are PR builds or manually tagged images and are left alone.
///
/// Returns `None` when no version qualifies, meaning only the current tag
/// exists and there is nothing to clean up.
pub fn find_previous_version(
    versions: &[PackageVersion],
    current_tag: &str,
) -> Option<PreviousImage> {
    for version in versions {
        let tags = &version.metadata.container.tags;
        debug!("version {} has tags {:?}", version.id, tags);

        match tags.as_slice() {
            [tag] if tag != current_tag => {
                debug!("previous tag {} found with version id {}", tag, version.id);
                return Some(PreviousImage {
                    tag: tag.clone(),
                    id: version.id,
                });
            }
            _ => {}
        }
    }

    None
}
