// ABOUTME: Tests for previous-image selection over version listings.
// ABOUTME: Covers scan order, tag-count filtering, and the no-match case.

use ghcr_prune::registry::{ContainerMetadata, PackageVersion, VersionMetadata};
use ghcr_prune::select::{PreviousImage, find_previous_version};

fn version(id: u64, tags: &[&str]) -> PackageVersion {
    PackageVersion {
        id,
        name: None,
        metadata: VersionMetadata {
            container: ContainerMetadata {
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
        },
    }
}

#[test]
fn selects_first_single_tag_non_current_version() {
    let versions = vec![
        version(1, &["v1"]),
        version(2, &["v2", "pr-1"]),
        version(3, &["v3"]),
    ];

    let previous = find_previous_version(&versions, "v3").unwrap();
    assert_eq!(
        previous,
        PreviousImage {
            tag: "v1".to_string(),
            id: 1,
        }
    );
}

#[test]
fn returns_none_when_every_version_is_current_or_multi_tagged() {
    let versions = vec![version(1, &["v3"]), version(2, &["v2", "pr-1"])];

    assert!(find_previous_version(&versions, "v3").is_none());
}

#[test]
fn returns_none_for_empty_listing() {
    assert!(find_previous_version(&[], "v3").is_none());
}

#[test]
fn skips_untagged_versions() {
    let versions = vec![version(1, &[]), version(2, &["v2"])];

    let previous = find_previous_version(&versions, "v3").unwrap();
    assert_eq!(previous.id, 2);
}

#[test]
fn skips_the_current_tag_even_when_listed_first() {
    let versions = vec![version(9, &["v3"]), version(4, &["v2"])];

    let previous = find_previous_version(&versions, "v3").unwrap();
    assert_eq!(previous.id, 4);
    assert_eq!(previous.tag, "v2");
}

#[test]
fn first_of_several_candidates_wins() {
    // The scan stops at the first qualifying version; later stale tags are
    // left untouched.
    let versions = vec![version(1, &["old-1"]), version(2, &["old-2"])];

    let previous = find_previous_version(&versions, "v3").unwrap();
    assert_eq!(previous.tag, "old-1");
}
