//! Static release list shown when the live API cannot be reached.

use crate::provider::{Release, ReleaseAsset};

const FALLBACK_TAG: &str = "v1.0.0";
const FALLBACK_PUBLISHED_AT: &str = "2025-01-15T00:00:00Z";
const FALLBACK_BODY: &str = "\
## Features
- Automatic subject tracking and smart cropping
- Batch processing of video folders
- Portrait, square and landscape output formats

## Requirements
- macOS 12 or later
- Apple Silicon or Intel processor
";

/// Returns the hardcoded fallback releases, newest first.
pub fn fallback_releases() -> Vec<Release> {
    vec![Release {
        tag: FALLBACK_TAG.to_string(),
        published_at: Some(FALLBACK_PUBLISHED_AT.to_string()),
        body: Some(FALLBACK_BODY.to_string()),
        assets: vec![ReleaseAsset {
            name: "Reframer.dmg".to_string(),
            download_url: format!(
                "https://github.com/{}/{}/releases/download/{}/Reframer.dmg",
                crate::provider::REPO_OWNER,
                crate::provider::REPO_NAME,
                FALLBACK_TAG
            ),
        }],
    }]
}
