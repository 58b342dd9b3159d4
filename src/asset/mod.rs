//! Asset selection module
//!
//! Picks which attachment of a release the download button should point at,
//! and the label shown next to it.

mod picker;

pub use picker::{AssetPicker, PreferredAssetPicker};

use crate::provider::Release;

/// Label used when a release has nothing to download.
pub const DEFAULT_ASSET_LABEL: &str = "Download";

/// Returns the download URL of the preferred asset, or `None` when the
/// release has no assets.
pub fn select_download(release: &Release) -> Option<&str> {
    PreferredAssetPicker::default()
        .pick(&release.assets)
        .map(|asset| asset.download_url.as_str())
}

/// Returns the name of the release's first asset.
///
/// This always reports the first asset, even when [`select_download`]
/// prefers a later one.
pub fn asset_label(release: &Release) -> &str {
    release
        .assets
        .first()
        .map(|asset| asset.name.as_str())
        .unwrap_or(DEFAULT_ASSET_LABEL)
}
