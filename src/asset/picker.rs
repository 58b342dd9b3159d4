use crate::provider::ReleaseAsset;

/// Trait for selecting an asset from a list of available assets
pub trait AssetPicker: Send + Sync {
    /// Pick the most appropriate asset from the given list
    ///
    /// Returns `None` if no suitable asset is found
    fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset>;
}

/// Picks the first asset whose name contains a marker (case-insensitive),
/// otherwise the first asset in the list.
pub struct PreferredAssetPicker {
    marker: String,
}

impl PreferredAssetPicker {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into().to_lowercase(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.marker)
    }
}

impl Default for PreferredAssetPicker {
    /// Disk images are the primary macOS distribution format.
    fn default() -> Self {
        Self::new(".dmg")
    }
}

impl AssetPicker for PreferredAssetPicker {
    fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        assets
            .iter()
            .find(|a| self.matches(&a.name))
            .or_else(|| assets.first())
    }
}
