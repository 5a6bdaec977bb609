use serde::{Deserialize, Serialize};

/// Remote image reference as stored by the storefront
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(default)]
    pub url: String,
}

impl ImageAsset {
    /// Url, or `None` when the asset has no url at all
    pub fn url(&self) -> Option<&str> {
        if self.url.trim().is_empty() {
            None
        } else {
            Some(self.url.as_str())
        }
    }
}
