//! Navigation settings, loaded from `filenav.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// How thumbnail and icon URLs are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSettings {
    /// Base URL of the icon set; icons live under `<base>/f/`.
    #[serde(default = "default_pix_base_url")]
    pub pix_base_url: String,
    /// Pixel size of folder and file thumbnails.
    #[serde(default = "default_thumb_size")]
    pub preview_thumb_size: u32,
    /// Pixel size of small file icons.
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,
}

fn default_pix_base_url() -> String {
    "/pix".to_string()
}

fn default_thumb_size() -> u32 {
    90
}

fn default_icon_size() -> u32 {
    24
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            pix_base_url: default_pix_base_url(),
            preview_thumb_size: default_thumb_size(),
            icon_size: default_icon_size(),
        }
    }
}

/// Site-level navigation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSettings {
    /// Show course categories to viewers who cannot manage courses.
    #[serde(default)]
    pub show_my_course_categories: bool,
    /// Context the picker opens in when no token is given.
    #[serde(default)]
    pub default_context: Option<u64>,
    #[serde(default)]
    pub assets: AssetSettings,
}

impl NavigationSettings {
    /// Load settings from a toml file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                log::warn!("settings parse error in {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
