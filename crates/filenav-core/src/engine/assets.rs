//! Thumbnail, icon and preview URLs for projected entries.

use url::Url;

use crate::hierarchy::HierarchyNode;
use crate::settings::AssetSettings;

/// Image preview flavours a file URL can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Thumb,
    TinyIcon,
}

impl PreviewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewKind::Thumb => "thumb",
            PreviewKind::TinyIcon => "tinyicon",
        }
    }
}

/// URL rendering seam.
pub trait AssetUrls {
    /// Thumbnail shown for every directory.
    fn folder_thumbnail(&self) -> String;
    /// Large type icon for a file.
    fn file_thumbnail(&self, node: &HierarchyNode) -> String;
    /// Small type icon for a file.
    fn file_icon(&self, node: &HierarchyNode) -> String;
    /// Preview of the file's own image content, if it has a URL.
    fn preview(&self, node: &HierarchyNode, kind: PreviewKind) -> Option<String>;
}

/// Icon set laid out as `<base>/f/<icon>-<size>`.
#[derive(Debug, Clone, Default)]
pub struct PixAssets {
    settings: AssetSettings,
}

impl PixAssets {
    pub fn new(settings: AssetSettings) -> Self {
        Self { settings }
    }

    fn pix(&self, icon: &str, size: u32) -> String {
        format!(
            "{}/f/{}-{}",
            self.settings.pix_base_url.trim_end_matches('/'),
            icon,
            size
        )
    }
}

/// Icon name for a file, picked from its guessed MIME type.
pub fn icon_for(file_name: &str) -> &'static str {
    let Some(mime) = mime_guess::from_path(file_name).first() else {
        return "unknown";
    };
    let subtype = mime.subtype().as_str();
    match mime.type_().as_str() {
        "image" => "image",
        "audio" => "audio",
        "video" => "video",
        "text" if subtype == "html" => "html",
        "text" => "text",
        "application" => match subtype {
            "pdf" => "pdf",
            "zip" | "gzip" | "x-tar" | "x-7z-compressed" | "vnd.rar" | "x-rar-compressed" => {
                "archive"
            }
            s if s.contains("spreadsheet") || s.contains("excel") => "spreadsheet",
            s if s.contains("presentation") || s.contains("powerpoint") => "powerpoint",
            s if s.contains("wordprocessing") || s == "msword" || s == "rtf" => "document",
            _ => "unknown",
        },
        _ => "unknown",
    }
}

impl AssetUrls for PixAssets {
    fn folder_thumbnail(&self) -> String {
        self.pix("folder", self.settings.preview_thumb_size)
    }

    fn file_thumbnail(&self, node: &HierarchyNode) -> String {
        self.pix(icon_for(&node.name), self.settings.preview_thumb_size)
    }

    fn file_icon(&self, node: &HierarchyNode) -> String {
        self.pix(icon_for(&node.name), self.settings.icon_size)
    }

    fn preview(&self, node: &HierarchyNode, kind: PreviewKind) -> Option<String> {
        let raw = node.file.as_ref()?.url.as_deref()?;
        let mut url = match Url::parse(raw) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("file '{}' has an unusable URL '{}': {}", node.name, raw, e);
                return None;
            }
        };
        // The modification time busts caches when the file is replaced.
        let oid = node.modified.map(|t| t.timestamp()).unwrap_or(0);
        url.query_pairs_mut()
            .append_pair("preview", kind.as_str())
            .append_pair("oid", &oid.to_string());
        Some(url.to_string())
    }
}
