//! Projection of hierarchy nodes into picker entries.
//!
//! Field names on the wire follow what file pickers already consume
//! (`title`, `source`, `datemodified`, ...), so the Rust names and the
//! serialized names differ on purpose.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::assets::{AssetUrls, PreviewKind};
use crate::hierarchy::HierarchyNode;
use crate::token;

/// A browsable folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryEntry {
    #[serde(rename = "path")]
    pub token: String,
    #[serde(rename = "title")]
    pub display_name: String,
    #[serde(rename = "datemodified", with = "chrono::serde::ts_seconds_option")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(rename = "datecreated", with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    pub thumbnail: String,
    /// Always empty: children are fetched with a follow-up listing.
    pub children: Vec<ProjectedNode>,
}

/// A pickable file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    #[serde(rename = "source")]
    pub token: String,
    #[serde(rename = "title")]
    pub display_name: String,
    #[serde(rename = "datemodified", with = "chrono::serde::ts_seconds_option")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(rename = "datecreated", with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    pub size: u64,
    pub author: Option<String>,
    pub license: Option<String>,
    #[serde(rename = "isref")]
    pub is_external_reference: bool,
    #[serde(rename = "originalmissing", skip_serializing_if = "is_false")]
    pub is_missing_backing: bool,
    pub thumbnail: String,
    pub icon: String,
    #[serde(rename = "realthumbnail", skip_serializing_if = "Option::is_none")]
    pub preview_thumbnail: Option<String>,
    #[serde(rename = "realicon", skip_serializing_if = "Option::is_none")]
    pub preview_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// One entry of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProjectedNode {
    Directory(DirectoryEntry),
    File(FileEntry),
}

impl ProjectedNode {
    pub fn token(&self) -> &str {
        match self {
            ProjectedNode::Directory(d) => &d.token,
            ProjectedNode::File(f) => &f.token,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ProjectedNode::Directory(d) => &d.display_name,
            ProjectedNode::File(f) => &f.display_name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, ProjectedNode::Directory(_))
    }
}

/// One step of the breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    #[serde(rename = "path")]
    pub token: String,
    #[serde(rename = "name")]
    pub display_name: String,
}

/// Project a node into a listing entry.
pub fn project(node: &HierarchyNode, assets: &dyn AssetUrls) -> ProjectedNode {
    let token = token::encode(&node.locator);
    let Some(meta) = node.file.as_ref() else {
        return ProjectedNode::Directory(DirectoryEntry {
            token,
            display_name: node.name.clone(),
            modified_at: node.modified,
            created_at: node.created,
            thumbnail: assets.folder_thumbnail(),
            children: Vec::new(),
        });
    };

    let mut entry = FileEntry {
        token,
        display_name: node.name.clone(),
        modified_at: node.modified,
        created_at: node.created,
        size: meta.size,
        author: meta.author.clone(),
        license: meta.license.clone(),
        is_external_reference: meta.is_external,
        is_missing_backing: node.is_missing_backing(),
        thumbnail: assets.file_thumbnail(node),
        icon: assets.file_icon(node),
        preview_thumbnail: None,
        preview_icon: None,
        image_width: None,
        image_height: None,
    };
    if let Some(image) = meta.image {
        entry.preview_thumbnail = assets.preview(node, PreviewKind::Thumb);
        entry.preview_icon = assets.preview(node, PreviewKind::TinyIcon);
        entry.image_width = Some(image.width);
        entry.image_height = Some(image.height);
    }
    ProjectedNode::File(entry)
}

/// Project a node into a breadcrumb step.
pub fn project_path(node: &HierarchyNode) -> PathEntry {
    PathEntry {
        token: token::encode(&node.locator),
        display_name: node.name.clone(),
    }
}
