//! Hierarchy node data types shared across the crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::locator::NodeLocator;

/// Status value a backend reports for a file whose backing content is gone.
pub const STATUS_MISSING_BACKING: u32 = 666;

/// Level of the security context a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextLevel {
    System,
    User,
    CourseCategory,
    Course,
    Module,
    Block,
}

/// What a node stands for in the hierarchy.
///
/// Everything except `StorageArea` anchors navigation and is never pruned
/// on structural grounds. `CourseCategory` may still be hidden for viewers
/// without course management rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    SystemRoot,
    CourseCategory,
    Course,
    UserArea,
    LegacyCourseArea,
    ModuleContainer,
    /// A component's storage area, a folder inside one, or a stored file.
    StorageArea,
}

impl NodeKind {
    /// Context level implied by the kind, if it is fixed.
    pub fn implied_level(self) -> Option<ContextLevel> {
        match self {
            NodeKind::SystemRoot => Some(ContextLevel::System),
            NodeKind::CourseCategory => Some(ContextLevel::CourseCategory),
            NodeKind::Course | NodeKind::LegacyCourseArea => Some(ContextLevel::Course),
            NodeKind::UserArea => Some(ContextLevel::User),
            NodeKind::ModuleContainer => Some(ContextLevel::Module),
            NodeKind::StorageArea => None,
        }
    }
}

/// Pixel dimensions of an image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

/// Metadata only files have.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// The file is a reference to content held by an external repository.
    #[serde(default)]
    pub is_external: bool,
    #[serde(default)]
    pub status: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageInfo>,
    /// Download URL, used as the base for image previews.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A node as reported by the backend. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub locator: NodeLocator,
    pub kind: NodeKind,
    pub context_level: ContextLevel,
    pub name: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub modified: Option<DateTime<Utc>>,
    /// `None` for directories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileMeta>,
}

impl HierarchyNode {
    /// A context node (system, category, course, user or module).
    ///
    /// `kind` must imply a context level; `StorageArea` falls back to the
    /// system level and should be built with [`HierarchyNode::directory`].
    pub fn context(kind: NodeKind, context_id: u64, name: impl Into<String>) -> Self {
        Self {
            locator: NodeLocator::context_root(context_id),
            kind,
            context_level: kind.implied_level().unwrap_or(ContextLevel::System),
            name: name.into(),
            created: None,
            modified: None,
            file: None,
        }
    }

    /// A storage directory.
    pub fn directory(locator: NodeLocator, level: ContextLevel, name: impl Into<String>) -> Self {
        Self {
            locator,
            kind: NodeKind::StorageArea,
            context_level: level,
            name: name.into(),
            created: None,
            modified: None,
            file: None,
        }
    }

    /// A stored file.
    pub fn file(
        locator: NodeLocator,
        level: ContextLevel,
        name: impl Into<String>,
        meta: FileMeta,
    ) -> Self {
        Self {
            file: Some(meta),
            ..Self::directory(locator, level, name)
        }
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_times(
        mut self,
        created: Option<DateTime<Utc>>,
        modified: Option<DateTime<Utc>>,
    ) -> Self {
        self.created = created;
        self.modified = modified;
        self
    }

    pub fn is_directory(&self) -> bool {
        self.file.is_none()
    }

    /// Whether the backend flagged the file's backing content as missing.
    pub fn is_missing_backing(&self) -> bool {
        self.file
            .as_ref()
            .is_some_and(|f| f.status == STATUS_MISSING_BACKING)
    }
}
