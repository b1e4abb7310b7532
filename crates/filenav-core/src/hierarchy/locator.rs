//! Node locator: the identity tuple every hierarchy node carries.
//!
//! A locator is `(context, component, area, item, path, name)`. Only the
//! context id is mandatory; the remaining fields narrow the address from a
//! whole context down to a single stored file.

use serde::{Deserialize, Serialize};

/// Context id of the system-wide root.
pub const SYSTEM_CONTEXT_ID: u64 = 1;

/// Address of a node in the browsable hierarchy.
///
/// Context nodes (system, category, course, module, user) leave every field
/// but `context_id` unset. Storage nodes set `component`, `area` and
/// `item_id`; the top of an area uses path `/` and name `.`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeLocator {
    pub context_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NodeLocator {
    /// Locator of a context's own root node.
    pub fn context_root(context_id: u64) -> Self {
        Self {
            context_id,
            ..Self::default()
        }
    }

    /// Locator of the system-wide root.
    pub fn system_root() -> Self {
        Self::context_root(SYSTEM_CONTEXT_ID)
    }

    /// Locator of the top-level directory of a storage area.
    pub fn area_root(context_id: u64, component: &str, area: &str, item_id: i64) -> Self {
        Self {
            context_id,
            component: Some(component.to_string()),
            area: Some(area.to_string()),
            item_id: Some(item_id),
            path: Some("/".to_string()),
            name: Some(".".to_string()),
        }
    }

    /// Same area, different path and name.
    pub fn at(&self, path: &str, name: &str) -> Self {
        Self {
            path: Some(path.to_string()),
            name: Some(name.to_string()),
            ..self.clone()
        }
    }

    /// Whether the locator names a storage area at all.
    pub fn has_area(&self) -> bool {
        self.area.as_deref().is_some_and(|a| !a.is_empty())
    }

    /// Whether the locator points at the top of its area rather than a
    /// subdirectory or a file inside it.
    pub fn is_area_top(&self) -> bool {
        let path_is_root = matches!(self.path.as_deref(), None | Some("") | Some("/"));
        let name_is_root = matches!(self.name.as_deref(), None | Some("") | Some("."));
        path_is_root && name_is_root
    }
}
