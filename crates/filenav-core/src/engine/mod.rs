//! Listing engine: resolve, prune, project.
//!
//! ```text
//! token -> resolve -> Pruner::visible_children -> project      => list
//!                  \-> Pruner::breadcrumb      -> project_path => path
//! ```
//!
//! Viewer permissions and site settings travel in a [`RequestContext`]
//! passed into every call; nothing is read from ambient state.

pub mod assets;
mod listing;
pub mod project;
pub mod prune;
pub mod resolve;

pub use assets::{AssetUrls, PixAssets, PreviewKind};
pub use listing::{CAPABILITIES, ListingEngine, ListingResult, RepositoryCapabilities, ReturnTypes};
pub use project::{DirectoryEntry, FileEntry, PathEntry, ProjectedNode};
pub use prune::{ParentHint, Pruner};

use crate::permissions::PermissionChecker;
use crate::settings::NavigationSettings;

/// Per-request viewer and site state.
#[derive(Clone, Copy)]
pub struct RequestContext<'a> {
    pub permissions: &'a dyn PermissionChecker,
    pub settings: &'a NavigationSettings,
}

impl<'a> RequestContext<'a> {
    pub fn new(permissions: &'a dyn PermissionChecker, settings: &'a NavigationSettings) -> Self {
        Self {
            permissions,
            settings,
        }
    }
}
