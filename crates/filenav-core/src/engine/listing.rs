//! ListingEngine: the single entry point a picker talks to.
//!
//! Resolves the request token, lists the pruned children of the resolved
//! node and builds the breadcrumb with the same pruning rules.

use serde::Serialize;

use super::RequestContext;
use super::assets::{AssetUrls, PixAssets};
use super::project::{PathEntry, ProjectedNode, project, project_path};
use super::prune::Pruner;
use super::resolve::resolve;
use crate::error::ListingError;
use crate::hierarchy::{ExtensionFilter, HierarchyBackend};
use crate::settings::AssetSettings;

/// Listing payload returned to the picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingResult {
    pub list: Vec<ProjectedNode>,
    pub path: Vec<PathEntry>,
    /// Directories are fetched lazily with their own token.
    pub dynload: bool,
    pub nosearch: bool,
    pub nologin: bool,
    pub nopaging: bool,
}

/// How picked files may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReturnTypes {
    /// A copy of the file.
    pub internal: bool,
    /// A reference to the original file.
    pub reference: bool,
}

/// What the picker needs to know about this repository up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepositoryCapabilities {
    pub return_types: ReturnTypes,
    pub hosts_local_files: bool,
    pub contains_private_data: bool,
    pub supports_search: bool,
    pub supports_paging: bool,
    pub requires_login: bool,
}

/// Capabilities of a local hierarchy repository.
pub const CAPABILITIES: RepositoryCapabilities = RepositoryCapabilities {
    return_types: ReturnTypes {
        internal: true,
        reference: true,
    },
    hosts_local_files: true,
    contains_private_data: false,
    supports_search: false,
    supports_paging: false,
    requires_login: false,
};

/// Listing engine over one backend.
pub struct ListingEngine {
    backend: Box<dyn HierarchyBackend>,
    assets: Box<dyn AssetUrls>,
}

impl ListingEngine {
    pub fn new(backend: Box<dyn HierarchyBackend>, assets: Box<dyn AssetUrls>) -> Self {
        Self { backend, assets }
    }

    /// Engine with the default icon set.
    pub fn with_pix_assets(backend: Box<dyn HierarchyBackend>, settings: &AssetSettings) -> Self {
        Self::new(backend, Box::new(PixAssets::new(settings.clone())))
    }

    pub fn backend(&self) -> &dyn HierarchyBackend {
        self.backend.as_ref()
    }

    /// List what the picker should show for `token` (empty for the start).
    pub fn listing(
        &self,
        request: &RequestContext<'_>,
        token: &str,
        filter: &ExtensionFilter,
    ) -> Result<ListingResult, ListingError> {
        let current = resolve(self.backend(), token, request)?;
        let pruner = Pruner::new(self.backend(), *request, filter);

        let list = pruner
            .visible_children(&current)?
            .iter()
            .map(|node| project(node, self.assets.as_ref()))
            .collect();
        let path = pruner
            .breadcrumb(&current)?
            .iter()
            .map(project_path)
            .collect();

        Ok(ListingResult {
            list,
            path,
            dynload: true,
            nosearch: true,
            nologin: true,
            nopaging: true,
        })
    }

    pub fn capabilities(&self) -> RepositoryCapabilities {
        CAPABILITIES
    }
}
