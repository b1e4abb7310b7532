//! filenav-core: pruned, token-addressed listings of a permission-gated
//! file hierarchy for file pickers.
//!
//! # Quick Start
//!
//! ```no_run
//! use filenav_core::{
//!     CapabilitySet, ExtensionFilter, ListingEngine, MemoryBackend, NavigationSettings,
//!     RequestContext,
//! };
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = MemoryBackend::load(Path::new("tree.json"))?;
//!     let settings = NavigationSettings::load(Path::new("filenav.toml"));
//!     let engine = ListingEngine::with_pix_assets(Box::new(backend), &settings.assets);
//!
//!     let viewer = CapabilitySet::new();
//!     let request = RequestContext::new(&viewer, &settings);
//!     let listing = engine.listing(&request, "", &ExtensionFilter::parse("*"))?;
//!     for entry in &listing.list {
//!         println!("{} -> {}", entry.display_name(), entry.token());
//!     }
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod hierarchy;
pub mod permissions;
pub mod settings;
pub mod token;

pub use engine::{
    AssetUrls, ListingEngine, ListingResult, PathEntry, PixAssets, ProjectedNode,
    RepositoryCapabilities, RequestContext,
};
pub use error::{ListingError, TokenError};
pub use hierarchy::{
    ContextLevel, ExtensionFilter, FileMeta, HierarchyBackend, HierarchyNode, MemoryBackend,
    NodeKind, NodeLocator, SYSTEM_CONTEXT_ID,
};
pub use permissions::{CapabilitySet, MANAGE_COURSES, PermissionChecker};
pub use settings::{AssetSettings, NavigationSettings};

/// Shared fixtures for unit tests across filenav-core modules.
#[cfg(test)]
pub(crate) mod test_support {
    use crate::hierarchy::MemoryBackend;

    const CAMPUS_JSON: &str = include_str!("../tests/fixtures/campus.json");

    /// The campus hierarchy used throughout the tests:
    ///
    /// ```text
    /// System (1)
    /// ├── Science (2, category)
    /// │   └── Physics 101 (3, course)
    /// │       ├── Legacy course files  → syllabus.pdf
    /// │       ├── Lecture slides (4)   → Content → diagram.png, extra/handout.pdf, notes.txt
    /// │       ├── Essay assignment (5) → Introduction → brief.pdf
    /// │       │                        → Attachments  → photo.png
    /// │       └── Empty forum (7)      → Attachments (empty)
    /// └── Private files (6, user)      → Private → pics/cat.png, lost.doc (missing)
    /// ```
    pub(crate) fn campus() -> MemoryBackend {
        MemoryBackend::from_json(CAMPUS_JSON).unwrap()
    }
}
