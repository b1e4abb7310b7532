//! The browsable file hierarchy, as the engine sees it.
//!
//! ```text
//! Listing engine  ->  HierarchyBackend (find / children / count / parent)
//! ```
//!
//! Nodes are plain data ([`HierarchyNode`]) carrying their own
//! [`NodeLocator`] and an explicit [`NodeKind`]. The backend owns the tree;
//! the engine only reads from it.

pub mod backend;
pub mod filter;
pub mod locator;
pub mod memory;
pub mod node;

pub use backend::HierarchyBackend;
pub use filter::ExtensionFilter;
pub use locator::{NodeLocator, SYSTEM_CONTEXT_ID};
pub use memory::{MemoryBackend, NodeId, TreeSpec};
pub use node::{ContextLevel, FileMeta, HierarchyNode, ImageInfo, NodeKind, STATUS_MISSING_BACKING};
