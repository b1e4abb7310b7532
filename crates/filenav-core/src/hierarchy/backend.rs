//! Hierarchy backend trait: the browsing abstraction.
//!
//! Backends know how to find nodes, list their non-empty children and walk
//! to a parent. They know nothing about pruning, tokens or projection; the
//! engine layers those on top.
//!
//! # Implementing a backend
//!
//! "Non-empty" means a file that passes the filter, or a directory holding
//! at least one such file somewhere below it. Children come back in the
//! order the picker should show them.
//!
//! Any `io::Error` a backend returns is an infrastructure failure and is
//! propagated to the caller untouched.

use std::io;

use super::filter::ExtensionFilter;
use super::locator::NodeLocator;
use super::node::HierarchyNode;

/// Read-only view of a browsable file hierarchy.
pub trait HierarchyBackend {
    /// Node at exactly this locator, or `None` if it does not exist (or the
    /// backend will not show it).
    fn node(&self, locator: &NodeLocator) -> io::Result<Option<HierarchyNode>>;

    /// Children of `node` that are non-empty under `filter`, in listing order.
    /// Files have no children.
    fn non_empty_children(
        &self,
        node: &HierarchyNode,
        filter: &ExtensionFilter,
    ) -> io::Result<Vec<HierarchyNode>>;

    /// Number of non-empty children of `node`, counting stops at `limit`.
    fn count_non_empty_children(
        &self,
        node: &HierarchyNode,
        filter: &ExtensionFilter,
        limit: usize,
    ) -> io::Result<usize>;

    /// Parent of `node`, or `None` at the top of the hierarchy.
    fn parent(&self, node: &HierarchyNode) -> io::Result<Option<HierarchyNode>>;
}
