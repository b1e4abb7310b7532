//! In-memory hierarchy backend.
//!
//! Holds the whole tree in an arena. Insertion order is listing order.
//! Used by the CLI (loaded from a JSON fixture) and throughout the tests.

use std::collections::HashMap;
use std::io::{self, ErrorKind};
use std::path::Path;

use serde::Deserialize;

use super::backend::HierarchyBackend;
use super::filter::ExtensionFilter;
use super::locator::NodeLocator;
use super::node::HierarchyNode;

/// Handle to a node inside a [`MemoryBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Serialized form of a subtree: a node and its children, recursively.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeSpec {
    pub node: HierarchyNode,
    #[serde(default)]
    pub children: Vec<TreeSpec>,
}

#[derive(Debug)]
struct Slot {
    node: HierarchyNode,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed hierarchy.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: Vec<Slot>,
    index: HashMap<NodeLocator, NodeId>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent` (or as the top of the hierarchy).
    ///
    /// Locators must be unique and only directories can have children.
    pub fn insert(&mut self, parent: Option<NodeId>, node: HierarchyNode) -> io::Result<NodeId> {
        if self.index.contains_key(&node.locator) {
            return Err(io::Error::new(
                ErrorKind::AlreadyExists,
                format!("duplicate locator for node '{}'", node.name),
            ));
        }
        if let Some(p) = parent {
            let slot = self.slots.get(p.0).ok_or_else(|| {
                io::Error::new(ErrorKind::NotFound, format!("no parent slot {}", p.0))
            })?;
            if !slot.node.is_directory() {
                return Err(io::Error::new(
                    ErrorKind::InvalidInput,
                    format!("cannot add '{}' under file '{}'", node.name, slot.node.name),
                ));
            }
        }
        let id = NodeId(self.slots.len());
        self.index.insert(node.locator.clone(), id);
        self.slots.push(Slot {
            node,
            parent,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.slots[p.0].children.push(id);
        }
        Ok(id)
    }

    /// Add a whole subtree, returning the id of its top node.
    pub fn insert_tree(&mut self, parent: Option<NodeId>, spec: TreeSpec) -> io::Result<NodeId> {
        let id = self.insert(parent, spec.node)?;
        for child in spec.children {
            self.insert_tree(Some(id), child)?;
        }
        Ok(id)
    }

    /// Build a backend from a JSON tree fixture.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let spec: TreeSpec = serde_json::from_str(json).map_err(|e| {
            io::Error::new(ErrorKind::InvalidData, format!("invalid tree fixture: {}", e))
        })?;
        let mut backend = Self::new();
        backend.insert_tree(None, spec)?;
        Ok(backend)
    }

    /// Load a JSON tree fixture from disk.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn id_of(&self, node: &HierarchyNode) -> io::Result<NodeId> {
        self.index.get(&node.locator).copied().ok_or_else(|| {
            io::Error::new(
                ErrorKind::NotFound,
                format!("node '{}' is not part of this hierarchy", node.name),
            )
        })
    }

    fn is_non_empty(&self, id: NodeId, filter: &ExtensionFilter) -> bool {
        let slot = &self.slots[id.0];
        if slot.node.is_directory() {
            slot.children.iter().any(|&c| self.is_non_empty(c, filter))
        } else {
            filter.accepts(&slot.node.name)
        }
    }
}

impl HierarchyBackend for MemoryBackend {
    fn node(&self, locator: &NodeLocator) -> io::Result<Option<HierarchyNode>> {
        Ok(self
            .index
            .get(locator)
            .map(|id| self.slots[id.0].node.clone()))
    }

    fn non_empty_children(
        &self,
        node: &HierarchyNode,
        filter: &ExtensionFilter,
    ) -> io::Result<Vec<HierarchyNode>> {
        let id = self.id_of(node)?;
        Ok(self.slots[id.0]
            .children
            .iter()
            .filter(|&&c| self.is_non_empty(c, filter))
            .map(|c| self.slots[c.0].node.clone())
            .collect())
    }

    fn count_non_empty_children(
        &self,
        node: &HierarchyNode,
        filter: &ExtensionFilter,
        limit: usize,
    ) -> io::Result<usize> {
        let id = self.id_of(node)?;
        let mut count = 0;
        for &c in &self.slots[id.0].children {
            if count >= limit {
                break;
            }
            if self.is_non_empty(c, filter) {
                count += 1;
            }
        }
        Ok(count)
    }

    fn parent(&self, node: &HierarchyNode) -> io::Result<Option<HierarchyNode>> {
        let id = self.id_of(node)?;
        Ok(self.slots[id.0]
            .parent
            .map(|p| self.slots[p.0].node.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::{ContextLevel, FileMeta, NodeKind};

    fn module_with_area() -> (MemoryBackend, NodeId, NodeId) {
        let mut backend = MemoryBackend::new();
        let module = backend
            .insert(None, HierarchyNode::context(NodeKind::ModuleContainer, 4, "Slides"))
            .unwrap();
        let area_loc = NodeLocator::area_root(4, "mod_resource", "content", 0);
        let area = backend
            .insert(
                Some(module),
                HierarchyNode::directory(area_loc.clone(), ContextLevel::Module, "Content"),
            )
            .unwrap();
        for name in ["a.png", "b.txt"] {
            backend
                .insert(
                    Some(area),
                    HierarchyNode::file(
                        area_loc.at("/", name),
                        ContextLevel::Module,
                        name,
                        FileMeta::default(),
                    ),
                )
                .unwrap();
        }
        (backend, module, area)
    }

    #[test]
    fn test_node_lookup_by_locator() {
        let (backend, _, _) = module_with_area();
        let loc = NodeLocator::area_root(4, "mod_resource", "content", 0);
        let node = backend.node(&loc).unwrap().unwrap();
        assert_eq!(node.name, "Content");
        assert!(backend.node(&loc.at("/", "gone.png")).unwrap().is_none());
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let (backend, _, _) = module_with_area();
        let area = backend
            .node(&NodeLocator::area_root(4, "mod_resource", "content", 0))
            .unwrap()
            .unwrap();
        let names: Vec<_> = backend
            .non_empty_children(&area, &ExtensionFilter::All)
            .unwrap()
            .into_iter()
            .map(|n| n.name)
            .collect();
        assert_eq!(names, vec!["a.png", "b.txt"]);
    }

    #[test]
    fn test_filter_hides_non_matching_files() {
        let (backend, _, _) = module_with_area();
        let area = backend
            .node(&NodeLocator::area_root(4, "mod_resource", "content", 0))
            .unwrap()
            .unwrap();
        let filter = ExtensionFilter::from_accepted([".png"]);
        let children = backend.non_empty_children(&area, &filter).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "a.png");
    }

    #[test]
    fn test_empty_directory_is_hidden() {
        let (mut backend, module, _) = module_with_area();
        backend
            .insert(
                Some(module),
                HierarchyNode::directory(
                    NodeLocator::area_root(4, "mod_resource", "intro", 0),
                    ContextLevel::Module,
                    "Intro",
                ),
            )
            .unwrap();
        let module = backend.node(&NodeLocator::context_root(4)).unwrap().unwrap();
        let children = backend
            .non_empty_children(&module, &ExtensionFilter::All)
            .unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "Content");
    }

    #[test]
    fn test_count_stops_at_limit() {
        let (backend, _, _) = module_with_area();
        let area = backend
            .node(&NodeLocator::area_root(4, "mod_resource", "content", 0))
            .unwrap()
            .unwrap();
        assert_eq!(
            backend
                .count_non_empty_children(&area, &ExtensionFilter::All, 1)
                .unwrap(),
            1
        );
        assert_eq!(
            backend
                .count_non_empty_children(&area, &ExtensionFilter::All, 5)
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_parent_walk() {
        let (backend, _, _) = module_with_area();
        let file = backend
            .node(&NodeLocator::area_root(4, "mod_resource", "content", 0).at("/", "a.png"))
            .unwrap()
            .unwrap();
        let area = backend.parent(&file).unwrap().unwrap();
        let module = backend.parent(&area).unwrap().unwrap();
        assert_eq!(area.name, "Content");
        assert_eq!(module.name, "Slides");
        assert!(backend.parent(&module).unwrap().is_none());
    }

    #[test]
    fn test_rejects_duplicate_locator() {
        let (mut backend, module, _) = module_with_area();
        let err = backend
            .insert(
                Some(module),
                HierarchyNode::directory(
                    NodeLocator::area_root(4, "mod_resource", "content", 0),
                    ContextLevel::Module,
                    "Again",
                ),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_rejects_child_of_file() {
        let (mut backend, _, _) = module_with_area();
        let file_id = NodeId(2);
        let err = backend
            .insert(
                Some(file_id),
                HierarchyNode::context(NodeKind::Course, 99, "Nope"),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_unknown_node_is_an_error() {
        let (backend, _, _) = module_with_area();
        let stranger = HierarchyNode::context(NodeKind::Course, 77, "Elsewhere");
        let err = backend
            .non_empty_children(&stranger, &ExtensionFilter::All)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_from_json_fixture() {
        let json = r#"{
            "node": {"locator": {"context_id": 1}, "kind": "system_root",
                     "context_level": "system", "name": "System"},
            "children": [
                {"node": {"locator": {"context_id": 3}, "kind": "course",
                          "context_level": "course", "name": "Physics"}}
            ]
        }"#;
        let backend = MemoryBackend::from_json(json).unwrap();
        assert_eq!(backend.len(), 2);
        let course = backend.node(&NodeLocator::context_root(3)).unwrap().unwrap();
        assert_eq!(backend.parent(&course).unwrap().unwrap().name, "System");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = MemoryBackend::from_json("{not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(
            &path,
            r#"{"node": {"locator": {"context_id": 1}, "kind": "system_root",
                         "context_level": "system", "name": "System"}}"#,
        )
        .unwrap();
        let backend = MemoryBackend::load(&path).unwrap();
        assert!(!backend.is_empty());
    }
}
