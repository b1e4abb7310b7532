//! Structural pruning: which directories the picker never shows as such.
//!
//! A skippable directory is replaced by its own visible children when
//! listing, and left out of the breadcrumb. Rules, first match wins:
//!
//! 1. files are never skipped
//! 2. course categories are skipped for viewers who cannot manage courses,
//!    unless the site shows categories to everyone
//! 3. system root, courses, user areas, legacy course files and modules
//!    always stay
//! 4. the top of a storage area inside a module is skipped when it is the
//!    module's only non-empty area

use std::io;

use super::RequestContext;
use crate::hierarchy::{
    ContextLevel, ExtensionFilter, HierarchyBackend, HierarchyNode, NodeKind, SYSTEM_CONTEXT_ID,
};
use crate::permissions::MANAGE_COURSES;

/// Counting a module's non-empty areas stops here; only "one or more than
/// one" matters.
pub const MODULE_AREA_COUNT_LIMIT: usize = 2;

/// What the caller knows about a node's parent.
#[derive(Debug, Clone, Copy)]
pub enum ParentHint<'n> {
    /// Ask the backend, and only if a rule needs it.
    Unresolved,
    /// Already known. `None` above the top of the hierarchy.
    Known(Option<&'n HierarchyNode>),
}

/// Pruning rules bound to one request.
pub struct Pruner<'a> {
    backend: &'a dyn HierarchyBackend,
    request: RequestContext<'a>,
    filter: &'a ExtensionFilter,
}

impl<'a> Pruner<'a> {
    pub fn new(
        backend: &'a dyn HierarchyBackend,
        request: RequestContext<'a>,
        filter: &'a ExtensionFilter,
    ) -> Self {
        Self {
            backend,
            request,
            filter,
        }
    }

    /// Whether `node` should be replaced by its children.
    pub fn is_skippable(&self, node: &HierarchyNode, parent: ParentHint<'_>) -> io::Result<bool> {
        if !node.is_directory() {
            return Ok(false);
        }
        let skip = match node.kind {
            NodeKind::CourseCategory => self.hides_categories()?,
            NodeKind::SystemRoot
            | NodeKind::Course
            | NodeKind::UserArea
            | NodeKind::LegacyCourseArea
            | NodeKind::ModuleContainer => false,
            NodeKind::StorageArea => self.is_sole_module_area(node, parent)?,
        };
        log::trace!("skip '{}' ({:?}): {}", node.name, node.kind, skip);
        Ok(skip)
    }

    fn hides_categories(&self) -> io::Result<bool> {
        if self.request.settings.show_my_course_categories {
            return Ok(false);
        }
        let can_manage = self
            .request
            .permissions
            .has_capability(MANAGE_COURSES, SYSTEM_CONTEXT_ID)?;
        Ok(!can_manage)
    }

    fn is_sole_module_area(&self, node: &HierarchyNode, parent: ParentHint<'_>) -> io::Result<bool> {
        let loc = &node.locator;
        if !loc.has_area() || !loc.is_area_top() || node.context_level != ContextLevel::Module {
            return Ok(false);
        }
        let looked_up;
        let parent = match parent {
            ParentHint::Known(p) => p,
            ParentHint::Unresolved => {
                looked_up = self.backend.parent(node)?;
                looked_up.as_ref()
            }
        };
        match parent {
            Some(module) if module.kind == NodeKind::ModuleContainer => {
                let count = self.backend.count_non_empty_children(
                    module,
                    self.filter,
                    MODULE_AREA_COUNT_LIMIT,
                )?;
                Ok(count <= 1)
            }
            _ => Ok(false),
        }
    }

    /// Non-empty children of `node` with every skippable directory spliced
    /// out, recursively. Backend order is preserved.
    pub fn visible_children(&self, node: &HierarchyNode) -> io::Result<Vec<HierarchyNode>> {
        let mut visible = Vec::new();
        for child in self.backend.non_empty_children(node, self.filter)? {
            if self.is_skippable(&child, ParentHint::Known(Some(node)))? {
                visible.extend(self.visible_children(&child)?);
            } else {
                visible.push(child);
            }
        }
        Ok(visible)
    }

    /// Chain from the top of the hierarchy down to `current`, without the
    /// skippable ancestors. `current` itself always stays.
    pub fn breadcrumb(&self, current: &HierarchyNode) -> io::Result<Vec<HierarchyNode>> {
        let mut chain = Vec::new();
        let mut level = Some(current.clone());
        while let Some(node) = level {
            level = self.backend.parent(&node)?;
            chain.push(node);
        }
        chain.reverse();

        let last = chain.len().saturating_sub(1);
        let mut crumbs = Vec::with_capacity(chain.len());
        for (i, node) in chain.iter().enumerate() {
            let parent = if i == 0 { None } else { Some(&chain[i - 1]) };
            if i == last || !self.is_skippable(node, ParentHint::Known(parent))? {
                crumbs.push(node.clone());
            }
        }
        Ok(crumbs)
    }
}
