//! Viewer permission checks.
//!
//! The engine asks exactly one question of the permission service: may the
//! viewer manage courses site-wide? The answer decides whether course
//! categories stay visible (see the pruning rules in `engine::prune`).

use std::collections::HashSet;
use std::io;

/// Capability that lets a viewer see the course category tree.
pub const MANAGE_COURSES: &str = "moodle/course:update";

/// Permission service seam.
pub trait PermissionChecker {
    /// Whether the viewer holds `capability` in the given context.
    fn has_capability(&self, capability: &str, context_id: u64) -> io::Result<bool>;
}

/// Fixed set of `(capability, context)` grants.
#[derive(Debug, Clone, Default)]
pub struct CapabilitySet {
    grants: HashSet<(String, u64)>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style grant.
    pub fn with(mut self, capability: &str, context_id: u64) -> Self {
        self.grant(capability, context_id);
        self
    }

    pub fn grant(&mut self, capability: &str, context_id: u64) {
        self.grants.insert((capability.to_string(), context_id));
    }
}

impl PermissionChecker for CapabilitySet {
    fn has_capability(&self, capability: &str, context_id: u64) -> io::Result<bool> {
        Ok(self
            .grants
            .contains(&(capability.to_string(), context_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::SYSTEM_CONTEXT_ID;

    #[test]
    fn test_empty_set_denies() {
        let caps = CapabilitySet::new();
        assert!(!caps.has_capability(MANAGE_COURSES, SYSTEM_CONTEXT_ID).unwrap());
    }

    #[test]
    fn test_grant_is_context_scoped() {
        let caps = CapabilitySet::new().with(MANAGE_COURSES, SYSTEM_CONTEXT_ID);
        assert!(caps.has_capability(MANAGE_COURSES, SYSTEM_CONTEXT_ID).unwrap());
        assert!(!caps.has_capability(MANAGE_COURSES, 3).unwrap());
        assert!(!caps.has_capability("moodle/site:config", SYSTEM_CONTEXT_ID).unwrap());
    }
}
