//! Token resolution: from whatever the picker sent to a real node.
//!
//! Resolution never fails on bad input. An undecodable token counts as no
//! token; a locator the backend cannot find falls back to the root of its
//! context, then to the system root.

use log::{debug, warn};

use super::RequestContext;
use crate::error::ListingError;
use crate::hierarchy::{HierarchyBackend, HierarchyNode, NodeLocator, SYSTEM_CONTEXT_ID};
use crate::token;

/// Locator the request starts from.
pub fn starting_locator(token: &str, request: &RequestContext<'_>) -> NodeLocator {
    if !token.trim().is_empty() {
        match token::decode(token) {
            Ok(locator) => return locator,
            Err(e) => debug!("ignoring undecodable token: {}", e),
        }
    }
    let context_id = request
        .settings
        .default_context
        .unwrap_or(SYSTEM_CONTEXT_ID);
    NodeLocator::context_root(context_id)
}

/// Resolve a token to the node whose children should be listed.
pub fn resolve(
    backend: &dyn HierarchyBackend,
    token: &str,
    request: &RequestContext<'_>,
) -> Result<HierarchyNode, ListingError> {
    let locator = starting_locator(token, request);
    if let Some(node) = backend.node(&locator)? {
        return Ok(node);
    }

    let context_root = NodeLocator::context_root(locator.context_id);
    if context_root != locator {
        debug!(
            "no node at {:?}, falling back to context {}",
            locator, locator.context_id
        );
        if let Some(node) = backend.node(&context_root)? {
            return Ok(node);
        }
    }

    warn!(
        "context {} cannot be browsed, falling back to the system root",
        locator.context_id
    );
    backend
        .node(&NodeLocator::system_root())?
        .ok_or(ListingError::MissingSystemRoot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::MemoryBackend;
    use crate::permissions::CapabilitySet;
    use crate::settings::NavigationSettings;
    use crate::test_support::campus;

    fn resolve_with(token: &str, settings: &NavigationSettings) -> HierarchyNode {
        let backend = campus();
        let caps = CapabilitySet::new();
        resolve(&backend, token, &RequestContext::new(&caps, settings)).unwrap()
    }

    #[test]
    fn test_empty_token_is_system_root() {
        let node = resolve_with("", &NavigationSettings::default());
        assert_eq!(node.locator, NodeLocator::system_root());
    }

    #[test]
    fn test_empty_token_uses_default_context() {
        let settings = NavigationSettings {
            default_context: Some(3),
            ..NavigationSettings::default()
        };
        let node = resolve_with("", &settings);
        assert_eq!(node.name, "Physics 101");
    }

    #[test]
    fn test_exact_match() {
        let loc = NodeLocator::area_root(6, "user", "private", 0).at("/pics/", ".");
        let node = resolve_with(&token::encode(&loc), &NavigationSettings::default());
        assert_eq!(node.locator, loc);
    }

    #[test]
    fn test_stale_token_falls_back_to_context_root() {
        let loc = NodeLocator::area_root(4, "mod_resource", "content", 0).at("/gone/", ".");
        let node = resolve_with(&token::encode(&loc), &NavigationSettings::default());
        assert_eq!(node.name, "Lecture slides");
    }

    #[test]
    fn test_unknown_context_falls_back_to_system_root() {
        let loc = NodeLocator::context_root(999);
        let node = resolve_with(&token::encode(&loc), &NavigationSettings::default());
        assert_eq!(node.locator, NodeLocator::system_root());
    }

    #[test]
    fn test_garbage_token_is_treated_as_unset() {
        let settings = NavigationSettings {
            default_context: Some(6),
            ..NavigationSettings::default()
        };
        let node = resolve_with("%%%garbage%%%", &settings);
        assert_eq!(node.name, "Private files");
    }

    #[test]
    fn test_missing_system_root_is_fatal() {
        let backend = MemoryBackend::new();
        let caps = CapabilitySet::new();
        let settings = NavigationSettings::default();
        let err = resolve(&backend, "", &RequestContext::new(&caps, &settings)).unwrap_err();
        assert!(matches!(err, ListingError::MissingSystemRoot));
    }
}
