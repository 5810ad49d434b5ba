//! Route locations.
//!
//! A `RouteLocation` is both the description of where the user currently is
//! and the navigation target handed to the host router.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Route name of the generic trash bin view.
pub const TRASH_ROUTE: &str = "files-trash-generic";

/// Route name of the "shared with me" view.
pub const SHARES_WITH_ME_ROUTE: &str = "files-shares-with-me";

/// Route name of the search results view.
pub const SEARCH_ROUTE: &str = "files-common-search";

/// Route name of the external apps view.
pub const EXTERNAL_APPS_ROUTE: &str = "external-apps";

/// A named route with string params and query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLocation {
    pub name: String,

    #[serde(default)]
    pub params: BTreeMap<String, String>,

    #[serde(default)]
    pub query: BTreeMap<String, String>,
}

impl RouteLocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
            query: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn is_trash_active(&self) -> bool {
        self.name == TRASH_ROUTE
    }

    pub fn is_shares_with_me_active(&self) -> bool {
        self.name == SHARES_WITH_ME_ROUTE
    }

    pub fn is_search_active(&self) -> bool {
        self.name == SEARCH_ROUTE
    }

    /// Query params that let an opened app navigate back to this location.
    ///
    /// Params and query are carried as JSON objects and omitted when empty.
    pub fn to_context_query(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert("contextRouteName".to_string(), self.name.clone());
        if !self.params.is_empty() {
            context.insert(
                "contextRouteParams".to_string(),
                serde_json::to_string(&self.params).unwrap_or_default(),
            );
        }
        if !self.query.is_empty() {
            context.insert(
                "contextRouteQuery".to_string(),
                serde_json::to_string(&self.query).unwrap_or_default(),
            );
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_predicates() {
        assert!(RouteLocation::new(TRASH_ROUTE).is_trash_active());
        assert!(RouteLocation::new(SHARES_WITH_ME_ROUTE).is_shares_with_me_active());
        assert!(RouteLocation::new(SEARCH_ROUTE).is_search_active());
        assert!(!RouteLocation::new("files-spaces-generic").is_trash_active());
    }

    #[test]
    fn test_context_query_minimal() {
        let query = RouteLocation::new("files-spaces-generic").to_context_query();
        assert_eq!(query.len(), 1);
        assert_eq!(query["contextRouteName"], "files-spaces-generic");
    }

    #[test]
    fn test_context_query_with_params() {
        let location = RouteLocation::new("files-spaces-generic")
            .with_param("driveAliasAndItem", "personal/admin/docs")
            .with_query("sort", "name");
        let query = location.to_context_query();
        assert_eq!(
            query["contextRouteParams"],
            r#"{"driveAliasAndItem":"personal/admin/docs"}"#
        );
        assert_eq!(query["contextRouteQuery"], r#"{"sort":"name"}"#);
    }
}
