//! Action evaluation context.
//!
//! Everything an action's applicability check or handler may read, passed
//! explicitly instead of being looked up from global state.

use fileactions_core::{AppConfig, Resource, RouteLocation, SelectionContext};

use crate::catalog::Capabilities;

/// Inputs for building, filtering and running actions.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    /// Selected resources and their space.
    pub selection: &'a SelectionContext,

    /// Route the user is currently on.
    pub location: &'a RouteLocation,

    /// Server capabilities.
    pub capabilities: &'a Capabilities,

    /// Host configuration.
    pub config: &'a AppConfig,

    /// Folder currently open, set when resolving the default action.
    pub parent: Option<&'a Resource>,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        selection: &'a SelectionContext,
        location: &'a RouteLocation,
        capabilities: &'a Capabilities,
        config: &'a AppConfig,
    ) -> Self {
        Self {
            selection,
            location,
            capabilities,
            config,
            parent: None,
        }
    }

    /// Same context with `parent` set to the currently open folder.
    pub fn with_parent(self, parent: Option<&'a Resource>) -> Self {
        Self { parent, ..self }
    }
}
