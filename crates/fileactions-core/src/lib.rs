//! Core types for file actions.
//!
//! This crate contains the plain data model shared by the resolver and its hosts:
//! - Resource and Space types
//! - Selection context
//! - Route locations
//! - Action labels and translation
//! - Configuration types
//! - Error types

mod config;
mod error;
mod label;
mod location;
mod resource;
mod selection;

pub use config::{config_dir, config_path, AppConfig, OptionsConfig, RoutingConfig};
pub use error::{ActionError, ConfigError, RegistryError};
pub use label::{interpolate, ActionLabel, IdentityTranslator, Translator};
pub use location::{
    RouteLocation, EXTERNAL_APPS_ROUTE, SEARCH_ROUTE, SHARES_WITH_ME_ROUTE, TRASH_ROUTE,
};
pub use resource::{Resource, ShareStatus, Space};
pub use selection::SelectionContext;
