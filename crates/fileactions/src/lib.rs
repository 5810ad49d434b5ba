//! File action resolution for a web file manager.
//!
//! This crate turns registered editors, app-provider apps and built-in
//! system actions into:
//! - Menus of every action applicable to a selection
//! - The default action for a plain click
//! - Navigation, window and notification requests when an action runs

pub mod action;
pub mod catalog;
pub mod context;
pub mod host;
pub mod launcher;
pub mod providers;
pub mod registry;
pub mod resolver;

// Re-export commonly used types
pub use action::{
    ActionHandler, ActionInfo, ActionSource, Applicability, ComponentType, EnabledFn, FileAction,
    HandlerFn,
};
pub use catalog::{
    AppProvider, AppProviderCapability, Capabilities, ExternalAppCatalog, FilesCapabilities,
    MimeTypeEntry,
};
pub use context::ActionContext;
pub use host::{Host, Navigator, Notification, NotificationStatus, Notifier, WindowHandle, WindowOpener};
pub use launcher::{EditorMode, LaunchTarget};
pub use providers::{
    ActionProvider, EditorActions, EditorMatcher, ExternalAppActions, StaticActions,
    SystemActionGroup, SystemActions,
};
pub use registry::{AppMeta, AppRegistry, EditorHandlerArgs, EditorHandlerFn, EditorRegistration};
pub use resolver::ActionResolver;

// Re-export fileactions_core types for convenience
pub use fileactions_core::{
    ActionError, ActionLabel, AppConfig, IdentityTranslator, RegistryError, Resource,
    RouteLocation, SelectionContext, ShareStatus, Space, Translator,
};
