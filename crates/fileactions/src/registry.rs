//! App Registry
//!
//! This module provides:
//! - `AppMeta` - Display metadata of a registered app
//! - `EditorRegistration` - An app's claim to open certain file types
//! - `AppRegistry` - Storage for both, refreshed by the host

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use fileactions_core::{AppConfig, RegistryError};

use crate::launcher::EditorMode;

/// Custom launcher of an editor.
pub type EditorHandlerFn = Arc<dyn Fn(EditorHandlerArgs) + Send + Sync>;

/// Display metadata of an app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMeta {
    /// Unique identifier, referenced by editor registrations.
    pub id: String,

    /// Display name, used in labels and CSS classes.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_fill_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

impl AppMeta {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            icon_fill_type: None,
            img: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A registered editor.
///
/// Matches resources by extension or MIME type. Editors without a custom
/// `handler` are opened by routing to `route_name` (or the app id).
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorRegistration {
    /// Id of the app providing the editor.
    pub app: String,

    /// Label msgid replacing the generic "Open in" label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Exact MIME type, top-level type, or `type/*`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default)]
    pub can_be_default: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,

    /// Extension-specific configuration handed to custom handlers.
    #[serde(default)]
    pub config: serde_json::Value,

    #[serde(skip)]
    pub handler: Option<EditorHandlerFn>,
}

impl EditorRegistration {
    pub fn for_extension(app: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            extension: Some(extension.into()),
            ..Default::default()
        }
    }

    pub fn for_mime_type(app: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            mime_type: Some(mime_type.into()),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_can_be_default(mut self, can_be_default: bool) -> Self {
        self.can_be_default = can_be_default;
        self
    }

    pub fn with_route_name(mut self, route_name: impl Into<String>) -> Self {
        self.route_name = Some(route_name.into());
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(EditorHandlerArgs) + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Route to open the editor on.
    pub fn route_name(&self) -> &str {
        self.route_name.as_deref().unwrap_or(&self.app)
    }
}

impl std::fmt::Debug for EditorRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorRegistration")
            .field("app", &self.app)
            .field("label", &self.label)
            .field("extension", &self.extension)
            .field("mime_type", &self.mime_type)
            .field("can_be_default", &self.can_be_default)
            .field("route_name", &self.route_name)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Arguments passed to a custom editor handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorHandlerArgs {
    pub config: AppConfig,
    pub extension_config: serde_json::Value,
    pub drive_alias_and_item: String,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    pub mode: EditorMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
}

/// Registry of apps and their editors.
///
/// Editors keep registration order; the editor action list is built from it.
pub struct AppRegistry {
    apps: RwLock<HashMap<String, AppMeta>>,
    editors: RwLock<Vec<Arc<EditorRegistration>>>,
}

impl AppRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            apps: RwLock::new(HashMap::new()),
            editors: RwLock::new(Vec::new()),
        }
    }

    /// Register or replace an app's metadata.
    pub fn register_app(&self, meta: AppMeta) {
        let id = meta.id.clone();
        self.apps.write().insert(id.clone(), meta);
        tracing::info!("Registered app: {}", id);
    }

    /// Register an editor for a known app.
    ///
    /// Returns an error if the app has no metadata.
    pub fn register_editor(&self, editor: EditorRegistration) -> Result<(), RegistryError> {
        if !self.apps.read().contains_key(&editor.app) {
            return Err(RegistryError::UnknownApp(editor.app));
        }
        tracing::debug!(
            "Registered editor for app '{}' (extension: {:?}, mime type: {:?})",
            editor.app,
            editor.extension,
            editor.mime_type
        );
        self.editors.write().push(Arc::new(editor));
        Ok(())
    }

    /// Remove an app and every editor it registered.
    ///
    /// Returns true if the app was registered.
    pub fn unregister_app(&self, id: &str) -> bool {
        let removed = self.apps.write().remove(id).is_some();
        self.editors.write().retain(|e| e.app != id);
        if removed {
            tracing::info!("Unregistered app: {}", id);
        }
        removed
    }

    /// Get an app's metadata.
    pub fn app(&self, id: &str) -> Option<AppMeta> {
        self.apps.read().get(id).cloned()
    }

    /// Registered editors paired with their app metadata, in registration order.
    pub fn editors(&self) -> Vec<(Arc<EditorRegistration>, AppMeta)> {
        let apps = self.apps.read();
        self.editors
            .read()
            .iter()
            .filter_map(|editor| {
                apps.get(&editor.app)
                    .map(|meta| (Arc::clone(editor), meta.clone()))
            })
            .collect()
    }

    pub fn app_count(&self) -> usize {
        self.apps.read().len()
    }

    pub fn editor_count(&self) -> usize {
        self.editors.read().len()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}
