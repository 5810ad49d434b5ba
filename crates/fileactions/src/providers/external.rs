//! External app actions from the app-provider catalog.

use std::sync::Arc;

use fileactions_core::ActionLabel;

use crate::action::{ActionHandler, ActionSource, Applicability, ComponentType, FileAction};
use crate::catalog::{AppProvider, ExternalAppCatalog, MimeTypeEntry};
use crate::context::ActionContext;

use super::ActionProvider;

const OPEN_IN_APP_NAME: &str = "Open in %{ appName }";

/// Provides one action per app advertised for the selected file's MIME type.
pub struct ExternalAppActions {
    catalog: Arc<ExternalAppCatalog>,
}

impl ExternalAppActions {
    pub fn new(catalog: Arc<ExternalAppCatalog>) -> Self {
        Self { catalog }
    }

    fn build_action(app: &AppProvider, entry: &MimeTypeEntry) -> FileAction {
        FileAction {
            id: format!("external-app:{}", app.name),
            label: ActionLabel::translatable(OPEN_IN_APP_NAME)
                .with_param("appName", app.name.clone()),
            icon: app.icon.clone(),
            icon_fill_type: None,
            img: app.img.clone(),
            component_type: ComponentType::Button,
            applicability: Applicability::Always,
            can_be_default: entry.is_default(&app.name),
            handler: ActionHandler::OpenExternalApp {
                app: app.name.clone(),
            },
            class: format!("oc-files-actions-{}-trigger", app.name),
            source: ActionSource::ExternalApp,
        }
    }
}

impl ActionProvider for ExternalAppActions {
    fn list_actions(&self, ctx: &ActionContext<'_>) -> Vec<FileAction> {
        if ctx.location.is_trash_active() {
            return Vec::new();
        }

        // batch opening is not supported
        let Some(resource) = ctx.selection.single() else {
            return Vec::new();
        };

        let Some(mime_type) = resource.mime_type() else {
            return Vec::new();
        };

        if !ctx.capabilities.has_app_providers() || self.catalog.is_empty() {
            return Vec::new();
        }

        let Some(entry) = self.catalog.find(mime_type) else {
            tracing::debug!("No external apps registered for {}", mime_type);
            return Vec::new();
        };

        entry
            .app_providers
            .iter()
            .map(|app| Self::build_action(app, &entry))
            .collect()
    }
}
