//! Scenario files.
//!
//! A scenario is a JSON snapshot of everything the resolver reads: app
//! registrations, the app-provider catalog, capabilities, the current route
//! and the selection. System actions are described declaratively and log
//! their invocation when run.

use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

use fileactions::{
    ActionContext, ActionLabel, ActionResolver, AppConfig, AppMeta, AppRegistry, Capabilities,
    EditorRegistration, ExternalAppCatalog, FileAction, MimeTypeEntry, Resource, RouteLocation,
    SelectionContext, StaticActions, SystemActionGroup, SystemActions,
};

use crate::error::CliError;

/// Which selections a declared system action applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppliesTo {
    /// Any non-empty selection.
    #[default]
    Any,
    /// A single file.
    File,
    /// A single folder.
    Folder,
}

/// A system action declared in a scenario.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemActionSpec {
    pub group: SystemActionGroup,
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub can_be_default: bool,
    #[serde(default)]
    pub applies_to: AppliesTo,
}

impl SystemActionSpec {
    fn into_action(self) -> FileAction {
        let applies_to = self.applies_to;
        let id = self.id.clone();
        let label = ActionLabel::translatable(self.label);
        let mut action = FileAction::system(self.id, label, move |ctx, _host| {
            tracing::info!(
                "System action '{}' on {} resource(s)",
                id,
                ctx.selection.len()
            );
        })
        .with_can_be_default(self.can_be_default)
        .enabled_when(move |ctx| match applies_to {
            AppliesTo::Any => !ctx.selection.is_empty(),
            AppliesTo::File => ctx.selection.single().is_some_and(|r| !r.is_folder),
            AppliesTo::Folder => ctx.selection.single().is_some_and(|r| r.is_folder),
        });
        if let Some(icon) = self.icon {
            action = action.with_icon(icon);
        }
        action
    }
}

/// Everything needed to resolve actions for one selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default)]
    pub apps: Vec<AppMeta>,
    #[serde(default)]
    pub editors: Vec<EditorRegistration>,
    #[serde(default)]
    pub mime_types: Vec<MimeTypeEntry>,
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(default)]
    pub system_actions: Vec<SystemActionSpec>,
    pub location: RouteLocation,
    pub selection: SelectionContext,
    #[serde(default)]
    pub current_folder: Option<Resource>,
}

impl Scenario {
    /// Parse a scenario from JSON.
    pub fn from_json(source: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a scenario file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let source = std::fs::read_to_string(path).map_err(|e| CliError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        let scenario = Self::from_json(&source)?;
        tracing::debug!(
            "Loaded scenario from {:?}: {} apps, {} editors, {} MIME types",
            path,
            scenario.apps.len(),
            scenario.editors.len(),
            scenario.mime_types.len()
        );
        Ok(scenario)
    }

    /// Build a resolver from the scenario's registrations.
    pub fn build_resolver(&self) -> Result<ActionResolver, CliError> {
        let registry = Arc::new(AppRegistry::new());
        for app in &self.apps {
            registry.register_app(app.clone());
        }
        for editor in &self.editors {
            registry.register_editor(editor.clone())?;
        }

        let catalog = Arc::new(ExternalAppCatalog::new());
        catalog.set_entries(self.mime_types.clone());

        let mut system = SystemActions::new();
        for spec in &self.system_actions {
            system.add(spec.group, StaticActions(vec![spec.clone().into_action()]));
        }

        Ok(ActionResolver::new(registry, catalog, system))
    }

    /// Context for resolving against this scenario.
    pub fn context<'a>(&'a self, config: &'a AppConfig) -> ActionContext<'a> {
        ActionContext::new(&self.selection, &self.location, &self.capabilities, config)
    }
}
