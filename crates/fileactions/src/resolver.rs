//! Action resolution.
//!
//! The resolver composes three providers in a fixed tier order:
//!
//! 1. Editors registered by apps
//! 2. External apps advertised by the app provider
//! 3. System actions
//!
//! Menus get every enabled action of every tier. A plain click gets the
//! first enabled action that can be default, searching tier by tier.

use std::sync::Arc;

use fileactions_core::{ActionError, Resource};

use crate::action::FileAction;
use crate::catalog::ExternalAppCatalog;
use crate::context::ActionContext;
use crate::host::Host;
use crate::providers::{ActionProvider, EditorActions, ExternalAppActions, SystemActions};
use crate::registry::AppRegistry;

/// Composes action providers into menus and default actions.
pub struct ActionResolver {
    editors: Box<dyn ActionProvider>,
    external_apps: Box<dyn ActionProvider>,
    system: Box<dyn ActionProvider>,
}

impl ActionResolver {
    /// Create a resolver over the registry, the external app catalog and
    /// the host's system actions.
    pub fn new(
        registry: Arc<AppRegistry>,
        catalog: Arc<ExternalAppCatalog>,
        system: SystemActions,
    ) -> Self {
        Self::from_providers(
            EditorActions::new(registry),
            ExternalAppActions::new(catalog),
            system,
        )
    }

    /// Create a resolver from arbitrary providers.
    pub fn from_providers(
        editors: impl ActionProvider + 'static,
        external_apps: impl ActionProvider + 'static,
        system: impl ActionProvider + 'static,
    ) -> Self {
        Self {
            editors: Box::new(editors),
            external_apps: Box::new(external_apps),
            system: Box::new(system),
        }
    }

    pub fn editor_actions(&self, ctx: &ActionContext<'_>) -> Vec<FileAction> {
        self.editors.list_actions(ctx)
    }

    pub fn external_app_actions(&self, ctx: &ActionContext<'_>) -> Vec<FileAction> {
        self.external_apps.list_actions(ctx)
    }

    pub fn system_actions(&self, ctx: &ActionContext<'_>) -> Vec<FileAction> {
        self.system.list_actions(ctx)
    }

    /// Find the action for a plain activation of the selection.
    ///
    /// `current_folder` is passed to applicability checks as the parent.
    /// Later tiers are only built when earlier ones have no candidate.
    pub fn get_default_action(
        &self,
        ctx: &ActionContext<'_>,
        current_folder: Option<&Resource>,
    ) -> Option<FileAction> {
        let ctx = ctx.with_parent(current_folder);
        let tiers: [(&str, &dyn ActionProvider); 3] = [
            ("editor", &*self.editors),
            ("external app", &*self.external_apps),
            ("system", &*self.system),
        ];

        for (tier, provider) in tiers {
            let found = provider
                .list_actions(&ctx)
                .into_iter()
                .find(|action| action.can_be_default && action.is_enabled(&ctx));
            if let Some(action) = found {
                tracing::debug!("Default action '{}' from {} tier", action.id, tier);
                return Some(action);
            }
        }

        tracing::debug!(
            "No default action for {} selected resource(s)",
            ctx.selection.len()
        );
        None
    }

    /// Every enabled action, editors first, then external apps, then system.
    ///
    /// Duplicates across tiers are kept.
    pub fn get_all_available_actions(&self, ctx: &ActionContext<'_>) -> Vec<FileAction> {
        let mut actions = self.editor_actions(ctx);
        actions.extend(self.external_app_actions(ctx));
        actions.extend(self.system_actions(ctx));
        actions.retain(|action| action.is_enabled(ctx));
        actions
    }

    /// Resolve and run the default action.
    ///
    /// Returns the action that ran.
    pub fn trigger_default_action(
        &self,
        ctx: &ActionContext<'_>,
        current_folder: Option<&Resource>,
        host: &Host<'_>,
    ) -> Result<FileAction, ActionError> {
        let Some(action) = self.get_default_action(ctx, current_folder) else {
            tracing::warn!("Nothing to trigger: no default action available");
            return Err(ActionError::NoDefaultAction {
                count: ctx.selection.len(),
            });
        };
        action.run(ctx, host)?;
        Ok(action)
    }
}

impl std::fmt::Debug for ActionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionResolver").finish_non_exhaustive()
    }
}
