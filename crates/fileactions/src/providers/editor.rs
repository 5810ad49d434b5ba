//! Editor actions built from the app registry.

use heck::ToKebabCase;
use std::sync::Arc;

use fileactions_core::ActionLabel;

use crate::action::{ActionHandler, ActionSource, Applicability, ComponentType, FileAction};
use crate::context::ActionContext;
use crate::registry::{AppMeta, AppRegistry, EditorRegistration};

use super::ActionProvider;

const OPEN_IN_APP: &str = "Open in %{app}";

/// File types an editor accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorMatcher {
    pub extension: Option<String>,
    pub mime_type: Option<String>,
}

impl EditorMatcher {
    pub fn from_registration(editor: &EditorRegistration) -> Self {
        Self {
            extension: editor.extension.clone().filter(|e| !e.is_empty()),
            mime_type: editor.mime_type.clone().filter(|m| !m.is_empty()),
        }
    }

    /// Whether the editor can open the selection in the current location.
    ///
    /// Needs exactly one selected resource. Trash and declined shares are
    /// excluded unless the user is looking at search results. An extension
    /// on both sides decides alone; otherwise MIME types are compared.
    pub fn applies(&self, ctx: &ActionContext<'_>) -> bool {
        let Some(resource) = ctx.selection.single() else {
            return false;
        };

        let location = ctx.location;
        if !location.is_search_active()
            && (location.is_trash_active()
                || (location.is_shares_with_me_active() && resource.is_declined_share()))
        {
            return false;
        }

        if let (Some(actual), Some(expected)) = (resource.extension(), self.extension.as_deref()) {
            return actual.eq_ignore_ascii_case(expected);
        }

        if let (Some(actual), Some(expected)) = (resource.mime_type(), self.mime_type.as_deref()) {
            return mime_type_matches(actual, expected);
        }

        false
    }
}

/// Exact match, or the resource's top-level type equals `expected`
/// (given as `type` or `type/*`). Case-insensitive.
fn mime_type_matches(actual: &str, expected: &str) -> bool {
    if actual.eq_ignore_ascii_case(expected) {
        return true;
    }
    let top_level = actual.split('/').next().unwrap_or(actual);
    let expected = expected.strip_suffix("/*").unwrap_or(expected);
    top_level.eq_ignore_ascii_case(expected)
}

/// Provides one action per registered editor.
pub struct EditorActions {
    registry: Arc<AppRegistry>,
}

impl EditorActions {
    pub fn new(registry: Arc<AppRegistry>) -> Self {
        Self { registry }
    }

    fn build_action(editor: Arc<EditorRegistration>, meta: &AppMeta) -> FileAction {
        let label = match &editor.label {
            Some(label) => ActionLabel::translatable(label.clone()),
            None => ActionLabel::translatable(OPEN_IN_APP).with_param("app", meta.name.clone()),
        };

        FileAction {
            id: format!("editor:{}", editor.app),
            label,
            icon: meta.icon.clone(),
            icon_fill_type: meta.icon_fill_type.clone(),
            img: meta.img.clone(),
            component_type: ComponentType::Button,
            applicability: Applicability::Editor(EditorMatcher::from_registration(&editor)),
            can_be_default: editor.can_be_default,
            class: format!(
                "oc-files-actions-{}-trigger",
                meta.name.to_kebab_case().to_lowercase()
            ),
            source: ActionSource::Editor,
            handler: ActionHandler::OpenEditor(editor),
        }
    }
}

impl ActionProvider for EditorActions {
    /// Editors that can be default come first; order is otherwise kept.
    fn list_actions(&self, _ctx: &ActionContext<'_>) -> Vec<FileAction> {
        let mut actions: Vec<FileAction> = self
            .registry
            .editors()
            .into_iter()
            .map(|(editor, meta)| Self::build_action(editor, &meta))
            .collect();
        actions.sort_by_key(|action| !action.can_be_default);
        actions
    }
}
