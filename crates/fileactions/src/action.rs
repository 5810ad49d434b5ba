//! File action descriptors.
//!
//! A `FileAction` is rebuilt on every resolution call from the current
//! registry and capability state. Applicability and handling are data where
//! the resolver knows the behavior (editors, external apps) and closures
//! where the host supplies it (system actions).

use serde::Serialize;
use std::sync::Arc;

use fileactions_core::{ActionError, ActionLabel, Translator};

use crate::context::ActionContext;
use crate::host::Host;
use crate::launcher::{self, EditorMode, LaunchTarget};
use crate::providers::editor::EditorMatcher;
use crate::registry::EditorRegistration;

/// Host-supplied applicability check.
pub type EnabledFn = Arc<dyn Fn(&ActionContext<'_>) -> bool + Send + Sync>;

/// Host-supplied action handler.
pub type HandlerFn = Arc<dyn Fn(&ActionContext<'_>, &Host<'_>) + Send + Sync>;

/// Which tier produced an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionSource {
    Editor,
    ExternalApp,
    System,
}

impl ActionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::ExternalApp => "external_app",
            Self::System => "system",
        }
    }
}

/// How a menu renders the action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    #[default]
    Button,
    RouterLink,
}

/// Decides whether an action applies to a context.
#[derive(Clone)]
pub enum Applicability {
    /// Applies everywhere.
    Always,
    /// Applies when the selection matches an editor's file types.
    Editor(EditorMatcher),
    /// Host-supplied predicate.
    When(EnabledFn),
}

impl Applicability {
    pub fn applies(&self, ctx: &ActionContext<'_>) -> bool {
        match self {
            Self::Always => true,
            Self::Editor(matcher) => matcher.applies(ctx),
            Self::When(predicate) => predicate(ctx),
        }
    }
}

impl std::fmt::Debug for Applicability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Always => f.write_str("Always"),
            Self::Editor(matcher) => f.debug_tuple("Editor").field(matcher).finish(),
            Self::When(_) => f.write_str("When(<fn>)"),
        }
    }
}

/// What running an action does.
#[derive(Clone)]
pub enum ActionHandler {
    /// Open the first selected resource in a registered editor.
    OpenEditor(Arc<EditorRegistration>),
    /// Open the first selected resource in an app-provider app.
    OpenExternalApp { app: String },
    /// Host-supplied handler.
    Custom(HandlerFn),
}

impl std::fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenEditor(editor) => f.debug_tuple("OpenEditor").field(&editor.app).finish(),
            Self::OpenExternalApp { app } => {
                f.debug_struct("OpenExternalApp").field("app", app).finish()
            }
            Self::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

/// An action offered for the current selection.
#[derive(Debug, Clone)]
pub struct FileAction {
    /// Identifier, unique within one resolution call.
    pub id: String,

    /// Display text.
    pub label: ActionLabel,

    /// Icon identifier.
    pub icon: Option<String>,

    /// Icon fill style, forwarded from app metadata.
    pub icon_fill_type: Option<String>,

    /// Image URL shown instead of the icon.
    pub img: Option<String>,

    pub component_type: ComponentType,

    pub applicability: Applicability,

    /// May be picked as the default action.
    pub can_be_default: bool,

    pub handler: ActionHandler,

    /// CSS class of the menu trigger.
    pub class: String,

    pub source: ActionSource,
}

impl FileAction {
    /// Create an action that always applies and cannot be the default.
    pub fn new(
        id: impl Into<String>,
        label: ActionLabel,
        source: ActionSource,
        handler: ActionHandler,
    ) -> Self {
        let id = id.into();
        Self {
            class: format!("oc-files-actions-{}-trigger", id),
            id,
            label,
            icon: None,
            icon_fill_type: None,
            img: None,
            component_type: ComponentType::Button,
            applicability: Applicability::Always,
            can_be_default: false,
            handler,
            source,
        }
    }

    /// Create a system action with a host-supplied handler.
    pub fn system<F>(id: impl Into<String>, label: ActionLabel, handler: F) -> Self
    where
        F: Fn(&ActionContext<'_>, &Host<'_>) + Send + Sync + 'static,
    {
        Self::new(id, label, ActionSource::System, ActionHandler::Custom(Arc::new(handler)))
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_component_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = component_type;
        self
    }

    pub fn with_can_be_default(mut self, can_be_default: bool) -> Self {
        self.can_be_default = can_be_default;
        self
    }

    /// Restrict the action with a host-supplied predicate.
    pub fn enabled_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&ActionContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.applicability = Applicability::When(Arc::new(predicate));
        self
    }

    pub fn is_enabled(&self, ctx: &ActionContext<'_>) -> bool {
        self.applicability.applies(ctx)
    }

    /// Resolve the label for display.
    pub fn label(&self, translator: &dyn Translator) -> String {
        self.label.resolve(translator)
    }

    /// Run the action against the context.
    pub fn run(&self, ctx: &ActionContext<'_>, host: &Host<'_>) -> Result<(), ActionError> {
        match &self.handler {
            ActionHandler::OpenEditor(editor) => {
                let target = self.launch_target(ctx)?;
                launcher::open_editor(
                    editor,
                    &target,
                    EditorMode::Edit,
                    ctx.selection.space.share_id.as_deref(),
                    ctx.selection.same_tab,
                    ctx,
                    host,
                );
            }
            ActionHandler::OpenExternalApp { app } => {
                let target = self.launch_target(ctx)?;
                launcher::open_external_app(
                    app,
                    &target,
                    ctx.selection.space.share_id.as_deref(),
                    ctx.selection.same_tab,
                    ctx,
                    host,
                );
            }
            ActionHandler::Custom(handler) => handler(ctx, host),
        }
        Ok(())
    }

    fn launch_target(&self, ctx: &ActionContext<'_>) -> Result<LaunchTarget, ActionError> {
        let resource =
            ctx.selection
                .resources
                .first()
                .ok_or_else(|| ActionError::NoResourceSelected {
                    action: self.id.clone(),
                })?;
        Ok(LaunchTarget::new(&ctx.selection.space, resource))
    }
}

/// Serializable summary of an action, for menus and logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionInfo {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_fill_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub component_type: ComponentType,
    pub can_be_default: bool,
    pub class: String,
    pub source: ActionSource,
}

impl ActionInfo {
    pub fn from_action(action: &FileAction, translator: &dyn Translator) -> Self {
        Self {
            id: action.id.clone(),
            label: action.label(translator),
            icon: action.icon.clone(),
            icon_fill_type: action.icon_fill_type.clone(),
            img: action.img.clone(),
            component_type: action.component_type,
            can_be_default: action.can_be_default,
            class: action.class.clone(),
            source: action.source,
        }
    }
}
