//! Opening editors and external apps.
//!
//! Editors open through their own handler, a new window, or navigation of
//! the current tab. External apps always go through the window opener.
//! A blocked window is reported to the user and otherwise ignored.

use serde::Serialize;
use std::collections::BTreeMap;

use fileactions_core::{Resource, RouteLocation, Space, EXTERNAL_APPS_ROUTE};

use crate::context::ActionContext;
use crate::host::{Host, Notification, NotificationStatus};
use crate::registry::{EditorHandlerArgs, EditorRegistration};

const POPUP_BLOCKED_TITLE: &str = "Blocked pop-ups and redirects";
const POPUP_BLOCKED_DESC: &str = "Some features might not work correctly. Please enable pop-ups and redirects in Settings > Privacy & Security > Site Settings > Permissions";
const POPUP_BLOCKED_TIMEOUT: u32 = 10;

/// Mode an editor is opened in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Edit,
    Create,
}

impl EditorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Create => "create",
        }
    }
}

/// The file an app is launched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    pub drive_alias_and_item: String,
    pub file_path: String,
    pub file_id: Option<String>,
}

impl LaunchTarget {
    pub fn new(space: &Space, resource: &Resource) -> Self {
        Self {
            drive_alias_and_item: space.drive_alias_and_item(resource),
            file_path: resource.webdav_path.clone(),
            file_id: resource.file_id.clone(),
        }
    }
}

/// Build the navigation target for opening an app.
///
/// `file_id` lands in the query only with id-based routing enabled. The
/// current location's context query is appended last and wins on clashes.
pub fn route_options(
    route_name: &str,
    target: &LaunchTarget,
    file_id: Option<&str>,
    mode: Option<EditorMode>,
    share_id: Option<&str>,
    ctx: &ActionContext<'_>,
) -> RouteLocation {
    let mut params = BTreeMap::new();
    params.insert(
        "driveAliasAndItem".to_string(),
        target.drive_alias_and_item.clone(),
    );
    params.insert("filePath".to_string(), target.file_path.clone());
    if let Some(file_id) = file_id {
        params.insert("fileId".to_string(), file_id.to_string());
    }
    if let Some(mode) = mode {
        params.insert("mode".to_string(), mode.as_str().to_string());
    }

    let mut query = BTreeMap::new();
    if let Some(share_id) = share_id.filter(|s| !s.is_empty()) {
        query.insert("shareId".to_string(), share_id.to_string());
    }
    if let Some(file_id) = file_id.filter(|_| ctx.config.options.routing.id_based) {
        query.insert("fileId".to_string(), file_id.to_string());
    }
    query.extend(ctx.location.to_context_query());

    RouteLocation {
        name: route_name.to_string(),
        params,
        query,
    }
}

/// Open `target` in a registered editor.
pub fn open_editor(
    editor: &EditorRegistration,
    target: &LaunchTarget,
    mode: EditorMode,
    share_id: Option<&str>,
    same_tab: bool,
    ctx: &ActionContext<'_>,
    host: &Host<'_>,
) {
    if let Some(handler) = &editor.handler {
        tracing::debug!(
            "Opening {:?} with custom handler of '{}'",
            target.file_path,
            editor.app
        );
        handler(EditorHandlerArgs {
            config: ctx.config.clone(),
            extension_config: editor.config.clone(),
            drive_alias_and_item: target.drive_alias_and_item.clone(),
            file_path: target.file_path.clone(),
            file_id: target.file_id.clone(),
            mode,
            share_id: share_id.filter(|s| !s.is_empty()).map(str::to_string),
        });
        return;
    }

    let route_name = editor.route_name();
    let route = route_options(
        route_name,
        target,
        target.file_id.as_deref(),
        Some(mode),
        share_id,
        ctx,
    );

    if ctx.config.options.open_apps_in_tab && !same_tab {
        let href = host.navigator.resolve_href(&route);
        let window_name = format!("{}-{}", route_name, target.file_path);
        tracing::info!("Opening editor '{}' in window {:?}", editor.app, window_name);
        match host.windows.open(&href, &window_name) {
            Some(handle) => host.windows.focus(handle),
            None => notify_popup_blocked(host),
        }
        return;
    }

    tracing::info!("Navigating to editor route '{}'", route_name);
    host.navigator.push(route);
}

/// Open `target` in an app-provider app.
pub fn open_external_app(
    app: &str,
    target: &LaunchTarget,
    share_id: Option<&str>,
    same_tab: bool,
    ctx: &ActionContext<'_>,
    host: &Host<'_>,
) {
    let mut route = route_options(EXTERNAL_APPS_ROUTE, target, None, None, share_id, ctx);

    let mut query = BTreeMap::new();
    query.insert("app".to_string(), app.to_string());
    if let Some(file_id) = &target.file_id {
        query.insert("fileId".to_string(), file_id.clone());
    }
    query.append(&mut route.query);
    route.query = query;

    let href = host.navigator.resolve_href(&route);
    let window_name = if same_tab { "_self" } else { "_blank" };
    tracing::info!("Opening external app '{}' in {}", app, window_name);
    if host.windows.open(&href, window_name).is_none() {
        notify_popup_blocked(host);
    }
}

fn notify_popup_blocked(host: &Host<'_>) {
    tracing::warn!("Window was blocked by the browser");
    host.notifier.show_message(Notification {
        title: host.translator.gettext(POPUP_BLOCKED_TITLE),
        desc: host.translator.gettext(POPUP_BLOCKED_DESC),
        status: NotificationStatus::Warning,
        timeout: POPUP_BLOCKED_TIMEOUT,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Capabilities;
    use crate::host::{MockNavigator, MockNotifier, MockWindowOpener, WindowHandle};
    use fileactions_core::{AppConfig, IdentityTranslator, SelectionContext};
    use mockall::predicate::eq;
    use std::sync::{Arc, Mutex};

    fn target() -> LaunchTarget {
        LaunchTarget {
            drive_alias_and_item: "personal/admin/notes.md".to_string(),
            file_path: "/files/admin/notes.md".to_string(),
            file_id: Some("f1".to_string()),
        }
    }

    fn selection() -> SelectionContext {
        SelectionContext::new(
            Space::new("s", "personal/admin"),
            vec![Resource::new("1", "/notes.md")],
        )
    }

    fn make_config(open_apps_in_tab: bool, id_based: bool) -> AppConfig {
        let mut config = AppConfig::default();
        config.options.open_apps_in_tab = open_apps_in_tab;
        config.options.routing.id_based = id_based;
        config
    }

    #[test]
    fn test_route_options_id_based() {
        let selection = selection();
        let location = RouteLocation::new("files-spaces-generic");
        let caps = Capabilities::default();

        let config = make_config(false, true);
        let ctx = ActionContext::new(&selection, &location, &caps, &config);
        let route = route_options(
            "text-editor",
            &target(),
            Some("f1"),
            Some(EditorMode::Edit),
            Some("sh1"),
            &ctx,
        );

        assert_eq!(route.name, "text-editor");
        assert_eq!(route.params["driveAliasAndItem"], "personal/admin/notes.md");
        assert_eq!(route.params["filePath"], "/files/admin/notes.md");
        assert_eq!(route.params["fileId"], "f1");
        assert_eq!(route.params["mode"], "edit");
        assert_eq!(route.query["shareId"], "sh1");
        assert_eq!(route.query["fileId"], "f1");
        assert_eq!(route.query["contextRouteName"], "files-spaces-generic");

        let config = make_config(false, false);
        let ctx = ActionContext::new(&selection, &location, &caps, &config);
        let route = route_options("text-editor", &target(), Some("f1"), None, None, &ctx);
        assert!(!route.query.contains_key("fileId"));
        assert!(!route.query.contains_key("shareId"));
        assert!(!route.params.contains_key("mode"));
    }

    #[test]
    fn test_open_editor_navigates_current_tab() {
        let selection = selection();
        let location = RouteLocation::new("files-spaces-generic");
        let caps = Capabilities::default();
        let config = make_config(false, false);
        let ctx = ActionContext::new(&selection, &location, &caps, &config);

        let mut navigator = MockNavigator::new();
        navigator
            .expect_push()
            .withf(|route| route.name == "text-editor" && route.params["mode"] == "edit")
            .times(1)
            .return_const(());
        let mut windows = MockWindowOpener::new();
        windows.expect_open().never();
        let notifier = MockNotifier::new();
        let host = Host {
            navigator: &navigator,
            windows: &windows,
            notifier: &notifier,
            translator: &IdentityTranslator,
        };

        let editor = EditorRegistration::for_extension("text-editor", "md");
        open_editor(&editor, &target(), EditorMode::Edit, None, false, &ctx, &host);
    }

    #[test]
    fn test_open_editor_in_new_tab_focuses_window() {
        let selection = selection();
        let location = RouteLocation::new("files-spaces-generic");
        let caps = Capabilities::default();
        let config = make_config(true, false);
        let ctx = ActionContext::new(&selection, &location, &caps, &config);

        let mut navigator = MockNavigator::new();
        navigator
            .expect_resolve_href()
            .return_const("/text-editor/personal/admin/notes.md".to_string());
        navigator.expect_push().never();
        let mut windows = MockWindowOpener::new();
        windows
            .expect_open()
            .with(
                eq("/text-editor/personal/admin/notes.md"),
                eq("text-editor-/files/admin/notes.md"),
            )
            .times(1)
            .return_const(Some(WindowHandle(7)));
        windows
            .expect_focus()
            .with(eq(WindowHandle(7)))
            .times(1)
            .return_const(());
        let mut notifier = MockNotifier::new();
        notifier.expect_show_message().never();
        let host = Host {
            navigator: &navigator,
            windows: &windows,
            notifier: &notifier,
            translator: &IdentityTranslator,
        };

        let editor = EditorRegistration::for_extension("text-editor", "md");
        open_editor(&editor, &target(), EditorMode::Edit, None, false, &ctx, &host);
    }

    #[test]
    fn test_open_editor_create_mode() {
        let selection = selection();
        let location = RouteLocation::new("files-spaces-generic");
        let caps = Capabilities::default();
        let config = make_config(false, false);
        let ctx = ActionContext::new(&selection, &location, &caps, &config);

        let mut navigator = MockNavigator::new();
        navigator
            .expect_push()
            .withf(|route| route.name == "text-editor-new" && route.params["mode"] == "create")
            .times(1)
            .return_const(());
        let windows = MockWindowOpener::new();
        let notifier = MockNotifier::new();
        let host = Host {
            navigator: &navigator,
            windows: &windows,
            notifier: &notifier,
            translator: &IdentityTranslator,
        };

        let editor =
            EditorRegistration::for_extension("text-editor", "md").with_route_name("text-editor-new");
        open_editor(&editor, &target(), EditorMode::Create, None, false, &ctx, &host);
    }

    #[test]
    fn test_open_editor_same_tab_overrides_new_tab_option() {
        let selection = selection();
        let location = RouteLocation::new("files-spaces-generic");
        let caps = Capabilities::default();
        let config = make_config(true, false);
        let ctx = ActionContext::new(&selection, &location, &caps, &config);

        let mut navigator = MockNavigator::new();
        navigator.expect_push().times(1).return_const(());
        let mut windows = MockWindowOpener::new();
        windows.expect_open().never();
        let notifier = MockNotifier::new();
        let host = Host {
            navigator: &navigator,
            windows: &windows,
            notifier: &notifier,
            translator: &IdentityTranslator,
        };

        let editor = EditorRegistration::for_extension("text-editor", "md");
        open_editor(&editor, &target(), EditorMode::Edit, None, true, &ctx, &host);
    }

    #[test]
    fn test_open_editor_blocked_popup_warns() {
        let selection = selection();
        let location = RouteLocation::new("files-spaces-generic");
        let caps = Capabilities::default();
        let config = make_config(true, false);
        let ctx = ActionContext::new(&selection, &location, &caps, &config);

        let mut navigator = MockNavigator::new();
        navigator.expect_resolve_href().return_const("/x".to_string());
        let mut windows = MockWindowOpener::new();
        windows.expect_open().times(1).return_const(None::<WindowHandle>);
        windows.expect_focus().never();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_show_message()
            .withf(|n| {
                n.title == POPUP_BLOCKED_TITLE
                    && n.status == NotificationStatus::Warning
                    && n.timeout == 10
            })
            .times(1)
            .return_const(());
        let host = Host {
            navigator: &navigator,
            windows: &windows,
            notifier: &notifier,
            translator: &IdentityTranslator,
        };

        let editor = EditorRegistration::for_extension("text-editor", "md");
        open_editor(&editor, &target(), EditorMode::Edit, None, false, &ctx, &host);
    }

    #[test]
    fn test_open_editor_custom_handler() {
        let selection = selection();
        let location = RouteLocation::new("files-spaces-generic");
        let caps = Capabilities::default();
        let config = make_config(true, false);
        let ctx = ActionContext::new(&selection, &location, &caps, &config);

        let navigator = MockNavigator::new();
        let windows = MockWindowOpener::new();
        let notifier = MockNotifier::new();
        let host = Host {
            navigator: &navigator,
            windows: &windows,
            notifier: &notifier,
            translator: &IdentityTranslator,
        };

        let received = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&received);
        let mut editor = EditorRegistration::for_extension("drawio", "drawio")
            .with_handler(move |args| *sink.lock().unwrap() = Some(args));
        editor.config = serde_json::json!({ "url": "https://embed.diagrams.net" });

        open_editor(&editor, &target(), EditorMode::Edit, Some("sh1"), false, &ctx, &host);

        let args = received.lock().unwrap().take().unwrap();
        assert_eq!(args.drive_alias_and_item, "personal/admin/notes.md");
        assert_eq!(args.file_id.as_deref(), Some("f1"));
        assert_eq!(args.share_id.as_deref(), Some("sh1"));
        assert_eq!(args.mode, EditorMode::Edit);
        assert_eq!(args.extension_config["url"], "https://embed.diagrams.net");
        assert!(args.config.options.open_apps_in_tab);
    }

    #[test]
    fn test_open_external_app_query() {
        let selection = selection();
        let location = RouteLocation::new("files-spaces-generic");
        let caps = Capabilities::default();
        let config = make_config(false, true);
        let ctx = ActionContext::new(&selection, &location, &caps, &config);

        let mut navigator = MockNavigator::new();
        navigator
            .expect_resolve_href()
            .withf(|route| {
                route.name == EXTERNAL_APPS_ROUTE
                    && route.query["app"] == "Collabora"
                    && route.query["fileId"] == "f1"
                    && !route.params.contains_key("fileId")
                    && !route.params.contains_key("mode")
            })
            .times(1)
            .return_const("/external-apps".to_string());
        let mut windows = MockWindowOpener::new();
        windows
            .expect_open()
            .with(eq("/external-apps"), eq("_blank"))
            .times(1)
            .return_const(Some(WindowHandle(1)));
        windows.expect_focus().never();
        let notifier = MockNotifier::new();
        let host = Host {
            navigator: &navigator,
            windows: &windows,
            notifier: &notifier,
            translator: &IdentityTranslator,
        };

        open_external_app("Collabora", &target(), None, false, &ctx, &host);
    }

    #[test]
    fn test_open_external_app_same_tab_blocked() {
        let selection = selection();
        let location = RouteLocation::new("files-spaces-generic");
        let caps = Capabilities::default();
        let config = make_config(false, false);
        let ctx = ActionContext::new(&selection, &location, &caps, &config);

        let mut navigator = MockNavigator::new();
        navigator.expect_resolve_href().return_const("/x".to_string());
        let mut windows = MockWindowOpener::new();
        windows
            .expect_open()
            .with(eq("/x"), eq("_self"))
            .times(1)
            .return_const(None::<WindowHandle>);
        let mut notifier = MockNotifier::new();
        notifier.expect_show_message().times(1).return_const(());
        let host = Host {
            navigator: &navigator,
            windows: &windows,
            notifier: &notifier,
            translator: &IdentityTranslator,
        };

        open_external_app("OnlyOffice", &target(), None, true, &ctx, &host);
    }
}
