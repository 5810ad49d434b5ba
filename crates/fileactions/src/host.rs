//! Host services used when launching actions.
//!
//! The router, browser windows and notification area belong to the host
//! application. Actions reach them only through these traits.

use serde::Serialize;

use fileactions_core::{RouteLocation, Translator};

/// Routing system of the host.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Resolve a route into an href.
    fn resolve_href(&self, route: &RouteLocation) -> String;

    /// Navigate the current tab.
    fn push(&self, route: RouteLocation);
}

/// Handle of an opened window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle(pub u64);

/// Browser window management.
#[cfg_attr(test, mockall::automock)]
pub trait WindowOpener {
    /// Open `href` in the window named `target`.
    ///
    /// Returns `None` when the browser blocked the window.
    fn open(&self, href: &str, target: &str) -> Option<WindowHandle>;

    fn focus(&self, handle: WindowHandle);
}

/// User notification area.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn show_message(&self, notification: Notification);
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Info,
    Warning,
    Danger,
}

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub desc: String,
    pub status: NotificationStatus,
    /// Seconds until the message hides itself.
    pub timeout: u32,
}

/// Bundle of host services passed to handlers.
#[derive(Clone, Copy)]
pub struct Host<'a> {
    pub navigator: &'a dyn Navigator,
    pub windows: &'a dyn WindowOpener,
    pub notifier: &'a dyn Notifier,
    pub translator: &'a dyn Translator,
}

impl std::fmt::Debug for Host<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}
