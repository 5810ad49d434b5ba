//! A host that records what launched actions ask for.
//!
//! Stands in for the browser: routes resolve to plain paths, navigation and
//! window requests are written to an in-memory log that the CLI prints.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use fileactions::{
    Host, Navigator, Notification, Notifier, RouteLocation, Translator, WindowHandle,
    WindowOpener,
};

/// Records navigation, window and notification requests.
#[derive(Debug, Default)]
pub struct RecordingHost {
    block_popups: bool,
    next_window: AtomicU64,
    log: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn new(block_popups: bool) -> Self {
        Self {
            block_popups,
            ..Default::default()
        }
    }

    /// Bundle this recorder as the host services of a launch.
    pub fn host<'a>(&'a self, translator: &'a dyn Translator) -> Host<'a> {
        Host {
            navigator: self,
            windows: self,
            notifier: self,
            translator,
        }
    }

    /// Recorded entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.log.lock().clone()
    }

    fn record(&self, entry: String) {
        tracing::debug!("{}", entry);
        self.log.lock().push(entry);
    }
}

impl Navigator for RecordingHost {
    fn resolve_href(&self, route: &RouteLocation) -> String {
        let mut href = format!("/{}", route.name);
        if let Some(item) = route.params.get("driveAliasAndItem") {
            href.push('/');
            href.push_str(item);
        }
        if !route.query.is_empty() {
            let query: Vec<String> = route
                .query
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            href.push('?');
            href.push_str(&query.join("&"));
        }
        href
    }

    fn push(&self, route: RouteLocation) {
        let href = self.resolve_href(&route);
        self.record(format!("navigate {}", href));
    }
}

impl WindowOpener for RecordingHost {
    fn open(&self, href: &str, target: &str) -> Option<WindowHandle> {
        if self.block_popups {
            self.record(format!("blocked window {} ({})", href, target));
            return None;
        }
        let handle = WindowHandle(self.next_window.fetch_add(1, Ordering::Relaxed));
        self.record(format!("open window {} ({})", href, target));
        Some(handle)
    }

    fn focus(&self, handle: WindowHandle) {
        self.record(format!("focus window #{}", handle.0));
    }
}

impl Notifier for RecordingHost {
    fn show_message(&self, notification: Notification) {
        self.record(format!(
            "notify [{:?}] {}: {}",
            notification.status, notification.title, notification.desc
        ));
    }
}
