//! Capabilities and the external app catalog.
//!
//! The app-provider backend advertises, per MIME type, which external
//! applications can open a file and which of them is the default.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Server capabilities relevant to file actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub files: FilesCapabilities,
}

/// `files` capability section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilesCapabilities {
    /// App-provider endpoints. Presence enables external apps, even when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_providers: Option<Vec<AppProviderCapability>>,
}

/// One advertised app-provider endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppProviderCapability {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_url: Option<String>,
}

impl Capabilities {
    /// Capabilities with a single enabled app provider.
    pub fn with_app_providers() -> Self {
        Self {
            files: FilesCapabilities {
                app_providers: Some(vec![AppProviderCapability {
                    enabled: true,
                    ..Default::default()
                }]),
            },
        }
    }

    pub fn has_app_providers(&self) -> bool {
        self.files.app_providers.is_some()
    }
}

/// An external application able to open a MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppProvider {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

impl AppProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            img: None,
        }
    }
}

/// Catalog entry for a single MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MimeTypeEntry {
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub app_providers: Vec<AppProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_application: Option<String>,
    #[serde(default)]
    pub allow_creation: bool,
}

impl MimeTypeEntry {
    pub fn new(mime_type: impl Into<String>, app_providers: Vec<AppProvider>) -> Self {
        Self {
            mime_type: mime_type.into(),
            ext: None,
            name: None,
            icon: None,
            app_providers,
            default_application: None,
            allow_creation: false,
        }
    }

    pub fn with_default_application(mut self, name: impl Into<String>) -> Self {
        self.default_application = Some(name.into());
        self
    }

    pub fn is_default(&self, app: &str) -> bool {
        self.default_application.as_deref() == Some(app)
    }
}

/// MIME-type table fetched from the app-provider backend.
///
/// The host replaces the entries whenever it refetches them.
pub struct ExternalAppCatalog {
    entries: RwLock<Vec<MimeTypeEntry>>,
}

impl ExternalAppCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Replace all entries.
    pub fn set_entries(&self, entries: Vec<MimeTypeEntry>) {
        let count = entries.len();
        *self.entries.write() = entries;
        tracing::info!("External app catalog updated with {} MIME types", count);
    }

    /// Find the entry for an exact MIME type.
    pub fn find(&self, mime_type: &str) -> Option<MimeTypeEntry> {
        self.entries
            .read()
            .iter()
            .find(|entry| entry.mime_type == mime_type)
            .cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }
}

impl Default for ExternalAppCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_presence() {
        assert!(!Capabilities::default().has_app_providers());

        let empty: Capabilities =
            serde_json::from_str(r#"{"files": {"app_providers": []}}"#).unwrap();
        assert!(empty.has_app_providers());

        let null: Capabilities =
            serde_json::from_str(r#"{"files": {"app_providers": null}}"#).unwrap();
        assert!(!null.has_app_providers());
    }

    #[test]
    fn test_catalog_find_is_exact() {
        let catalog = ExternalAppCatalog::new();
        assert!(catalog.is_empty());

        catalog.set_entries(vec![
            MimeTypeEntry::new("application/pdf", vec![AppProvider::new("Collabora")])
                .with_default_application("Collabora"),
            MimeTypeEntry::new("text/plain", vec![]),
        ]);

        assert_eq!(catalog.len(), 2);
        let pdf = catalog.find("application/pdf").unwrap();
        assert!(pdf.is_default("Collabora"));
        assert!(catalog.find("application/PDF").is_none());
        assert!(catalog.find("application").is_none());
    }

    #[test]
    fn test_entry_deserialize() {
        let json = r#"{
            "mime_type": "application/vnd.oasis.opendocument.text",
            "ext": "odt",
            "app_providers": [{"name": "Collabora", "icon": "https://x/c.png"}],
            "default_application": "Collabora",
            "allow_creation": true
        }"#;
        let entry: MimeTypeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.app_providers.len(), 1);
        assert!(entry.allow_creation);
        assert_eq!(entry.ext.as_deref(), Some("odt"));
    }
}
