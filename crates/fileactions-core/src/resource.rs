//! Resource and Space types.

use serde::{Deserialize, Serialize};

/// Status of a share received by the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareStatus {
    Pending,
    Accepted,
    Declined,
}

/// A file or folder.
///
/// Everything the user selects and acts upon is a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Identifier within the current listing.
    pub id: String,

    /// Backend file id, used for id-based routing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Path relative to the space root.
    pub path: String,

    /// Full WebDAV path, passed to editors as the file path.
    #[serde(default)]
    pub webdav_path: String,

    /// File extension without the leading dot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default)]
    pub is_folder: bool,

    /// Share status, only set for received shares.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ShareStatus>,
}

impl Resource {
    /// Create a file resource at `path`.
    ///
    /// The name and WebDAV path are derived from the path; set the
    /// remaining fields with the `with_*` builders.
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            id: id.into(),
            file_id: None,
            name,
            webdav_path: path.clone(),
            path,
            extension: None,
            mime_type: None,
            is_folder: false,
            status: None,
        }
    }

    /// Create a folder resource at `path`.
    pub fn folder(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            is_folder: true,
            ..Self::new(id, path)
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_file_id(mut self, file_id: impl Into<String>) -> Self {
        self.file_id = Some(file_id.into());
        self
    }

    pub fn with_webdav_path(mut self, webdav_path: impl Into<String>) -> Self {
        self.webdav_path = webdav_path.into();
        self
    }

    pub fn with_status(mut self, status: ShareStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Extension, if present and non-empty.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref().filter(|e| !e.is_empty())
    }

    /// MIME type, if present and non-empty.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref().filter(|m| !m.is_empty())
    }

    /// Whether this is a received share the user declined.
    pub fn is_declined_share(&self) -> bool {
        self.status == Some(ShareStatus::Declined)
    }
}

/// A drive that resources belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: String,

    /// Route-friendly drive alias, e.g. `personal/admin`.
    pub drive_alias: String,

    /// Drive type, e.g. `personal`, `project`, `share`.
    #[serde(default)]
    pub drive_type: String,

    /// Set when the space represents a received share.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
}

impl Space {
    pub fn new(id: impl Into<String>, drive_alias: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            drive_alias: drive_alias.into(),
            drive_type: String::new(),
            share_id: None,
        }
    }

    pub fn with_share_id(mut self, share_id: impl Into<String>) -> Self {
        self.share_id = Some(share_id.into());
        self
    }

    /// Join the drive alias and the resource path into a route parameter.
    ///
    /// Exactly one `/` separates the two parts.
    pub fn drive_alias_and_item(&self, resource: &Resource) -> String {
        let alias = self.drive_alias.trim_end_matches('/');
        let item = resource.path.trim_start_matches('/');
        if item.is_empty() {
            alias.to_string()
        } else {
            format!("{}/{}", alias, item)
        }
    }
}
