//! Built-in system actions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::action::FileAction;
use crate::context::ActionContext;

use super::ActionProvider;

/// Named groups of system actions, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemActionGroup {
    Navigate,
    DownloadArchive,
    DownloadFile,
    Favorite,
    Copy,
    Move,
    Rename,
    ShowEditTags,
    Restore,
    Delete,
    AcceptShare,
    DeclineShare,
}

impl SystemActionGroup {
    /// Every group, in aggregation order.
    pub const ALL: [SystemActionGroup; 12] = [
        Self::Navigate,
        Self::DownloadArchive,
        Self::DownloadFile,
        Self::Favorite,
        Self::Copy,
        Self::Move,
        Self::Rename,
        Self::ShowEditTags,
        Self::Restore,
        Self::Delete,
        Self::AcceptShare,
        Self::DeclineShare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Navigate => "navigate",
            Self::DownloadArchive => "download-archive",
            Self::DownloadFile => "download-file",
            Self::Favorite => "favorite",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Rename => "rename",
            Self::ShowEditTags => "show-edit-tags",
            Self::Restore => "restore",
            Self::Delete => "delete",
            Self::AcceptShare => "accept-share",
            Self::DeclineShare => "decline-share",
        }
    }
}

/// A precomputed list of actions.
#[derive(Debug, Clone, Default)]
pub struct StaticActions(pub Vec<FileAction>);

impl ActionProvider for StaticActions {
    fn list_actions(&self, _ctx: &ActionContext<'_>) -> Vec<FileAction> {
        self.0.clone()
    }
}

/// Aggregates system action groups.
///
/// Output order follows `SystemActionGroup::ALL`, not registration order.
/// Within a group, providers keep registration order.
#[derive(Default)]
pub struct SystemActions {
    groups: BTreeMap<SystemActionGroup, Vec<Box<dyn ActionProvider>>>,
}

impl SystemActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider to a group.
    pub fn add(&mut self, group: SystemActionGroup, provider: impl ActionProvider + 'static) {
        self.groups.entry(group).or_default().push(Box::new(provider));
    }

    pub fn with(
        mut self,
        group: SystemActionGroup,
        provider: impl ActionProvider + 'static,
    ) -> Self {
        self.add(group, provider);
        self
    }

    /// Add precomputed actions to a group.
    pub fn with_actions(self, group: SystemActionGroup, actions: Vec<FileAction>) -> Self {
        self.with(group, StaticActions(actions))
    }

    /// Number of groups with at least one provider.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl ActionProvider for SystemActions {
    fn list_actions(&self, ctx: &ActionContext<'_>) -> Vec<FileAction> {
        SystemActionGroup::ALL
            .iter()
            .filter_map(|group| self.groups.get(group))
            .flatten()
            .flat_map(|provider| provider.list_actions(ctx))
            .collect()
    }
}

impl std::fmt::Debug for SystemActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let groups: Vec<_> = self.groups.keys().map(|g| g.as_str()).collect();
        f.debug_struct("SystemActions").field("groups", &groups).finish()
    }
}
