//! Selection context types.

use serde::{Deserialize, Serialize};

use crate::resource::{Resource, Space};

/// The resources currently selected and the space they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionContext {
    pub space: Space,

    #[serde(default)]
    pub resources: Vec<Resource>,

    /// Caller asks to stay in the current tab when launching.
    #[serde(default)]
    pub same_tab: bool,
}

impl SelectionContext {
    pub fn new(space: Space, resources: Vec<Resource>) -> Self {
        Self {
            space,
            resources,
            same_tab: false,
        }
    }

    pub fn in_same_tab(mut self) -> Self {
        self.same_tab = true;
        self
    }

    /// The selected resource when exactly one is selected.
    pub fn single(&self) -> Option<&Resource> {
        match self.resources.as_slice() {
            [resource] => Some(resource),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single() {
        let space = Space::new("s", "personal/admin");
        let one = SelectionContext::new(space.clone(), vec![Resource::new("1", "/a")]);
        assert_eq!(one.single().map(|r| r.id.as_str()), Some("1"));

        let two = SelectionContext::new(
            space.clone(),
            vec![Resource::new("1", "/a"), Resource::new("2", "/b")],
        );
        assert!(two.single().is_none());

        let none = SelectionContext::new(space, Vec::new());
        assert!(none.single().is_none());
        assert!(none.is_empty());
    }
}
