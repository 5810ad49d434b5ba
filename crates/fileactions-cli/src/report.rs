//! Resolution reports.

use serde::Serialize;

use fileactions::{ActionContext, ActionInfo, ActionResolver, Resource, Translator};

/// Actions resolved for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub selected: usize,
    pub actions: Vec<ActionInfo>,
    pub default: Option<ActionInfo>,
}

impl Report {
    pub fn build(
        resolver: &ActionResolver,
        ctx: &ActionContext<'_>,
        current_folder: Option<&Resource>,
        translator: &dyn Translator,
    ) -> Self {
        let actions = resolver
            .get_all_available_actions(ctx)
            .iter()
            .map(|action| ActionInfo::from_action(action, translator))
            .collect();
        let default = resolver
            .get_default_action(ctx, current_folder)
            .map(|action| ActionInfo::from_action(&action, translator));

        Self {
            selected: ctx.selection.len(),
            actions,
            default,
        }
    }

    /// Human-readable listing. Default-capable actions are starred.
    pub fn render(&self) -> String {
        let mut out = format!(
            "{} resource(s) selected, {} action(s) available\n",
            self.selected,
            self.actions.len()
        );
        for action in &self.actions {
            out.push_str(&format!(
                "  [{}] {}: {}{}\n",
                action.source.as_str(),
                action.id,
                action.label,
                if action.can_be_default { " *" } else { "" }
            ));
        }
        match &self.default {
            Some(action) => out.push_str(&format!("default: {}\n", action.id)),
            None => out.push_str("default: none\n"),
        }
        out
    }
}
