//! Action labels and translation.
//!
//! Labels are carried as data and resolved once by the caller's
//! localization layer through a [`Translator`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Looks up the translation of a message id.
pub trait Translator {
    fn gettext(&self, msgid: &str) -> String;
}

/// Translator that returns every message id unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn gettext(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

/// Display text of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionLabel {
    /// Final text, shown as is.
    Text { text: String },

    /// Message id translated at display time, then interpolated with `params`.
    Translatable {
        msgid: String,
        #[serde(default)]
        params: BTreeMap<String, String>,
    },
}

impl ActionLabel {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn translatable(msgid: impl Into<String>) -> Self {
        Self::Translatable {
            msgid: msgid.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add an interpolation parameter. No-op on plain text labels.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Translatable { params, .. } = &mut self {
            params.insert(key.into(), value.into());
        }
        self
    }

    /// Resolve the label into display text.
    pub fn resolve(&self, translator: &dyn Translator) -> String {
        match self {
            Self::Text { text } => text.clone(),
            Self::Translatable { msgid, params } => {
                interpolate(&translator.gettext(msgid), params)
            }
        }
    }
}

/// Replace `%{name}` placeholders with values from `params`.
///
/// Whitespace inside the braces is ignored. Unknown placeholders and
/// unterminated braces are left untouched.
pub fn interpolate(template: &str, params: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = after[..end].trim();
        match params.get(key) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct German;

    impl Translator for German {
        fn gettext(&self, msgid: &str) -> String {
            match msgid {
                "Open in %{app}" => "In %{app} öffnen".to_string(),
                other => other.to_string(),
            }
        }
    }

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_interpolate_with_spaces() {
        let out = interpolate("Open in %{ appName }", &params(&[("appName", "Collabora")]));
        assert_eq!(out, "Open in Collabora");
    }

    #[test]
    fn test_interpolate_unknown_and_unterminated() {
        assert_eq!(interpolate("a %{x} b", &params(&[])), "a %{x} b");
        assert_eq!(interpolate("a %{x", &params(&[("x", "1")])), "a %{x");
        assert_eq!(
            interpolate("%{a}%{b}", &params(&[("a", "1"), ("b", "2")])),
            "12"
        );
    }

    #[test]
    fn test_label_resolve_translates_first() {
        let label = ActionLabel::translatable("Open in %{app}").with_param("app", "Text Editor");
        assert_eq!(label.resolve(&IdentityTranslator), "Open in Text Editor");
        assert_eq!(label.resolve(&German), "In Text Editor öffnen");
    }

    #[test]
    fn test_text_label_ignores_params() {
        let label = ActionLabel::text("Delete").with_param("x", "y");
        assert_eq!(label, ActionLabel::text("Delete"));
        assert_eq!(label.resolve(&German), "Delete");
    }
}
