use crate::kind::StyleKind;
use crate::palette;
use crate::template::SpanTemplate;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// An opaque reference into the style catalog: a kind plus an optional
/// caller-supplied label.
///
/// The label is honored only for kinds that accept one at resolution time
/// ([`StyleKind::accepts_runtime_label`]); for every other kind the fixed
/// catalog label wins. The label lives on the handle and is moved into the
/// resolved template value, so resolution never touches shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleHandle {
    pub kind: StyleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<SmolStr>,
}

impl StyleHandle {
    pub fn new(kind: StyleKind) -> Self {
        Self { kind, label: None }
    }

    pub fn with_label(kind: StyleKind, label: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            label: Some(label.into()),
        }
    }

    /// Resolve this handle against the catalog into a template value.
    pub fn resolve(&self) -> SpanTemplate {
        let label = match &self.label {
            Some(label) if self.kind.accepts_runtime_label() => label.clone(),
            _ => SmolStr::new_static(self.kind.label()),
        };
        let class = class_of(&label);
        palette::template_for(self.kind, label, class)
    }
}

impl From<StyleKind> for StyleHandle {
    fn from(kind: StyleKind) -> Self {
        StyleHandle::new(kind)
    }
}

/// Class identifier: the label with all whitespace removed.
fn class_of(label: &str) -> SmolStr {
    let class: String = label.chars().filter(|c| !c.is_whitespace()).collect();
    SmolStr::new(class)
}
