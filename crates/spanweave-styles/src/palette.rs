use crate::kind::StyleKind;
use crate::template::SpanTemplate;
use smol_str::SmolStr;

/// Fixed kind → template mapping. `label` and `class` are passed in by the
/// handle so runtime labels flow through the same path as fixed ones.
pub(crate) fn template_for(kind: StyleKind, label: SmolStr, class: SmolStr) -> SpanTemplate {
    match kind {
        StyleKind::LegalObligation => background(class, "#86b0f4", true),
        StyleKind::LegalObligationUnknown => background(class, "#c9daf8", true),
        StyleKind::PredicateRootVerb => background(class, "#ffd966", true),
        StyleKind::PredicateRootAdjective => background(class, "#ffe599", true),
        StyleKind::Headphrase => underline(class, "#38761d"),
        StyleKind::WeakWord => background(class, "#ea9999", true),
        StyleKind::Condition => underline(class, "#3c78d8"),
        StyleKind::LoopMarker => underline(class, "#a61c00"),
        StyleKind::RepetitionMarker => underline(class, "#cc4125"),
        StyleKind::TimeMarker => underline(class, "#674ea7"),
        StyleKind::NamedEntity => labeled_box(class, label, "#b45f06", "#f6b26b"),
        StyleKind::ExternalEntity => labeled_box(class, label, "#85200c", "#dd7e6b"),
        StyleKind::SelfReference => labeled_box(class, label, "#4c1130", "#c27ba0"),
        StyleKind::LinkedPhrase => underline(class, "#1155cc"),
        StyleKind::DefinitionTerm => background(class, "#b6d7a8", true),
        StyleKind::DefinitionDomain => background(class, "#d9ead3", false),
        StyleKind::DefinitionExplanation => underline(class, "#6aa84f"),
        StyleKind::LowImportance => SpanTemplate::Monospace { class },
    }
}

fn background(class: SmolStr, color: &'static str, bold: bool) -> SpanTemplate {
    SpanTemplate::Background {
        class,
        color: SmolStr::new_static(color),
        bold,
    }
}

fn underline(class: SmolStr, color: &'static str) -> SpanTemplate {
    SpanTemplate::Underline {
        class,
        color: SmolStr::new_static(color),
    }
}

fn labeled_box(
    class: SmolStr,
    label: SmolStr,
    border: &'static str,
    badge: &'static str,
) -> SpanTemplate {
    SpanTemplate::LabeledBox {
        class,
        label,
        border: SmolStr::new_static(border),
        badge: SmolStr::new_static(badge),
    }
}
