use serde::{Deserialize, Serialize};

/// The closed set of annotation kinds.
///
/// Wire names are kebab-case, e.g. `legal-obligation-unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKind {
    LegalObligation,
    LegalObligationUnknown,
    PredicateRootVerb,
    PredicateRootAdjective,
    Headphrase,
    WeakWord,
    Condition,
    LoopMarker,
    RepetitionMarker,
    TimeMarker,
    NamedEntity,
    ExternalEntity,
    SelfReference,
    LinkedPhrase,
    DefinitionTerm,
    DefinitionDomain,
    DefinitionExplanation,
    LowImportance,
}

impl StyleKind {
    pub const ALL: [StyleKind; 18] = [
        StyleKind::LegalObligation,
        StyleKind::LegalObligationUnknown,
        StyleKind::PredicateRootVerb,
        StyleKind::PredicateRootAdjective,
        StyleKind::Headphrase,
        StyleKind::WeakWord,
        StyleKind::Condition,
        StyleKind::LoopMarker,
        StyleKind::RepetitionMarker,
        StyleKind::TimeMarker,
        StyleKind::NamedEntity,
        StyleKind::ExternalEntity,
        StyleKind::SelfReference,
        StyleKind::LinkedPhrase,
        StyleKind::DefinitionTerm,
        StyleKind::DefinitionDomain,
        StyleKind::DefinitionExplanation,
        StyleKind::LowImportance,
    ];

    /// The fixed label baked into the catalog entry. Doubles as the source of
    /// the element class name (whitespace removed).
    pub fn label(&self) -> &'static str {
        match self {
            StyleKind::LegalObligation => "Legal Obligation",
            StyleKind::LegalObligationUnknown => "Unknown Obligation",
            StyleKind::PredicateRootVerb => "Predicate Verb",
            StyleKind::PredicateRootAdjective => "Predicate Adjective",
            StyleKind::Headphrase => "Headphrase",
            StyleKind::WeakWord => "Weak Word",
            StyleKind::Condition => "Condition",
            StyleKind::LoopMarker => "Loop",
            StyleKind::RepetitionMarker => "Repetition",
            StyleKind::TimeMarker => "Time",
            StyleKind::NamedEntity => "Entity",
            StyleKind::ExternalEntity => "External Entity",
            StyleKind::SelfReference => "Self Reference",
            StyleKind::LinkedPhrase => "Linked Phrase",
            StyleKind::DefinitionTerm => "Definition Term",
            StyleKind::DefinitionDomain => "Definition Domain",
            StyleKind::DefinitionExplanation => "Definition Explanation",
            StyleKind::LowImportance => "Low Importance",
        }
    }

    /// Kinds whose label is supplied by the caller at resolution time rather
    /// than fixed in the catalog.
    pub fn accepts_runtime_label(&self) -> bool {
        matches!(self, StyleKind::NamedEntity | StyleKind::LowImportance)
    }
}
