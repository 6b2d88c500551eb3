//! The closed style catalog for spanweave.
//!
//! Every annotation kind the engine can render is enumerated here, together
//! with the four span templates the kinds resolve to. The catalog is pure
//! data plus marker writers; it knows nothing about intervals or nesting.

mod handle;
mod kind;
mod palette;
mod template;

pub use handle::StyleHandle;
pub use kind::StyleKind;
pub use template::SpanTemplate;
