//! Overlapping-annotation rendering engine.
//!
//! Given an immutable text and an arbitrary, possibly overlapping set of
//! styled character ranges, produce one markup string in which every
//! annotation appears as a properly nested element and no source character
//! is lost, duplicated, or reordered. Partial overlaps cannot both survive
//! as simple tag pairs, so each maximal overlap cluster is resolved by
//! giving its longest span outer priority and splitting the others into
//! fragments that keep their style.
//!
//! ```
//! use spanweave_renderer::MarkupEngine;
//! use spanweave_styles::StyleKind;
//!
//! let engine = MarkupEngine::new("The fruit of an apple tree is edible.");
//! engine.add(4, 9, StyleKind::DefinitionTerm).unwrap();
//! let html = engine.render().unwrap();
//! assert!(html.contains(">fruit</span>"));
//! ```

mod buffer;
mod engine;
mod error;
mod html;
mod partition;
mod store;

pub use buffer::TextBuffer;
pub use engine::MarkupEngine;
pub use error::RenderError;
pub use html::HtmlSink;
pub use store::{Annotation, AnnotationRequest, AnnotationStore, CharSpan};

pub use spanweave_styles::{SpanTemplate, StyleHandle, StyleKind};

/// Write-only, stack-discipline markup emitter.
///
/// Every `open_span` is matched by a `close_span` before the enclosing
/// recursive call returns, so implementations never need their own stack.
pub trait MarkupSink {
    type Error;

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;
    fn open_span(&mut self, template: &SpanTemplate) -> Result<(), Self::Error>;
    fn close_span(&mut self, template: &SpanTemplate) -> Result<(), Self::Error>;
}

/// Render `text` with the given annotation requests to HTML in one call.
pub fn render_annotated_html(
    text: &str,
    requests: &[AnnotationRequest],
) -> Result<String, RenderError> {
    let engine = MarkupEngine::new(text);
    for request in requests {
        engine.store().add_request(request)?;
    }
    engine.render()
}
