use crate::buffer::TextBuffer;
use crate::error::RenderError;
use crate::html::HtmlSink;
use crate::partition::render_range;
use crate::store::AnnotationStore;
use spanweave_styles::StyleHandle;

/// One render session: an immutable text buffer plus its annotation store.
///
/// Producers add spans (concurrently if they like), then render. `render`
/// works on a frozen snapshot of the store and either returns the complete
/// markup string or fails with no partial output.
#[derive(Debug)]
pub struct MarkupEngine {
    buffer: TextBuffer,
    store: AnnotationStore,
}

impl MarkupEngine {
    pub fn new(text: impl Into<String>) -> Self {
        let buffer = TextBuffer::new(text);
        let store = AnnotationStore::for_len(buffer.len());
        Self { buffer, store }
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    /// The store, for producers that insert spans directly.
    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// Request an annotation over the character range `start..end`.
    pub fn add(
        &self,
        start: usize,
        end: usize,
        style: impl Into<StyleHandle>,
    ) -> Result<(), RenderError> {
        self.store.add(start, end, style)
    }

    /// Render the annotated text to a single HTML string.
    #[tracing::instrument(skip(self), fields(chars = self.buffer.len(), spans = self.store.count()))]
    pub fn render(&self) -> Result<String, RenderError> {
        let spans = self.store.snapshot();
        tracing::debug!(spans = spans.len(), "rendering annotated text");
        let mut sink = HtmlSink::new(String::new());
        render_range(&self.buffer, 0, self.buffer.len(), &spans, &mut sink)?;
        Ok(sink.into_inner())
    }
}
