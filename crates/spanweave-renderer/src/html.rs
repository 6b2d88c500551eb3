use crate::MarkupSink;
use spanweave_styles::SpanTemplate;
use std::fmt::Write;

/// Markup sink that writes HTML to any `fmt::Write`, escaping the five
/// markup metacharacters in raw text and delegating markers to the resolved
/// span templates.
pub struct HtmlSink<W: Write> {
    writer: W,
}

impl<W: Write> HtmlSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MarkupSink for HtmlSink<W> {
    type Error = std::fmt::Error;

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        for c in text.chars() {
            match c {
                '&' => self.writer.write_str("&amp;")?,
                '<' => self.writer.write_str("&lt;")?,
                '>' => self.writer.write_str("&gt;")?,
                '"' => self.writer.write_str("&quot;")?,
                '\'' => self.writer.write_str("&#39;")?,
                _ => self.writer.write_char(c)?,
            }
        }
        Ok(())
    }

    fn open_span(&mut self, template: &SpanTemplate) -> Result<(), Self::Error> {
        template.write_start(&mut self.writer)
    }

    fn close_span(&mut self, template: &SpanTemplate) -> Result<(), Self::Error> {
        template.write_end(&mut self.writer)
    }
}
