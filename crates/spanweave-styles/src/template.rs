use smol_str::SmolStr;
use std::fmt::{self, Write};

/// A resolved rendering strategy for one annotation span.
///
/// Each variant writes a start marker and a matching end marker. Markers are
/// inline `<span>` elements carrying at most a `class` attribute (the label
/// with whitespace removed) and a `style` attribute with semicolon-joined
/// `property:value` declarations in the order the variant fixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanTemplate {
    /// Solid background color, optionally bold.
    Background {
        class: SmolStr,
        color: SmolStr,
        bold: bool,
    },
    /// Colored bottom border under the content.
    Underline { class: SmolStr, color: SmolStr },
    /// Bordered box followed by a trailing colored badge showing the label
    /// in upper case.
    LabeledBox {
        class: SmolStr,
        label: SmolStr,
        border: SmolStr,
        badge: SmolStr,
    },
    /// Italic monospaced content.
    Monospace { class: SmolStr },
}

impl SpanTemplate {
    pub fn class(&self) -> &str {
        match self {
            SpanTemplate::Background { class, .. }
            | SpanTemplate::Underline { class, .. }
            | SpanTemplate::LabeledBox { class, .. }
            | SpanTemplate::Monospace { class } => class,
        }
    }

    pub fn write_start<W: Write>(&self, w: &mut W) -> fmt::Result {
        match self {
            SpanTemplate::Background { class, color, bold } => {
                w.write_str("<span class=\"")?;
                write_attr(w, class)?;
                write!(w, "\" style=\"background-color:{color}")?;
                if *bold {
                    w.write_str(";font-weight:bold")?;
                }
                w.write_str("\">")
            }
            SpanTemplate::Underline { class, color } => {
                w.write_str("<span class=\"")?;
                write_attr(w, class)?;
                write!(w, "\" style=\"border-bottom:2px solid {color}\">")
            }
            SpanTemplate::LabeledBox { class, border, .. } => {
                w.write_str("<span class=\"")?;
                write_attr(w, class)?;
                write!(w, "\" style=\"border:1px solid {border}\">")
            }
            SpanTemplate::Monospace { class } => {
                w.write_str("<span class=\"")?;
                write_attr(w, class)?;
                w.write_str("\" style=\"font-family:monospace;font-style:italic\">")
            }
        }
    }

    pub fn write_end<W: Write>(&self, w: &mut W) -> fmt::Result {
        match self {
            SpanTemplate::LabeledBox {
                class,
                label,
                badge,
                ..
            } => {
                w.write_str("</span><span class=\"")?;
                write_attr(w, class)?;
                write!(w, "Badge\" style=\"background-color:{badge}\">")?;
                for c in label.chars() {
                    for up in c.to_uppercase() {
                        write_text_char(w, up)?;
                    }
                }
                w.write_str("</span>")
            }
            _ => w.write_str("</span>"),
        }
    }
}

fn write_attr<W: Write>(w: &mut W, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => w.write_str("&amp;")?,
            '<' => w.write_str("&lt;")?,
            '>' => w.write_str("&gt;")?,
            '"' => w.write_str("&quot;")?,
            _ => w.write_char(c)?,
        }
    }
    Ok(())
}

fn write_text_char<W: Write>(w: &mut W, c: char) -> fmt::Result {
    match c {
        '&' => w.write_str("&amp;"),
        '<' => w.write_str("&lt;"),
        '>' => w.write_str("&gt;"),
        '"' => w.write_str("&quot;"),
        '\'' => w.write_str("&#39;"),
        _ => w.write_char(c),
    }
}
