/// Immutable text addressed by character offsets.
///
/// All engine offsets are 0-based character positions. The boundary table is
/// built once so slicing by character range stays O(1) and never lands inside
/// a UTF-8 sequence.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    text: String,
    // byte offset of every char boundary, with text.len() as sentinel
    bounds: Vec<usize>,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        bounds.push(text.len());
        Self { text, bounds }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The half-open character range `lo..hi` as a string slice.
    ///
    /// `lo <= hi <= len` holds for every caller: the partitioner only
    /// produces ranges inside the validated annotation bounds.
    pub(crate) fn slice(&self, lo: usize, hi: usize) -> &str {
        &self.text[self.bounds[lo]..self.bounds[hi]]
    }
}
