use serde::{Deserialize, Serialize};

/// Byte range into the generated text.
///
/// `start` is inclusive, `end` exclusive. Offsets always fall on `char`
/// boundaries because they come from regex matches over a `&str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Generated text with a line index, used to turn byte offsets into
/// human-readable positions for diagnostics.
#[derive(Debug, Clone)]
pub struct SourceFile<'src> {
    pub text: &'src str,
    /// Cached line start byte offsets for fast line lookup.
    line_starts: Vec<usize>,
}

impl<'src> SourceFile<'src> {
    /// Index the given text.
    pub fn new(text: &'src str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    /// 1-based `(line, column)` of a byte offset. Offsets past the end clamp
    /// to the last position. Columns count characters, not bytes.
    pub fn line_col(&self, offset: usize) -> (u32, u32) {
        let offset = offset.min(self.text.len());
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let start = self.line_starts[idx];
        let col = self
            .text
            .get(start..offset)
            .map_or(offset - start, |s| s.chars().count());
        (idx as u32 + 1, col as u32 + 1)
    }
}
