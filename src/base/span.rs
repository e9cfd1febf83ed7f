//! Byte offsets and their conversion to line/column coordinates.

pub use text_size::{TextRange, TextSize};

/// A 0-indexed line/column pair; `col` counts characters, not bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets to line/column coordinates.
///
/// Lines end at `\n`, `\r\n`, a lone `\r`, or the separators U+2028 and
/// U+2029, matching the line terminators of the script grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    text: String,
    /// Offset of the first byte of every line
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        let mut chars = text.char_indices().peekable();
        while let Some((idx, c)) = chars.next() {
            let end = match c {
                '\r' if matches!(chars.peek(), Some((_, '\n'))) => continue,
                '\n' | '\r' | '\u{2028}' | '\u{2029}' => idx + c.len_utf8(),
                _ => continue,
            };
            line_starts.push(TextSize::new(end as u32));
        }
        Self {
            text: text.to_string(),
            line_starts,
        }
    }

    /// Number of lines, counting a trailing empty line
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line and column of `offset`; offsets past the end clamp to the end
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(TextSize::of(self.text.as_str()));
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let start = usize::from(self.line_starts[line]);
        let mut end = usize::from(offset);
        while !self.text.is_char_boundary(end) {
            end -= 1;
        }
        let col = self.text[start..end].chars().count();
        LineCol {
            line: line as u32,
            col: col as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_col(text: &str, offset: u32) -> (u32, u32) {
        let lc = LineIndex::new(text).line_col(TextSize::new(offset));
        (lc.line, lc.col)
    }

    #[test]
    fn test_first_line() {
        assert_eq!(line_col("let x = 1;", 0), (0, 0));
        assert_eq!(line_col("let x = 1;", 4), (0, 4));
    }

    #[test]
    fn test_line_terminators() {
        let text = "a\nb\r\nc\rd\u{2028}e";
        assert_eq!(LineIndex::new(text).line_count(), 5);
        assert_eq!(line_col(text, 2), (1, 0));
        assert_eq!(line_col(text, 5), (2, 0));
        assert_eq!(line_col(text, 7), (3, 0));
        assert_eq!(line_col(text, 11), (4, 0));
    }

    #[test]
    fn test_columns_count_characters() {
        // 'é' is two bytes, '😀' four
        let text = "'é😀' + x";
        assert_eq!(line_col(text, 10), (0, 6));
    }

    #[test]
    fn test_offset_past_end_clamps() {
        assert_eq!(line_col("ab\ncd", 99), (1, 2));
    }
}
