//! Cursor-aware text buffer backing the query field.
//!
//! Entry names are localized (Vietnamese among them), so all cursor
//! movement works on char boundaries, never raw byte offsets.

/// A single-line input buffer with a byte-offset cursor kept on char
/// boundaries.
#[derive(Debug, Default)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte offset of the char boundary before the cursor.
    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Byte offset of the char boundary after the cursor.
    fn next_boundary(&self) -> usize {
        self.content[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.content.len())
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let start = self.prev_boundary();
            self.content.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            let end = self.next_boundary();
            self.content.drain(self.cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor = self.next_boundary();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// Cursor position in chars (for terminal cursor placement).
    pub fn cursor_chars(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(text: &str) -> InputBuffer {
        let mut buf = InputBuffer::new();
        for c in text.chars() {
            buf.insert_char(c);
        }
        buf
    }

    #[test]
    fn test_insert_and_cursor() {
        let buf = filled("hi");
        assert_eq!(buf.text(), "hi");
        assert_eq!(buf.cursor_chars(), 2);
    }

    #[test]
    fn test_backspace() {
        let mut buf = filled("ab");
        buf.backspace();
        assert_eq!(buf.text(), "a");
        assert_eq!(buf.cursor_chars(), 1);
    }

    #[test]
    fn test_multibyte_editing() {
        // "thần" is all multibyte Vietnamese chars
        let mut buf = filled("thần");
        assert_eq!(buf.cursor_chars(), 4);
        buf.backspace();
        assert_eq!(buf.text(), "thầ");
        buf.move_left();
        buf.delete();
        assert_eq!(buf.text(), "th");
    }

    #[test]
    fn test_movement_clamps_at_edges() {
        let mut buf = filled("abc");
        buf.move_home();
        buf.move_left();
        assert_eq!(buf.cursor_chars(), 0);
        buf.move_end();
        buf.move_right();
        assert_eq!(buf.cursor_chars(), 3);
    }

    #[test]
    fn test_delete_mid_string() {
        let mut buf = filled("abc");
        buf.move_home();
        buf.move_right();
        buf.delete();
        assert_eq!(buf.text(), "ac");
    }

    #[test]
    fn test_clear() {
        let mut buf = filled("query");
        buf.clear();
        assert!(buf.text().is_empty());
        assert_eq!(buf.cursor_chars(), 0);
    }
}
