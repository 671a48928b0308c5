use crate::util::unicode;

/// Single-line text buffer with a byte-offset cursor on grapheme boundaries.
/// Backs both the new-task input row and the edit prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    cursor: usize,
}

impl TextField {
    /// A field holding `text` with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        TextField {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Cursor position in terminal cells
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.buffer, self.cursor)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; line breaks and tabs become spaces
    pub fn insert_str(&mut self, text: &str) {
        let clean: String = text
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
            .collect();
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    /// Delete from the start of the previous word to the cursor
    pub fn delete_word_back(&mut self) {
        let start = unicode::word_boundary_left(&self.buffer, self.cursor);
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn word_left(&mut self) {
        self.cursor = unicode::word_boundary_left(&self.buffer, self.cursor);
    }

    pub fn word_right(&mut self) {
        self.cursor = unicode::word_boundary_right(&self.buffer, self.cursor);
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_cursor_moves() {
        let mut field = TextField::default();
        for c in "milk".chars() {
            field.insert_char(c);
        }
        field.home();
        for c in "Buy ".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.text(), "Buy milk");
        assert_eq!(field.cursor(), 4);
        field.end();
        field.backspace();
        assert_eq!(field.text(), "Buy mil");
    }

    #[test]
    fn test_edits_respect_graphemes() {
        let mut field = TextField::with_text("tea🍵");
        assert_eq!(field.cursor_col(), 5);
        field.backspace();
        assert_eq!(field.text(), "tea");
        field.move_left();
        field.delete();
        assert_eq!(field.text(), "te");
        field.move_right();
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut field = TextField::default();
        field.insert_str("one\r\ntwo\tthree");
        assert_eq!(field.text(), "one two three");
        assert_eq!(field.cursor(), field.text().len());
    }

    #[test]
    fn test_word_editing() {
        let mut field = TextField::with_text("pay the bills");
        field.delete_word_back();
        assert_eq!(field.text(), "pay the ");
        field.word_left();
        assert_eq!(field.cursor(), 4);
        field.word_right();
        assert_eq!(field.cursor(), 8);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut field = TextField::with_text("Buy milk");
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
    }
}
