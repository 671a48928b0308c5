use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Append blank cells so the spans fill `width`
pub(super) fn pad_to_width(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// The part of `text` to show in a field `width` cells wide, keeping the
/// cell under the cursor free of the `…` marker. Returns the shown text and
/// the cursor's cell offset within it.
pub(super) fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let cursor_col = unicode::byte_offset_to_display_col(text, cursor);
    if unicode::display_width(text) <= width {
        return (text.to_string(), cursor_col);
    }
    // `…` occupies the last cell of the head
    let head = unicode::truncate_to_width(text, width);
    if cursor_col + 1 < unicode::display_width(&head) {
        return (head, cursor_col);
    }
    let tail = unicode::tail_to_width(&text[..cursor], width.saturating_sub(1));
    let cells = unicode::display_width(&tail);
    (tail, cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_clipped() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect_fixed(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect_fixed(60, 20, area), Rect::new(0, 0, 40, 10));
    }

    #[test]
    fn test_padding_fills_row() {
        let mut spans = vec![Span::raw("abc")];
        pad_to_width(&mut spans, 8, Style::default());
        assert_eq!(spans_width(&spans), 8);
        pad_to_width(&mut spans, 4, Style::default());
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn test_visible_window_keeps_cursor_off_ellipsis() {
        let text = "abcdefghij";
        assert_eq!(visible_window(text, 4, 6), ("abcde\u{2026}".to_string(), 4));
        // Cursor would sit on the `…`; scroll so it follows the text instead
        assert_eq!(visible_window(text, 5, 6), ("abcde".to_string(), 5));
        assert_eq!(visible_window(text, 10, 6), ("\u{2026}ghij".to_string(), 5));
        assert_eq!(visible_window("short", 2, 6), ("short".to_string(), 2));
    }
}
