use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max_cells` cells, ending in `…` when anything was dropped
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Keep the end of `s` within `max_cells`, starting with `…` when the front was dropped
pub fn tail_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut start = s.len();
    for (i, g) in s.grapheme_indices(true).rev() {
        let gw = UnicodeWidthStr::width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        start = i;
    }
    format!("\u{2026}{}", &s[start..])
}

/// Byte offset of the grapheme after the one at `offset`, or None at the end
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset >= s.len() {
        return None;
    }
    let step = s[offset..].graphemes(true).next().map_or(0, str::len);
    Some(offset + step)
}

/// Byte offset of the grapheme before `offset`, or None at the start
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    s[..offset].grapheme_indices(true).last().map(|(i, _)| i)
}

/// Terminal column of the byte `offset`
pub fn byte_offset_to_display_col(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Start of the word left of `offset` (skips trailing whitespace first)
pub fn word_boundary_left(s: &str, offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..offset.min(s.len())].grapheme_indices(true).collect();
    let mut idx = graphemes.len();
    while idx > 0 && is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(0, |(i, _)| *i)
}

/// Start of the next word right of `offset`, or the end of `s`
pub fn word_boundary_right(s: &str, offset: usize) -> usize {
    if offset >= s.len() {
        return s.len();
    }
    let mut in_word = true;
    for (i, g) in s[offset..].grapheme_indices(true) {
        if is_blank(g) {
            in_word = false;
        } else if !in_word {
            return offset + i;
        }
    }
    s.len()
}
