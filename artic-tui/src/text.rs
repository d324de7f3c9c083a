//! Display-width aware text fitting for table cells.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Flattens line breaks and runs of whitespace into single spaces.
///
/// Artist strings from the catalog carry embedded newlines
/// ("Georges Seurat\nFrench, 1859-1891").
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates to `max_width` columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

/// Truncates or right-pads with spaces to exactly `width` columns.
pub fn fit(s: &str, width: usize) -> String {
    let mut cell = truncate_to_width(s, width);
    let pad = width.saturating_sub(display_width(&cell));
    cell.extend(std::iter::repeat_n(' ', pad));
    cell
}
