use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: char = '\u{2026}';

/// Terminal cells taken by `s`
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Clip `s` to at most `cells` columns. Clipped text ends in `…`; a wide
/// grapheme that would straddle the edge is dropped whole.
pub fn truncate_to_width(s: &str, cells: usize) -> String {
    if display_width(s) <= cells {
        return s.to_string();
    }
    let Some(room) = cells.checked_sub(1) else {
        return String::new();
    };
    let mut used = 0;
    let mut out: String = s
        .graphemes(true)
        .take_while(|g| {
            used += g.width();
            used <= room
        })
        .collect();
    out.push(ELLIPSIS);
    out
}

/// Clip or right-pad with spaces to exactly `cells` columns
pub fn fit_to_width(s: &str, cells: usize) -> String {
    let clipped = truncate_to_width(s, cells);
    let pad = cells.saturating_sub(display_width(&clipped));
    format!("{}{}", clipped, " ".repeat(pad))
}
