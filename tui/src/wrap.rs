//! Width-aware text helpers for the page document.
//!
//! Every document line is exactly one terminal row, so text is wrapped here
//! rather than by `Paragraph::wrap`.

use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Greedy word wrap to `width` columns. Words wider than a line are split on
/// grapheme boundaries. Always returns at least one (possibly empty) line.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }
        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        for grapheme in word.graphemes(true) {
            let grapheme_width = grapheme.width();
            if current_width > 0 && current_width + grapheme_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push_str(grapheme);
            current_width += grapheme_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cut `text` to `width` columns, ending in `ellipsis` when anything was dropped.
pub(crate) fn truncate(text: &str, width: usize, ellipsis: &str) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let ellipsis_width = ellipsis.width();
    let (budget, tail) = if width > ellipsis_width {
        (width - ellipsis_width, ellipsis)
    } else {
        (width, "")
    };
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if used + grapheme_width > budget {
            break;
        }
        out.push_str(grapheme);
        used += grapheme_width;
    }
    out.push_str(tail);
    out
}

/// Clip or pad `line` so it is exactly `width` columns wide.
pub(crate) fn fit_line(mut line: Line<'static>, width: usize) -> Line<'static> {
    if line.width() > width {
        let mut used = 0;
        let mut kept = Vec::with_capacity(line.spans.len());
        for span in std::mem::take(&mut line.spans) {
            let span_width = span.width();
            if used + span_width <= width {
                used += span_width;
                kept.push(span);
                continue;
            }
            let mut partial = String::new();
            for grapheme in span.content.graphemes(true) {
                let grapheme_width = grapheme.width();
                if used + grapheme_width > width {
                    break;
                }
                partial.push_str(grapheme);
                used += grapheme_width;
            }
            if !partial.is_empty() {
                kept.push(Span::styled(partial, span.style));
            }
            break;
        }
        line.spans = kept;
    }
    let current = line.width();
    if current < width {
        line.spans.push(Span::raw(" ".repeat(width - current)));
    }
    line
}

/// Leading spaces that center an item `content` wide inside `width`.
pub(crate) fn center_pad(content: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(content) / 2)
}
