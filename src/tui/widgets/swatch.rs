use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::color::Rgba;

/// Flat fill of `color` with `text` drawn in a contrasting color
pub fn swatch(text: &str, color: Rgba, width: u16) -> Paragraph<'static> {
    let style = fill_style(color);

    // One column of padding on each side
    let text = truncate(text, width.saturating_sub(2) as usize);

    Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Left)
        .block(Block::default().style(style).padding(Padding::horizontal(1)))
}

/// Background of `color`, foreground that stays readable on it
pub fn fill_style(color: Rgba) -> Style {
    Style::default()
        .bg(color.to_color())
        .fg(color.contrasting_text().to_color())
}

/// Cut `text` to at most `max` display columns, marking the cut with "…"
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
