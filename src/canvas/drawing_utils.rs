use tui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders},
};
use unicode_width::UnicodeWidthStr;

/// Return a widget block with a title.
pub fn widget_block<'a>(title: &'a str, border_style: Style, title_style: Style) -> Block<'a> {
    Block::default()
        .borders(Borders::all())
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(title, title_style))
}

/// A one-row rect for `text`, horizontally centered in `area` at row `y`.
/// The width is clamped to the area.
pub fn centered_text_rect(area: Rect, text: &str, y: u16) -> Rect {
    let width = u16::try_from(text.width())
        .unwrap_or(u16::MAX)
        .min(area.width);

    Rect {
        x: area.x + (area.width - width) / 2,
        y,
        width,
        height: 1,
    }
}
