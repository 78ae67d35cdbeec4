use tui::{
    layout::Rect,
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{notification::NotificationKind, App},
    canvas::{drawing_utils::widget_block, Painter},
};

impl Painter {
    /// Draws the current notification, if any, as a popup in the top right
    /// corner of `draw_loc`.
    pub fn draw_notification(&self, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
        let Some(notification) = app.speed_test.notification() else {
            return;
        };

        let (title, style) = match notification.kind() {
            NotificationKind::Success => (" Done ", self.styles.success_style),
            NotificationKind::Error => (" Error ", self.styles.error_style),
        };

        let message = notification.message();
        let width = u16::try_from(message.width() + 4)
            .unwrap_or(u16::MAX)
            .min(draw_loc.width);
        let height = 3.min(draw_loc.height);
        if width < 3 || height < 3 {
            return;
        }

        let popup = Rect {
            x: draw_loc.right() - width,
            y: draw_loc.y,
            width,
            height,
        };

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(Line::styled(format!(" {message}"), style))
                .block(widget_block(title, style, style)),
            popup,
        );
    }
}
