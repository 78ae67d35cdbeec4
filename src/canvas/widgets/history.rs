use time::{macros::format_description, OffsetDateTime};
use tui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    app::{speed_test::TestResult, App},
    canvas::{drawing_utils::widget_block, Painter},
};

/// Formats a timestamp as a 12-hour time of day, like `3:04:05 PM`.
pub(crate) fn format_time_of_day(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(format_description!(
            "[hour repr:12 padding:none]:[minute]:[second] [period]"
        ))
        .unwrap_or_default()
}

impl Painter {
    /// Draws the list of recent results, newest first.
    pub fn draw_history(&self, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
        let lines: Vec<Line<'_>> = app
            .speed_test
            .history()
            .iter()
            .map(|result| self.history_row(result))
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(widget_block(
                " Recent Tests ",
                self.styles.border_style,
                self.styles.highlight_style,
            )),
            draw_loc,
        );
    }

    fn history_row(&self, result: &TestResult) -> Line<'static> {
        let text = self.styles.text_style;
        let value = self.styles.highlight_style;

        Line::from(vec![
            Span::styled("Download: ", text),
            Span::styled(format!("{} Mbps", result.download()), value),
            Span::styled("  Upload: ", text),
            Span::styled(format!("{} Mbps", result.upload()), value),
            Span::styled("  Ping: ", text),
            Span::styled(format!("{} ms", result.ping()), value),
            Span::styled(
                format!("  {}", format_time_of_day(result.timestamp())),
                text,
            ),
        ])
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn time_of_day() {
        assert_eq!(
            format_time_of_day(datetime!(2024-03-01 15:04:05 UTC)),
            "3:04:05 PM"
        );
        assert_eq!(
            format_time_of_day(datetime!(2024-03-01 00:30:00 UTC)),
            "12:30:00 AM"
        );
        assert_eq!(
            format_time_of_day(datetime!(2024-03-01 11:59:59 +02:00)),
            "11:59:59 AM"
        );
    }
}
