//! Code related to drawing.

pub mod components;
mod drawing_utils;
mod widgets;

use tui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{app::App, constants::MAX_HISTORY_ENTRIES, options::Styles};

const HELP_TEXT: &str = "Enter/Space/s: start test   q/Esc: quit";
const TITLE: &str = "SpeedCheck";
const SUBTITLE: &str = "Test your internet connection speed";

/// Handles the canvas' state.
pub struct Painter {
    pub styles: Styles,
}

impl Painter {
    pub fn init(styles: Styles) -> Self {
        Painter { styles }
    }

    /// Draws the whole screen.
    pub fn draw_data(&self, f: &mut Frame<'_>, app: &mut App) {
        let area = f.area();

        let history_len = app.speed_test.history().len();
        let history_height = if history_len == 0 {
            0
        } else {
            // One row per entry, plus borders.
            history_len.min(MAX_HISTORY_ENTRIES) as u16 + 2
        };

        let [header, card, history, help] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(history_height),
                Constraint::Length(1),
            ])
            .areas(area);

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(TITLE, self.styles.highlight_style),
                Span::styled(" - ", self.styles.text_style),
                Span::styled(SUBTITLE, self.styles.text_style),
            ]))
            .alignment(Alignment::Center),
            header,
        );

        self.draw_speed_test(f, app, card);
        if history_height > 0 {
            self.draw_history(f, app, history);
        }

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(HELP_TEXT, self.styles.text_style))),
            help,
        );

        self.draw_notification(f, app, area);
    }
}
