//! Config options around styling.

mod utils;

use std::borrow::Cow;

use serde::Deserialize;
use tui::style::{Color, Modifier, Style};
use utils::set_colour;

use crate::{app::gauge::SpeedBand, options::OptionResult};

#[derive(Clone, Debug, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) struct ColorStr(Cow<'static, str>);

/// Options under `[styles]`.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub(crate) struct StyleConfig {
    /// Gauge colour below a third of the maximum.
    #[serde(alias = "slow_colour")]
    pub(crate) slow_color: Option<ColorStr>,

    /// Gauge colour between a third and two thirds of the maximum.
    #[serde(alias = "medium_colour")]
    pub(crate) medium_color: Option<ColorStr>,

    /// Gauge colour from two thirds of the maximum up.
    #[serde(alias = "fast_colour")]
    pub(crate) fast_color: Option<ColorStr>,

    #[serde(alias = "text_colour")]
    pub(crate) text_color: Option<ColorStr>,

    #[serde(alias = "border_colour")]
    pub(crate) border_color: Option<ColorStr>,

    /// Colour of the action button and other highlighted text.
    #[serde(alias = "highlight_colour")]
    pub(crate) highlight_color: Option<ColorStr>,
}

/// The styles used when drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Styles {
    pub slow_style: Style,
    pub medium_style: Style,
    pub fast_style: Style,
    pub text_style: Style,
    pub border_style: Style,
    pub highlight_style: Style,
    pub success_style: Style,
    pub error_style: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            slow_style: Style::default().fg(Color::Red),
            medium_style: Style::default().fg(Color::Yellow),
            fast_style: Style::default().fg(Color::Green),
            text_style: Style::default().fg(Color::Gray),
            border_style: Style::default().fg(Color::Gray),
            highlight_style: Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
            success_style: Style::default().fg(Color::Green),
            error_style: Style::default().fg(Color::Red),
        }
    }
}

impl Styles {
    /// The default styles, with anything set in `config` applied on top.
    pub(crate) fn new(config: &StyleConfig) -> OptionResult<Self> {
        let mut styles = Self::default();

        set_colour!(styles.slow_style, config, slow_color);
        set_colour!(styles.medium_style, config, medium_color);
        set_colour!(styles.fast_style, config, fast_color);
        set_colour!(styles.text_style, config, text_color);
        set_colour!(styles.border_style, config, border_color);
        set_colour!(styles.highlight_style, config, highlight_color);

        Ok(styles)
    }

    /// The style for a gauge in the given band.
    pub fn band_style(&self, band: SpeedBand) -> Style {
        match band {
            SpeedBand::Slow => self.slow_style,
            SpeedBand::Medium => self.medium_style,
            SpeedBand::Fast => self.fast_style,
        }
    }
}
