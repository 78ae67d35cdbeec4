use tui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Paragraph, Widget,
    },
};

use crate::{
    app::gauge::{dash_segments, needle_angle, progress_dash_offset, SpeedBand, SpeedGauge},
    constants::*,
};

/// Space left around the ring, in the ring's own units.
const DIAL_PADDING: f64 = 10.0;

/// How far along the ring each drawn line reaches.
const RING_STEP: f64 = 2.0;

/// How thick the ring is drawn, as offsets from [`RING_RADIUS`].
const RING_THICKNESS: [f64; 2] = [0.0, -4.0];

/// A circular gauge: a background ring, a progress ring coloured by speed
/// band, a needle, and the displayed value in the middle.
#[derive(Debug, Clone)]
pub struct SpeedGaugeWidget<'a> {
    gauge: &'a SpeedGauge,
    ring_style: Style,
    needle_style: Style,
    band_styles: [Style; 3],
    label_style: Style,
}

impl<'a> SpeedGaugeWidget<'a> {
    pub fn new(gauge: &'a SpeedGauge) -> Self {
        Self {
            gauge,
            ring_style: Style::default().fg(Color::DarkGray),
            needle_style: Style::default(),
            band_styles: [Style::default(); 3],
            label_style: Style::default(),
        }
    }

    /// The style of the background ring.
    pub fn ring_style(mut self, style: Style) -> Self {
        self.ring_style = style;
        self
    }

    pub fn needle_style(mut self, style: Style) -> Self {
        self.needle_style = style;
        self
    }

    /// The styles of the slow, medium and fast bands, in that order.
    pub fn band_styles(mut self, slow: Style, medium: Style, fast: Style) -> Self {
        self.band_styles = [slow, medium, fast];
        self
    }

    /// The style of the unit and label text.
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    fn band_style(&self, band: SpeedBand) -> Style {
        match band {
            SpeedBand::Slow => self.band_styles[0],
            SpeedBand::Medium => self.band_styles[1],
            SpeedBand::Fast => self.band_styles[2],
        }
    }
}

/// The canvas bounds that keep the dial round in an area `width` by `height`
/// cells, assuming cells twice as tall as they are wide.
pub(crate) fn dial_bounds(width: u16, height: u16) -> ([f64; 2], [f64; 2]) {
    let base = RING_RADIUS + DIAL_PADDING;
    let (width, height) = (f64::from(width.max(1)), f64::from(height.max(1)));

    let (x_half, y_half) = if width >= 2.0 * height {
        (base * width / (2.0 * height), base)
    } else {
        (base, base * 2.0 * height / width)
    };

    ([-x_half, x_half], [-y_half, y_half])
}

/// A point `distance` along a ring of `radius`, starting at 12 o'clock and
/// going clockwise.
pub(crate) fn ring_point(distance: f64, radius: f64) -> (f64, f64) {
    let theta = distance / RING_RADIUS;
    (radius * theta.sin(), radius * theta.cos())
}

fn draw_ring(ctx: &mut Context<'_>, offset: f64, color: Color) {
    for (start, end) in dash_segments(offset) {
        let steps = ((end - start) / RING_STEP).ceil().max(1.0) as usize;

        for radius in RING_THICKNESS.map(|delta| RING_RADIUS + delta) {
            for i in 0..steps {
                let from = start + (end - start) * i as f64 / steps as f64;
                let to = start + (end - start) * (i + 1) as f64 / steps as f64;

                let (x1, y1) = ring_point(from, radius);
                let (x2, y2) = ring_point(to, radius);
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
            }
        }
    }
}

fn draw_needle(ctx: &mut Context<'_>, percentage: f64, color: Color) {
    let angle = needle_angle(percentage).to_radians();
    let length = RING_RADIUS * 0.7;

    ctx.draw(&CanvasLine::new(
        0.0,
        0.0,
        length * angle.sin(),
        length * angle.cos(),
        color,
    ));
}

impl Widget for SpeedGaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 1 {
            return;
        }

        let percentage = self.gauge.percentage();
        let band_style = self.band_style(SpeedBand::from_percentage(percentage));

        // The last row holds the label.
        let dial = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        let label_row = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };

        if dial.height >= 3 {
            let (x_bounds, y_bounds) = dial_bounds(dial.width, dial.height);
            let ring_colour = self.ring_style.fg.unwrap_or(Color::DarkGray);
            let band_colour = band_style.fg.unwrap_or(Color::Reset);
            let needle_colour = self.needle_style.fg.unwrap_or(Color::Reset);

            Canvas::default()
                .marker(Marker::Braille)
                .x_bounds(x_bounds)
                .y_bounds(y_bounds)
                .paint(|ctx| {
                    draw_ring(ctx, RING_GAP, ring_colour);
                    ctx.layer();
                    draw_ring(ctx, progress_dash_offset(percentage), band_colour);
                    ctx.layer();
                    draw_needle(ctx, percentage, needle_colour);
                })
                .render(dial, buf);
        }

        let value_row = Rect {
            y: dial.y + dial.height / 2,
            height: 1,
            ..dial
        };
        if dial.height > 0 {
            Paragraph::new(Line::styled(
                format!("{:.1}", self.gauge.displayed()),
                band_style,
            ))
            .alignment(Alignment::Center)
            .render(value_row, buf);
        }

        if value_row.y + 1 < dial.bottom() {
            Paragraph::new(Line::styled(self.gauge.unit_label(), self.label_style))
                .alignment(Alignment::Center)
                .render(
                    Rect {
                        y: value_row.y + 1,
                        ..value_row
                    },
                    buf,
                );
        }

        Paragraph::new(Line::styled(self.gauge.label(), self.label_style))
            .alignment(Alignment::Center)
            .render(label_row, buf);
    }
}
