use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::ui::coordinator::GaugeSpec;
use crate::ui::theme::Theme;

pub fn render_gauge(frame: &mut Frame, area: Rect, spec: &GaugeSpec, t: &Theme) {
    let block = Block::default()
        .title(Span::styled(spec.title.clone(), t.header_style()))
        .borders(Borders::ALL)
        .border_style(t.border_style());

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(
            Style::default()
                .fg(t.band_color(spec.band))
                .add_modifier(Modifier::BOLD),
        )
        .ratio((f64::from(spec.percent) / 100.0).clamp(0.0, 1.0))
        .label(Span::styled(
            spec.label.clone(),
            Style::default().fg(t.text_primary),
        ));

    frame.render_widget(gauge, area);
}
