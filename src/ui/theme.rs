use ratatui::style::{Color, Modifier, Style};

use super::coordinator::Band;

/// Every color the renderer uses, in one struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // ── Brand / Primary ──────────────────────────────────────
    pub accent: Color,
    pub title: Color,

    // ── Text ─────────────────────────────────────────────────
    pub text_primary: Color,

    // ── Gauges ───────────────────────────────────────────────
    pub gauge_nominal: Color,
    pub gauge_moderate: Color,
    pub gauge_high: Color,
    pub gauge_urgent: Color,

    // ── Table selection ──────────────────────────────────────
    pub table_row_selected_bg: Color,

    // ── Borders ──────────────────────────────────────────────
    pub border: Color,
    pub border_highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::terminal()
    }
}

impl Theme {
    /// Named ANSI colors, so the dashboard follows the terminal's palette.
    pub fn terminal() -> Self {
        Self {
            accent: Color::Cyan,
            title: Color::White,
            text_primary: Color::White,
            gauge_nominal: Color::Green,
            gauge_moderate: Color::Magenta,
            gauge_high: Color::Yellow,
            gauge_urgent: Color::Red,
            table_row_selected_bg: Color::DarkGray,
            border: Color::Cyan,
            border_highlight: Color::Yellow,
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_row_normal(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn table_row_selected(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.table_row_selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Gauge color for a usage band.
    pub fn band_color(&self, band: Band) -> Color {
        match band {
            Band::Nominal => self.gauge_nominal,
            Band::Moderate => self.gauge_moderate,
            Band::High => self.gauge_high,
            Band::Urgent => self.gauge_urgent,
        }
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_highlight_style(&self) -> Style {
        Style::default().fg(self.border_highlight)
    }
}
