//! Terminal ownership: raw mode, alternate screen, and the paint sink.

use std::io::{self, Stdout};

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use super::coordinator::Widget;
use super::renderer;
use super::theme::Theme;

/// Where the event loop paints each frame.
///
/// Dropping the sink releases whatever it holds; the loop drops it exactly
/// once on every exit path.
pub trait RenderSink {
    fn paint(&mut self, widgets: &[Widget]) -> io::Result<()>;
}

/// Raw mode plus alternate screen, restored on drop.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Constructed before the screen switch so a failure below still
        // leaves raw mode through Drop.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

/// Paints widgets through ratatui onto any backend.
pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
    theme: Theme,
    cores_per_row: usize,
    // Declared last: the terminal flushes before the screen is restored
    _guard: Option<TerminalGuard>,
}

impl TerminalSink<CrosstermBackend<Stdout>> {
    /// Take over the controlling terminal.
    pub fn enter(cores_per_row: usize) -> io::Result<Self> {
        let guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            theme: Theme::default(),
            cores_per_row,
            _guard: Some(guard),
        })
    }
}

impl<B: Backend> TerminalSink<B> {
    /// Sink over an arbitrary backend, without touching terminal modes.
    pub fn with_backend(backend: B, cores_per_row: usize) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            theme: Theme::default(),
            cores_per_row,
            _guard: None,
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> RenderSink for TerminalSink<B> {
    fn paint(&mut self, widgets: &[Widget]) -> io::Result<()> {
        let theme = &self.theme;
        let per_row = self.cores_per_row;
        self.terminal
            .draw(|frame| renderer::draw(frame, widgets, theme, per_row))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::coordinator::{Band, GaugeSpec, ProcessListSpec};
    use ratatui::backend::TestBackend;

    #[test]
    fn test_backend_sink_paints_frames() {
        let mut sink = TerminalSink::with_backend(TestBackend::new(60, 16), 2).unwrap();
        let widgets = vec![
            Widget::MemoryGauge(GaugeSpec {
                title: "Memory Usage (free: 1.0 GiB)".to_string(),
                label: "1.0 GiB / 2.0 GiB (50.0%)".to_string(),
                percent: 50.0,
                band: Band::Moderate,
            }),
            Widget::ProcessTable(ProcessListSpec {
                title: "Processes".to_string(),
                rows: vec!["[1] init".to_string()],
                selected: Some(0),
                footer: None,
            }),
        ];
        sink.paint(&widgets).unwrap();

        let buf = sink.backend().buffer();
        let top: String = (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(top.contains("Memory Usage"));

        // Repainting with fewer widgets still succeeds
        sink.paint(&widgets[..1]).unwrap();
    }
}
