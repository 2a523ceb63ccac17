//! Renderer module: paints composed widgets onto a ratatui frame.
//!
//! - `gauges`: Core and memory gauges
//! - `processes`: Scrolling process table
//! - `overlays`: Signal picker anchored to the table
//! - `helpers`: Layout and placement math

mod gauges;
pub mod helpers;
mod overlays;
mod processes;

use ratatui::Frame;

use super::coordinator::Widget;
use super::theme::Theme;

use helpers::DashboardLayout;

/// Paint `widgets` in list order, so later widgets land on top.
pub fn draw(frame: &mut Frame, widgets: &[Widget], t: &Theme, cores_per_row: usize) {
    let core_count = widgets
        .iter()
        .filter(|w| matches!(w, Widget::CoreGauge(_)))
        .count();
    let layout = DashboardLayout::compute(frame.area(), core_count, cores_per_row);

    let mut cells = layout.cores.iter();
    let mut table_offset = 0;

    for widget in widgets {
        match widget {
            Widget::CoreGauge(spec) => {
                if let Some(cell) = cells.next() {
                    gauges::render_gauge(frame, *cell, spec, t);
                }
            }
            Widget::MemoryGauge(spec) => gauges::render_gauge(frame, layout.memory, spec, t),
            Widget::ProcessTable(spec) => {
                table_offset = processes::render_process_table(frame, layout.table, spec, t);
            }
            Widget::SignalOverlay(spec) => {
                overlays::render_signal_overlay(frame, layout.table, table_offset, spec, t)
            }
        }
    }
}
