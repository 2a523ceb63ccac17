//! Turns a `DashboardState` into the ordered list of widgets to paint.
//!
//! Order is fixed: core gauges (ascending core index), the memory gauge, the
//! process table, then the signal overlay when the menu is open. The overlay
//! comes last so it paints above the table.

use crate::constants::{OVERLAY_NAME_MAX, USAGE_HIGH_PCT, USAGE_MODERATE_PCT, USAGE_URGENT_PCT};
use crate::models::{CoreLoad, MemorySummary, ProcessSnapshot, SignalCatalog};
use crate::utils::truncate_str;

use super::state::{DashboardState, SignalMenuState};

pub const PROCESS_TABLE_TITLE: &str = "Processes (↑/↓ to navigate)";

/// Usage band of a gauge, picked highest threshold first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Nominal,
    Moderate,
    High,
    Urgent,
}

impl Band {
    pub fn for_percent(percent: f32) -> Self {
        if percent >= USAGE_URGENT_PCT {
            Band::Urgent
        } else if percent >= USAGE_HIGH_PCT {
            Band::High
        } else if percent >= USAGE_MODERATE_PCT {
            Band::Moderate
        } else {
            Band::Nominal
        }
    }
}

/// A percent bar with a title and an inline label.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    pub title: String,
    pub label: String,
    pub percent: f32,
    pub band: Band,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessListSpec {
    pub title: String,
    pub rows: Vec<String>,
    /// `None` when the table is empty.
    pub selected: Option<usize>,
    /// Status message shown on the bottom border.
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySpec {
    pub title: String,
    pub items: Vec<String>,
    pub selected: usize,
    /// Table row the overlay is positioned against.
    pub anchor_row: usize,
}

/// One drawable element of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    CoreGauge(GaugeSpec),
    MemoryGauge(GaugeSpec),
    ProcessTable(ProcessListSpec),
    SignalOverlay(OverlaySpec),
}

pub struct RenderCoordinator<'a> {
    catalog: &'a SignalCatalog,
}

impl<'a> RenderCoordinator<'a> {
    pub fn new(catalog: &'a SignalCatalog) -> Self {
        Self { catalog }
    }

    pub fn compose(&self, state: &DashboardState) -> Vec<Widget> {
        let mut widgets: Vec<Widget> = state
            .cores
            .iter()
            .map(|load| Widget::CoreGauge(core_gauge(load)))
            .collect();

        widgets.push(Widget::MemoryGauge(memory_gauge(&state.memory)));
        widgets.push(Widget::ProcessTable(self.process_list(state)));

        if let SignalMenuState::Open {
            anchor_row,
            selected,
            target,
        } = state.menu
        {
            let target = target.and_then(|pid| state.processes.find(pid));
            widgets.push(Widget::SignalOverlay(OverlaySpec {
                title: overlay_title(target),
                items: self
                    .catalog
                    .iter()
                    .map(|d| format!("{:<8} {}", d.name, d.description))
                    .collect(),
                selected,
                anchor_row,
            }));
        }

        widgets
    }

    fn process_list(&self, state: &DashboardState) -> ProcessListSpec {
        ProcessListSpec {
            title: PROCESS_TABLE_TITLE.to_string(),
            rows: state.processes.iter().map(process_row).collect(),
            selected: (!state.processes.is_empty()).then(|| state.navigation.selected()),
            footer: state.status_text().map(str::to_string),
        }
    }
}

fn core_gauge(load: &CoreLoad) -> GaugeSpec {
    GaugeSpec {
        title: format!("CPU Core {}", load.core),
        label: format!("{:.1}%", load.percent),
        percent: load.percent,
        band: Band::for_percent(load.percent),
    }
}

fn memory_gauge(memory: &MemorySummary) -> GaugeSpec {
    GaugeSpec {
        title: format!("Memory Usage (free: {})", format_bytes(memory.available_bytes)),
        label: format!(
            "{} / {} ({:.1}%)",
            format_bytes(memory.used_bytes),
            format_bytes(memory.total_bytes),
            memory.used_percent
        ),
        percent: memory.used_percent,
        band: Band::for_percent(memory.used_percent),
    }
}

fn overlay_title(target: Option<&ProcessSnapshot>) -> String {
    match target {
        Some(p) => format!(
            "Send signal to PID {} ({})",
            p.pid,
            truncate_str(&p.name, OVERLAY_NAME_MAX)
        ),
        None => "Send signal".to_string(),
    }
}

/// Fixed one-line rendering of a process row.
pub fn process_row(p: &ProcessSnapshot) -> String {
    format!(
        "[{}] {} (CPU: {:.1}%, Mem: {:.1}%, Status: {})",
        p.pid, p.name, p.cpu_percent, p.mem_percent, p.status
    )
}

/// Formats bytes into human-readable string (B, KiB, ... EiB).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
