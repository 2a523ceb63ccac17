use std::time::{Duration, Instant};

use crate::models::{CoreLoad, MemorySummary, ProcessSnapshot, ProcessTable};

// ── Navigation ────────────────────────────────────────────────────

/// Selected row of the process table.
///
/// Holds the table length it was last reconciled with so moves can clamp
/// without seeing the table. No wraparound in either direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    selected: usize,
    len: usize,
}

impl NavigationState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Adopt a new table length, pulling the selection back inside it.
    pub fn reconcile(&mut self, new_len: usize) {
        self.len = new_len;
        if self.selected >= new_len {
            self.selected = new_len.saturating_sub(1);
        }
    }
}

// ── Signal menu ───────────────────────────────────────────────────

/// Modal signal overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignalMenuState {
    #[default]
    Hidden,
    Open {
        /// Table row the overlay is anchored to.
        anchor_row: usize,
        /// Highlighted catalog entry.
        selected: usize,
        /// Pid under the anchor row when the menu opened.
        target: Option<u32>,
    },
}

/// What the user confirmed: a catalog index aimed at a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuChoice {
    pub anchor_row: usize,
    pub selected: usize,
    pub target: Option<u32>,
}

impl SignalMenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, SignalMenuState::Open { .. })
    }

    /// Open at `anchor_row` with the first entry highlighted.
    /// Returns `false` (and changes nothing) if already open.
    pub fn open(&mut self, anchor_row: usize, target: Option<u32>) -> bool {
        if self.is_open() {
            return false;
        }
        *self = SignalMenuState::Open {
            anchor_row,
            selected: 0,
            target,
        };
        true
    }

    pub fn cancel(&mut self) {
        *self = SignalMenuState::Hidden;
    }

    pub fn move_down(&mut self, catalog_len: usize) {
        if let SignalMenuState::Open { selected, .. } = self {
            if *selected + 1 < catalog_len {
                *selected += 1;
            }
        }
    }

    pub fn move_up(&mut self) {
        if let SignalMenuState::Open { selected, .. } = self {
            *selected = selected.saturating_sub(1);
        }
    }

    /// Close the menu and hand back what was selected, if it was open.
    pub fn confirm(&mut self) -> Option<MenuChoice> {
        let choice = match *self {
            SignalMenuState::Open {
                anchor_row,
                selected,
                target,
            } => Some(MenuChoice {
                anchor_row,
                selected,
                target,
            }),
            SignalMenuState::Hidden => None,
        };
        *self = SignalMenuState::Hidden;
        choice
    }
}

// ── Dashboard ─────────────────────────────────────────────────────

/// Everything the renderer needs for one frame.
///
/// Metrics and the process table are replaced on every refresh; navigation
/// and the menu survive refreshes and only change on input (plus the
/// selection clamp in `apply_refresh`).
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub cores: Vec<CoreLoad>,
    pub memory: MemorySummary,
    pub processes: ProcessTable,
    pub navigation: NavigationState,
    pub menu: SignalMenuState,
    /// Transient status message with timestamp
    pub status_message: Option<(String, Instant)>,
    pub tick_count: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a refresh cycle's data. `processes == None` keeps the
    /// previous table (the process source failed this tick).
    pub fn apply_refresh(
        &mut self,
        cores: Vec<CoreLoad>,
        memory: MemorySummary,
        processes: Option<Vec<ProcessSnapshot>>,
    ) {
        self.cores = cores;
        self.memory = memory;
        if let Some(rows) = processes {
            self.processes = ProcessTable::new(rows);
        }
        self.navigation.reconcile(self.processes.len());
        self.tick_count += 1;
    }

    pub fn selected_process(&self) -> Option<&ProcessSnapshot> {
        self.processes.get(self.navigation.selected())
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Drop the status message once it is older than `ttl`.
    pub fn expire_status(&mut self, ttl: Duration) {
        if let Some((_, at)) = &self.status_message {
            if at.elapsed() >= ttl {
                self.status_message = None;
            }
        }
    }
}
