/// One process as seen by a single refresh cycle.
/// Immutable snapshot of process state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSnapshot {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub mem_percent: f32,
    pub status: String,
}

/// The process list of the current refresh cycle, in the order the
/// process source returned it. Never re-sorted here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessTable {
    rows: Vec<ProcessSnapshot>,
}

impl ProcessTable {
    pub fn new(rows: Vec<ProcessSnapshot>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&ProcessSnapshot> {
        self.rows.get(row)
    }

    /// Find a process by pid, wherever it sits in the table.
    pub fn find(&self, pid: u32) -> Option<&ProcessSnapshot> {
        self.rows.iter().find(|p| p.pid == pid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessSnapshot> {
        self.rows.iter()
    }
}
