/// Load of one logical core for the current refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreLoad {
    /// Core index, ascending from 0.
    pub core: usize,
    /// Utilization, 0-100.
    pub percent: f32,
}

/// System-wide memory snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemorySummary {
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub available_bytes: u64,
    /// 0-100
    pub used_percent: f32,
}

impl MemorySummary {
    /// Build a summary, deriving `used_percent` from used/total.
    pub fn new(used_bytes: u64, total_bytes: u64, available_bytes: u64) -> Self {
        let used_percent = if total_bytes == 0 {
            0.0
        } else {
            ((used_bytes as f64 / total_bytes as f64) * 100.0).clamp(0.0, 100.0) as f32
        };
        Self {
            used_bytes,
            total_bytes,
            available_bytes,
            used_percent,
        }
    }
}
