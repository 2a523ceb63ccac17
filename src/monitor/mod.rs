//! Data sources consumed by the dashboard loop.
//!
//! The loop only sees these traits; `SystemCollector` implements all three
//! over `sysinfo`, tests substitute fakes.

mod collector;

pub use collector::SystemCollector;

use sysinfo::Signal;

use crate::error::{CollectError, DeliveryError};
use crate::models::{CoreLoad, MemorySummary, ProcessSnapshot};

/// Per-core CPU load and memory usage. Failures are fatal to the loop.
pub trait MetricSource {
    /// Loads ordered by ascending core index.
    fn core_loads(&mut self) -> Result<Vec<CoreLoad>, CollectError>;

    fn memory_info(&mut self) -> Result<MemorySummary, CollectError>;
}

/// Process enumeration. Failures are recoverable.
pub trait ProcessSource {
    /// Processes whose name cannot be resolved are left out.
    fn list_processes(&mut self) -> Result<Vec<ProcessSnapshot>, CollectError>;
}

/// Signal delivery. Failures are recoverable.
pub trait SignalSender {
    fn send_signal(&mut self, pid: u32, signal: Signal) -> Result<(), DeliveryError>;
}
