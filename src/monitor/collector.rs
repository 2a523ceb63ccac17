use sysinfo::{Pid, ProcessStatus, ProcessesToUpdate, Signal, System};

use crate::error::{CollectError, DeliveryError};
use crate::models::{CoreLoad, MemorySummary, ProcessSnapshot};

use super::{MetricSource, ProcessSource, SignalSender};

/// Responsible for collecting system and process data.
/// Single Responsibility: only gathers data and delivers signals, no analysis.
pub struct SystemCollector {
    sys: System,
}

impl SystemCollector {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        // CPU usage is a delta between two samples
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu_usage();
        Self { sys }
    }
}

impl Default for SystemCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for SystemCollector {
    fn core_loads(&mut self) -> Result<Vec<CoreLoad>, CollectError> {
        self.sys.refresh_cpu_usage();
        let loads: Vec<CoreLoad> = self
            .sys
            .cpus()
            .iter()
            .enumerate()
            .map(|(core, cpu)| CoreLoad {
                core,
                percent: cpu.cpu_usage().clamp(0.0, 100.0),
            })
            .collect();

        if loads.is_empty() {
            return Err(CollectError::NoCpuData);
        }
        Ok(loads)
    }

    fn memory_info(&mut self) -> Result<MemorySummary, CollectError> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(CollectError::MemoryUnavailable);
        }
        Ok(MemorySummary::new(
            self.sys.used_memory(),
            total,
            self.sys.available_memory(),
        ))
    }
}

impl ProcessSource for SystemCollector {
    fn list_processes(&mut self) -> Result<Vec<ProcessSnapshot>, CollectError> {
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        if self.sys.processes().is_empty() {
            return Err(CollectError::NoProcesses);
        }

        let total_memory = self.sys.total_memory();
        let mut processes: Vec<ProcessSnapshot> = self
            .sys
            .processes()
            .iter()
            .filter_map(|(pid, proc_info)| {
                let name = proc_info.name().to_string_lossy().to_string();
                if name.is_empty() {
                    return None;
                }
                Some(ProcessSnapshot {
                    pid: pid.as_u32(),
                    name,
                    cpu_percent: proc_info.cpu_usage(),
                    mem_percent: if total_memory > 0 {
                        (proc_info.memory() as f32 / total_memory as f32) * 100.0
                    } else {
                        0.0
                    },
                    status: status_label(proc_info.status()).to_string(),
                })
            })
            .collect();

        // sysinfo hands back a hash map; pid order keeps rows from jumping between ticks
        processes.sort_by_key(|p| p.pid);
        Ok(processes)
    }
}

impl SignalSender for SystemCollector {
    fn send_signal(&mut self, pid: u32, signal: Signal) -> Result<(), DeliveryError> {
        let process = self
            .sys
            .process(Pid::from_u32(pid))
            .ok_or(DeliveryError::ProcessGone { pid })?;

        match process.kill_with(signal) {
            Some(true) => Ok(()),
            Some(false) => Err(DeliveryError::Rejected { pid, signal }),
            None => Err(DeliveryError::Unsupported { signal }),
        }
    }
}

fn status_label(status: ProcessStatus) -> &'static str {
    match status {
        ProcessStatus::Run => "Running",
        ProcessStatus::Sleep | ProcessStatus::Idle => "Sleeping",
        ProcessStatus::Stop => "Stopped",
        ProcessStatus::Zombie => "Zombie",
        ProcessStatus::Dead => "Dead",
        ProcessStatus::Tracing => "Tracing",
        ProcessStatus::UninterruptibleDiskSleep => "DiskSleep",
        _ => "Unknown",
    }
}
