//! Error types for the collectors and the dashboard loop.

use std::io;

use sysinfo::Signal;
use thiserror::Error;

/// A metric or process source could not produce data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectError {
    #[error("no per-core CPU data available")]
    NoCpuData,

    #[error("memory information unavailable")]
    MemoryUnavailable,

    #[error("process table could not be read")]
    NoProcesses,
}

/// A signal could not be delivered. Never fatal to the dashboard.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("process {pid} not found")]
    ProcessGone { pid: u32 },

    #[error("signal {signal:?} is not supported on this platform")]
    Unsupported { signal: Signal },

    #[error("sending {signal:?} to process {pid} was rejected")]
    Rejected { pid: u32, signal: Signal },
}

/// Errors that end the dashboard loop.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("refresh failed: {0}")]
    Collect(#[from] CollectError),

    #[error("terminal output failed: {0}")]
    Terminal(#[source] io::Error),

    #[error("terminal input failed: {0}")]
    Input(#[source] io::Error),
}
