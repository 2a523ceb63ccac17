use sysinfo::Signal;

/// A signal the user can pick from the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: Signal,
}

/// Signals offered by the overlay, in display order.
pub const SIGNAL_LIST: &[SignalDescriptor] = &[
    SignalDescriptor { name: "SIGTERM", description: "Terminate process", kind: Signal::Term },
    SignalDescriptor { name: "SIGKILL", description: "Kill process", kind: Signal::Kill },
    SignalDescriptor { name: "SIGINT", description: "Interrupt process", kind: Signal::Interrupt },
    SignalDescriptor { name: "SIGHUP", description: "Hangup", kind: Signal::Hangup },
    SignalDescriptor { name: "SIGQUIT", description: "Quit", kind: Signal::Quit },
    SignalDescriptor { name: "SIGABRT", description: "Abort", kind: Signal::Abort },
    SignalDescriptor { name: "SIGUSR1", description: "User-defined signal 1", kind: Signal::User1 },
    SignalDescriptor { name: "SIGUSR2", description: "User-defined signal 2", kind: Signal::User2 },
    SignalDescriptor { name: "SIGSTOP", description: "Stop process", kind: Signal::Stop },
    SignalDescriptor { name: "SIGCONT", description: "Continue process", kind: Signal::Continue },
];

/// The fixed, ordered set of signals available for this run.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalCatalog {
    entries: Vec<SignalDescriptor>,
}

impl SignalCatalog {
    /// The signal list filtered to what the current platform can deliver.
    pub fn platform() -> Self {
        Self::supported_by(sysinfo::SUPPORTED_SIGNALS)
    }

    /// The signal list filtered to `supported`, keeping display order.
    pub fn supported_by(supported: &[Signal]) -> Self {
        Self {
            entries: SIGNAL_LIST
                .iter()
                .filter(|d| supported.contains(&d.kind))
                .copied()
                .collect(),
        }
    }

    pub fn from_entries(entries: Vec<SignalDescriptor>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SignalDescriptor> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignalDescriptor> {
        self.entries.iter()
    }
}
