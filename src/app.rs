//! Application struct and event loop.
//!
//! Owns the dashboard state and the collectors. Each loop turn services one
//! event, a refresh tick or a key, then repaints.

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::STATUS_MESSAGE_TIMEOUT_SECS;
use crate::error::{CollectError, DashboardError};
use crate::models::SignalCatalog;
use crate::monitor::{MetricSource, ProcessSource, SignalSender};
use crate::ui::state::MenuChoice;
use crate::ui::{DashboardState, InputSource, Key, RenderCoordinator, RenderSink, Widget};

/// Whether the loop keeps going after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Continue,
    Quit,
}

pub struct App<C> {
    state: DashboardState,
    collector: C,
    catalog: SignalCatalog,
    refresh_interval: Duration,
}

impl<C> App<C>
where
    C: MetricSource + ProcessSource + SignalSender,
{
    pub fn new(config: &Config, collector: C, catalog: SignalCatalog) -> Self {
        Self {
            state: DashboardState::new(),
            collector,
            catalog,
            refresh_interval: config.refresh_interval(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Run the main event loop. Returns when the user quits, input ends, or
    /// a fatal error occurs.
    ///
    /// The sink is moved in so it is dropped exactly once on every exit.
    pub async fn run<I, R>(&mut self, mut input: I, mut sink: R) -> Result<(), DashboardError>
    where
        I: InputSource,
        R: RenderSink,
    {
        // First tick completes immediately
        let mut ticker = time::interval(self.refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(interval_ms = self.refresh_interval.as_millis() as u64, "dashboard started");

        loop {
            let turn = tokio::select! {
                _ = ticker.tick() => {
                    self.on_tick()?;
                    Turn::Continue
                }
                key = input.next_key() => match key {
                    Some(Ok(key)) => self.on_key(key),
                    Some(Err(e)) => return Err(DashboardError::Input(e)),
                    None => {
                        debug!("input stream closed");
                        Turn::Quit
                    }
                },
            };

            if turn == Turn::Quit {
                break;
            }

            sink.paint(&self.widgets())
                .map_err(DashboardError::Terminal)?;
        }

        info!("dashboard stopped");
        Ok(())
    }

    // ── Tick-based logic ─────────────────────────────────────────

    /// Refresh metrics and the process table. Metric failures are fatal; a
    /// failed process listing keeps the previous table.
    pub fn on_tick(&mut self) -> Result<(), CollectError> {
        let cores = self.collector.core_loads()?;
        let memory = self.collector.memory_info()?;
        let processes = match self.collector.list_processes() {
            Ok(rows) => Some(rows),
            Err(e) => {
                warn!(error = %e, "process refresh failed, keeping previous table");
                None
            }
        };

        self.state.apply_refresh(cores, memory, processes);
        self.state
            .expire_status(Duration::from_secs(STATUS_MESSAGE_TIMEOUT_SECS));
        Ok(())
    }

    // ── Keyboard handling ────────────────────────────────────────

    pub fn on_key(&mut self, key: Key) -> Turn {
        if key.is_quit() {
            debug!(?key, "quit requested");
            return Turn::Quit;
        }

        if self.state.menu.is_open() {
            self.handle_key_signal_menu(key);
        } else {
            self.handle_key_normal(key);
        }
        Turn::Continue
    }

    fn handle_key_signal_menu(&mut self, key: Key) {
        match key {
            Key::Up => self.state.menu.move_up(),
            Key::Down => self.state.menu.move_down(self.catalog.len()),
            Key::Left => self.state.menu.cancel(),
            Key::Enter => {
                if let Some(choice) = self.state.menu.confirm() {
                    self.deliver(choice);
                }
            }
            Key::Right | Key::Quit | Key::Interrupt => {}
        }
    }

    fn handle_key_normal(&mut self, key: Key) {
        match key {
            Key::Up => self.state.navigation.move_up(),
            Key::Down => self.state.navigation.move_down(),
            Key::Right => self.open_signal_menu(),
            Key::Left | Key::Enter | Key::Quit | Key::Interrupt => {}
        }
    }

    fn open_signal_menu(&mut self) {
        if self.catalog.is_empty() {
            self.state
                .set_status("No signals are supported on this platform".to_string());
            return;
        }
        let anchor_row = self.state.navigation.selected();
        let target = self.state.selected_process().map(|p| p.pid);
        self.state.menu.open(anchor_row, target);
    }

    // ── Signal delivery ──────────────────────────────────────────

    /// Send the confirmed signal to the target, if it is still listed.
    fn deliver(&mut self, choice: MenuChoice) {
        let Some(signal) = self.catalog.get(choice.selected).copied() else {
            return;
        };
        let Some(pid) = choice.target else {
            self.state
                .set_status(format!("No process selected, {} not sent", signal.name));
            return;
        };
        let Some(name) = self.state.processes.find(pid).map(|p| p.name.clone()) else {
            warn!(pid, signal = signal.name, "target process no longer listed");
            self.state
                .set_status(format!("PID {} is gone, {} not sent", pid, signal.name));
            return;
        };

        match self.collector.send_signal(pid, signal.kind) {
            Ok(()) => {
                info!(pid, signal = signal.name, process = %name, "signal sent");
                self.state
                    .set_status(format!("Sent {} to PID {} ({})", signal.name, pid, name));
            }
            Err(e) => {
                warn!(pid, signal = signal.name, error = %e, "signal delivery failed");
                self.state.set_status(format!(
                    "Failed to send {} to PID {} ({}): {}",
                    signal.name, pid, name, e
                ));
            }
        }
    }

    pub fn widgets(&self) -> Vec<Widget> {
        RenderCoordinator::new(&self.catalog).compose(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;

    use sysinfo::Signal;
    use tokio::sync::mpsc;

    use crate::error::DeliveryError;
    use crate::models::{CoreLoad, MemorySummary, ProcessSnapshot, SIGNAL_LIST};
    use crate::ui::state::SignalMenuState;

    // ── Fakes ─────────────────────────────────────────────────────

    struct FakeCollector {
        cores_ok: bool,
        memory_ok: bool,
        /// `None` makes the listing fail.
        processes: Option<Vec<ProcessSnapshot>>,
        reject: bool,
        sent: Vec<(u32, Signal)>,
    }

    impl FakeCollector {
        fn with_processes(rows: Vec<ProcessSnapshot>) -> Self {
            Self {
                cores_ok: true,
                memory_ok: true,
                processes: Some(rows),
                reject: false,
                sent: Vec::new(),
            }
        }
    }

    impl MetricSource for FakeCollector {
        fn core_loads(&mut self) -> Result<Vec<CoreLoad>, CollectError> {
            if !self.cores_ok {
                return Err(CollectError::NoCpuData);
            }
            Ok(vec![
                CoreLoad { core: 0, percent: 20.0 },
                CoreLoad { core: 1, percent: 80.0 },
            ])
        }

        fn memory_info(&mut self) -> Result<MemorySummary, CollectError> {
            if !self.memory_ok {
                return Err(CollectError::MemoryUnavailable);
            }
            Ok(MemorySummary::new(1024, 4096, 3072))
        }
    }

    impl ProcessSource for FakeCollector {
        fn list_processes(&mut self) -> Result<Vec<ProcessSnapshot>, CollectError> {
            self.processes.clone().ok_or(CollectError::NoProcesses)
        }
    }

    impl SignalSender for FakeCollector {
        fn send_signal(&mut self, pid: u32, signal: Signal) -> Result<(), DeliveryError> {
            if self.reject {
                return Err(DeliveryError::Rejected { pid, signal });
            }
            self.sent.push((pid, signal));
            Ok(())
        }
    }

    struct ChannelInput(mpsc::UnboundedReceiver<io::Result<Key>>);

    impl InputSource for ChannelInput {
        async fn next_key(&mut self) -> Option<io::Result<Key>> {
            self.0.recv().await
        }
    }

    struct RecordingSink {
        paints: Rc<Cell<usize>>,
        drops: Rc<Cell<usize>>,
        fail: bool,
    }

    impl RecordingSink {
        fn new(fail: bool) -> (Self, Rc<Cell<usize>>, Rc<Cell<usize>>) {
            let paints = Rc::new(Cell::new(0));
            let drops = Rc::new(Cell::new(0));
            let sink = Self {
                paints: paints.clone(),
                drops: drops.clone(),
                fail,
            };
            (sink, paints, drops)
        }
    }

    impl RenderSink for RecordingSink {
        fn paint(&mut self, _widgets: &[Widget]) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"));
            }
            self.paints.set(self.paints.get() + 1);
            Ok(())
        }
    }

    impl Drop for RecordingSink {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn make_process(pid: u32, name: &str) -> ProcessSnapshot {
        ProcessSnapshot {
            pid,
            name: name.to_string(),
            cpu_percent: 1.0,
            mem_percent: 2.0,
            status: "Running".to_string(),
        }
    }

    fn three_processes() -> Vec<ProcessSnapshot> {
        vec![
            make_process(1, "init"),
            make_process(42, "vim"),
            make_process(99, "cargo"),
        ]
    }

    fn app_with(collector: FakeCollector) -> App<FakeCollector> {
        App::new(
            &Config::default(),
            collector,
            SignalCatalog::from_entries(SIGNAL_LIST.to_vec()),
        )
    }

    fn ticked_app() -> App<FakeCollector> {
        let mut app = app_with(FakeCollector::with_processes(three_processes()));
        app.on_tick().unwrap();
        app
    }

    // ── Ticks ─────────────────────────────────────────────────────

    #[test]
    fn tick_populates_state() {
        let app = ticked_app();
        assert_eq!(app.state().cores.len(), 2);
        assert_eq!(app.state().memory.total_bytes, 4096);
        assert_eq!(app.state().processes.len(), 3);
        assert_eq!(app.state().tick_count, 1);
    }

    #[test]
    fn process_failure_keeps_previous_table() {
        let mut app = ticked_app();
        app.collector.processes = None;
        app.on_tick().unwrap();
        assert_eq!(app.state().processes.len(), 3);
        assert_eq!(app.state().tick_count, 2);
    }

    #[test]
    fn metric_failures_are_errors() {
        let mut app = ticked_app();
        app.collector.cores_ok = false;
        assert_eq!(app.on_tick(), Err(CollectError::NoCpuData));

        app.collector.cores_ok = true;
        app.collector.memory_ok = false;
        assert_eq!(app.on_tick(), Err(CollectError::MemoryUnavailable));
    }

    #[test]
    fn shrinking_table_clamps_selection() {
        let mut app = ticked_app();
        app.on_key(Key::Down);
        app.on_key(Key::Down);
        assert_eq!(app.state().navigation.selected(), 2);

        app.collector.processes = Some(vec![make_process(1, "init")]);
        app.on_tick().unwrap();
        assert_eq!(app.state().navigation.selected(), 0);
    }

    // ── Navigation ────────────────────────────────────────────────

    #[test]
    fn navigation_is_clamped() {
        let mut app = ticked_app();
        for _ in 0..4 {
            app.on_key(Key::Down);
            assert!(app.state().navigation.selected() <= 2);
        }
        assert_eq!(app.state().navigation.selected(), 2);
        for _ in 0..5 {
            app.on_key(Key::Up);
        }
        assert_eq!(app.state().navigation.selected(), 0);
    }

    #[test]
    fn enter_and_left_do_nothing_without_menu() {
        let mut app = ticked_app();
        app.on_key(Key::Down);
        assert_eq!(app.on_key(Key::Enter), Turn::Continue);
        assert_eq!(app.on_key(Key::Left), Turn::Continue);
        assert_eq!(app.state().navigation.selected(), 1);
        assert!(!app.state().menu.is_open());
        assert!(app.collector.sent.is_empty());
    }

    // ── Signal menu ───────────────────────────────────────────────

    #[test]
    fn open_menu_captures_anchor_and_target() {
        let mut app = ticked_app();
        app.on_key(Key::Down);
        app.on_key(Key::Right);
        assert_eq!(
            app.state().menu,
            SignalMenuState::Open {
                anchor_row: 1,
                selected: 0,
                target: Some(42),
            }
        );
    }

    #[test]
    fn confirm_sends_selected_signal_to_target() {
        let mut app = ticked_app();
        app.on_key(Key::Down);
        app.on_key(Key::Right);
        app.on_key(Key::Down); // SIGKILL
        app.on_key(Key::Enter);

        assert_eq!(app.collector.sent, vec![(42, Signal::Kill)]);
        assert!(!app.state().menu.is_open());
        assert_eq!(app.state().status_text(), Some("Sent SIGKILL to PID 42 (vim)"));
    }

    #[test]
    fn menu_keys_do_not_move_table_selection() {
        let mut app = ticked_app();
        app.on_key(Key::Right);
        app.on_key(Key::Down);
        app.on_key(Key::Down);
        assert_eq!(app.state().navigation.selected(), 0);
        assert!(matches!(app.state().menu, SignalMenuState::Open { selected: 2, .. }));
    }

    #[test]
    fn menu_selection_clamps_at_catalog_end() {
        let mut app = ticked_app();
        app.on_key(Key::Right);
        for _ in 0..12 {
            app.on_key(Key::Down);
        }
        assert!(matches!(app.state().menu, SignalMenuState::Open { selected: 9, .. }));
    }

    #[test]
    fn confirm_follows_pid_after_reorder() {
        let mut app = ticked_app();
        app.on_key(Key::Down);
        app.on_key(Key::Right);

        // pid 1 exited: vim is now row 0
        app.collector.processes = Some(vec![make_process(42, "vim"), make_process(99, "cargo")]);
        app.on_tick().unwrap();
        app.on_key(Key::Enter);

        assert_eq!(app.collector.sent, vec![(42, Signal::Term)]);
    }

    #[test]
    fn confirm_with_target_gone_sends_nothing() {
        let mut app = ticked_app();
        app.on_key(Key::Down);
        app.on_key(Key::Right);

        app.collector.processes = Some(vec![make_process(1, "init")]);
        app.on_tick().unwrap();
        assert_eq!(app.on_key(Key::Enter), Turn::Continue);

        assert!(app.collector.sent.is_empty());
        assert!(!app.state().menu.is_open());
        assert_eq!(app.state().status_text(), Some("PID 42 is gone, SIGTERM not sent"));
    }

    #[test]
    fn delivery_failure_is_not_fatal() {
        let mut app = ticked_app();
        app.collector.reject = true;
        app.on_key(Key::Right);
        assert_eq!(app.on_key(Key::Enter), Turn::Continue);

        assert!(!app.state().menu.is_open());
        let status = app.state().status_text().unwrap_or_default();
        assert!(status.starts_with("Failed to send SIGTERM to PID 1 (init)"));
    }

    #[test]
    fn cancel_sends_nothing_and_right_is_ignored_while_open() {
        let mut app = ticked_app();
        app.on_key(Key::Right);
        app.on_key(Key::Down);
        app.on_key(Key::Right);
        assert!(matches!(app.state().menu, SignalMenuState::Open { selected: 1, .. }));

        app.on_key(Key::Left);
        assert_eq!(app.state().menu, SignalMenuState::Hidden);
        assert!(app.collector.sent.is_empty());
        assert_eq!(app.state().navigation.selected(), 0);
    }

    #[test]
    fn empty_catalog_refuses_to_open() {
        let mut app = App::new(
            &Config::default(),
            FakeCollector::with_processes(three_processes()),
            SignalCatalog::from_entries(Vec::new()),
        );
        app.on_tick().unwrap();
        app.on_key(Key::Right);
        assert!(!app.state().menu.is_open());
        assert!(app.state().status_text().is_some());
    }

    #[test]
    fn confirm_on_empty_table_sends_nothing() {
        let mut app = app_with(FakeCollector::with_processes(Vec::new()));
        app.on_tick().unwrap();
        app.on_key(Key::Right);
        app.on_key(Key::Enter);
        assert!(app.collector.sent.is_empty());
        assert!(!app.state().menu.is_open());
    }

    #[test]
    fn quit_keys_quit_with_menu_open() {
        let mut app = ticked_app();
        app.on_key(Key::Right);
        assert_eq!(app.on_key(Key::Quit), Turn::Quit);

        let mut app = ticked_app();
        app.on_key(Key::Right);
        assert_eq!(app.on_key(Key::Interrupt), Turn::Quit);
        assert!(app.collector.sent.is_empty());
    }

    #[test]
    fn widgets_end_with_overlay_while_open() {
        let mut app = ticked_app();
        assert!(matches!(app.widgets().last(), Some(Widget::ProcessTable(_))));
        app.on_key(Key::Right);
        assert!(matches!(app.widgets().last(), Some(Widget::SignalOverlay(_))));
    }

    // ── Event loop ────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn quit_key_ends_loop_and_drops_sink_once() {
        let (tx, rx) = mpsc::unbounded_channel();
        let (sink, _paints, drops) = RecordingSink::new(false);
        tx.send(Ok(Key::Quit)).unwrap();

        let mut app = ticked_app();
        let result = app.run(ChannelInput(rx), sink).await;

        assert!(result.is_ok());
        assert_eq!(drops.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn end_of_input_quits_cleanly() {
        let (tx, rx) = mpsc::unbounded_channel::<io::Result<Key>>();
        drop(tx);
        let (sink, _paints, drops) = RecordingSink::new(false);

        let mut app = ticked_app();
        assert!(app.run(ChannelInput(rx), sink).await.is_ok());
        assert_eq!(drops.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn collect_failure_is_fatal_and_drops_sink_once() {
        let (_tx, rx) = mpsc::unbounded_channel();
        let (sink, paints, drops) = RecordingSink::new(false);

        let mut collector = FakeCollector::with_processes(three_processes());
        collector.cores_ok = false;
        let mut app = app_with(collector);

        let result = app.run(ChannelInput(rx), sink).await;
        assert!(matches!(
            result,
            Err(DashboardError::Collect(CollectError::NoCpuData))
        ));
        assert_eq!(paints.get(), 0);
        assert_eq!(drops.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn paint_failure_is_fatal() {
        let (_tx, rx) = mpsc::unbounded_channel();
        let (sink, _paints, drops) = RecordingSink::new(true);

        let mut app = ticked_app();
        let result = app.run(ChannelInput(rx), sink).await;
        assert!(matches!(result, Err(DashboardError::Terminal(_))));
        assert_eq!(drops.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn input_error_is_fatal() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(Err(io::Error::new(io::ErrorKind::Other, "tty closed")))
            .unwrap();
        let (sink, _paints, drops) = RecordingSink::new(false);

        let mut app = ticked_app();
        let result = app.run(ChannelInput(rx), sink).await;
        assert!(matches!(result, Err(DashboardError::Input(_))));
        assert_eq!(drops.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_repaint_until_quit() {
        let (tx, rx) = mpsc::unbounded_channel();
        let (sink, paints, _drops) = RecordingSink::new(false);
        let mut app = ticked_app();

        let quitter = async move {
            // Ticks fire at 0, 1000 and 2000 ms before the quit key arrives
            time::sleep(Duration::from_millis(2500)).await;
            tx.send(Ok(Key::Quit)).unwrap();
        };
        let (result, ()) = tokio::join!(app.run(ChannelInput(rx), sink), quitter);

        assert!(result.is_ok());
        assert_eq!(paints.get(), 3);
        assert_eq!(app.state().tick_count, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn queued_keys_drive_signal_delivery() {
        let (tx, rx) = mpsc::unbounded_channel();
        for key in [Key::Down, Key::Right, Key::Down, Key::Enter, Key::Quit] {
            tx.send(Ok(key)).unwrap();
        }
        let (sink, _paints, drops) = RecordingSink::new(false);

        let mut app = ticked_app();
        assert!(app.run(ChannelInput(rx), sink).await.is_ok());

        assert_eq!(app.collector.sent, vec![(42, Signal::Kill)]);
        assert_eq!(drops.get(), 1);
    }
}
