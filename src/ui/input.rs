//! Keyboard input: the dashboard's key vocabulary and its terminal source.

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;

/// Discrete keys the dashboard reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Quit,
    Interrupt,
}

impl Key {
    /// Map a terminal key event, or `None` for keys the dashboard ignores.
    pub fn from_event(event: KeyEvent) -> Option<Self> {
        // Windows reports releases too
        if event.kind == KeyEventKind::Release {
            return None;
        }

        match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Key::Interrupt)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Key::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Key::Down),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Esc => Some(Key::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Key::Right),
            KeyCode::Enter => Some(Key::Enter),
            _ => None,
        }
    }

    pub fn is_quit(self) -> bool {
        matches!(self, Key::Quit | Key::Interrupt)
    }
}

/// A source of keys for the event loop.
///
/// `next_key` must be cancel-safe: the loop races it against the refresh
/// timer and drops it when the timer wins.
#[allow(async_fn_in_trait)]
pub trait InputSource {
    /// The next key, an input error, or `None` once input is exhausted.
    async fn next_key(&mut self) -> Option<io::Result<Key>>;
}

/// Keys read from the terminal through crossterm's async event stream.
pub struct TerminalInput {
    events: EventStream,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            events: EventStream::new(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    async fn next_key(&mut self) -> Option<io::Result<Key>> {
        loop {
            match self.events.next().await? {
                Ok(Event::Key(event)) => {
                    if let Some(key) = Key::from_event(event) {
                        return Some(Ok(key));
                    }
                }
                // Mouse, paste, resize: the next tick repaints at the new size
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
