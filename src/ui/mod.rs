pub mod coordinator;
pub mod input;
mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

pub use coordinator::{RenderCoordinator, Widget};
pub use input::{InputSource, Key, TerminalInput};
pub use state::DashboardState;
pub use terminal::{RenderSink, TerminalSink};
pub use theme::Theme;
