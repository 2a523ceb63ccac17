mod process;
mod signal;
mod system;

pub use process::*;
pub use signal::*;
pub use system::*;
