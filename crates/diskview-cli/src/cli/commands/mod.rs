//! CLI command handlers. Each command is in its own file.

mod completions;
mod inspect;
mod last;
mod play;
mod resolve;

pub use completions::{run_completions, run_man};
pub use inspect::run_inspect;
pub use last::run_last;
pub use play::run_play;
pub use resolve::run_resolve;
