//! CLI command handlers. Each command is in its own file.

mod checksum;
mod completions;
mod show;

pub use checksum::run_checksum;
pub use completions::{run_completions, run_man};
pub use show::{load_about, run_show};
