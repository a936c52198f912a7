// Subprocess module
// Public interface for running clones and entry scripts

mod command;
mod workspace;

pub use command::{run_command, ExecError, LineCallback};
pub use workspace::{mark_executable, ScratchDir};
