//! Run state

use crate::interpreter::errors::ScriptError;

/// Where the VM is in its lifecycle
///
/// A run starts `Running` and ends in exactly one of the halted states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Running,
    /// pc reached the end of the program
    Halted,
    /// First error raised by the run; nothing executes after it
    Failed(ScriptError),
}
