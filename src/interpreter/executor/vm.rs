//! Virtual Machine state
//!
//! The VM holds all execution state for a single run:
//! - program: the loaded statements, immutable
//! - pc: index of the next statement
//! - loop_stack: pcs of entered `while` statements
//! - vars: the variable store
//! - control: whether the run is still going, and how it ended

use super::types::{Control, Program, Variables};
use crate::interpreter::errors::ScriptError;

/// Virtual Machine state
#[derive(Debug, Clone)]
pub struct VM {
    pub program: Program,

    /// Program counter; `pc == program.len()` means normal termination
    pub pc: usize,

    /// Return addresses for entered loops, innermost last
    pub loop_stack: Vec<usize>,

    pub vars: Variables,

    pub control: Control,

    /// Statements dispatched so far
    pub steps: u64,
}

impl VM {
    /// Create a VM positioned at the first statement of `program`
    pub fn new(program: Program) -> Self {
        VM {
            program,
            pc: 0,
            loop_stack: Vec::new(),
            vars: Variables::new(),
            control: Control::Running,
            steps: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.control == Control::Running
    }

    /// Consume the VM and produce the run's outcome
    ///
    /// A failed run yields only its error; variables assigned before the
    /// failure are dropped. A VM that has not halted yet reports the
    /// variables it has so far.
    pub fn into_result(self) -> Result<Variables, ScriptError> {
        match self.control {
            Control::Failed(err) => Err(err),
            Control::Running | Control::Halted => Ok(self.vars),
        }
    }
}

/* ===================== Step Result ===================== */

/// Result of executing one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Continue to next step
    Continue,
    /// Execution complete
    Done,
}
