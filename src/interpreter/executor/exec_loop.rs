//! Core execution loop
//!
//! This module contains the step() function - the heart of the interpreter.
//! Each step dispatches the statement at the program counter and either moves
//! the pc or halts the VM.
//!
//! ## Function Organization
//! 1. run_until_done() - Top-level driver (calls step repeatedly)
//! 2. step() - Dispatches one statement to its handler

use super::statements::{execute_assign, execute_end, execute_while, line_of};
use super::types::{Control, Stmt};
use super::vm::{Step, VM};
use crate::interpreter::errors::ScriptError;

/* ===================== Public API ===================== */

/// Run the VM until it halts
///
/// After completion, inspect `vm.control` for the final state or call
/// `vm.into_result()`.
pub fn run_until_done(vm: &mut VM) {
    loop {
        match step(vm) {
            Step::Continue => continue,
            Step::Done => break,
        }
    }

    match &vm.control {
        Control::Failed(err) => tracing::warn!(steps = vm.steps, error = %err, "run failed"),
        _ => tracing::info!(
            steps = vm.steps,
            variables = vm.vars.len(),
            "run completed"
        ),
    }
}

/// Execute one statement
///
/// Returns `Step::Done` once the VM has halted, either because the pc ran off
/// the end of the program or because a handler raised an error. Errors are
/// caught here and nowhere else.
pub fn step(vm: &mut VM) -> Step {
    if !vm.is_running() {
        return Step::Done;
    }

    let VM {
        program,
        pc,
        loop_stack,
        vars,
        control,
        steps,
    } = vm;

    let Some(line) = program.get(*pc) else {
        *control = Control::Halted;
        return Step::Done;
    };

    *steps += 1;
    tracing::debug!(pc = *pc, line = %line.text, "dispatch");

    let next = match &line.stmt {
        Stmt::Assign { name, expr } => execute_assign(vars, *pc, name, expr),
        Stmt::While { test } => execute_while(program, loop_stack, vars, *pc, test),
        Stmt::End => execute_end(loop_stack, *pc),
        Stmt::Malformed { message } => Err(ScriptError::syntax(message.clone(), line_of(*pc))),
    };

    match next {
        Ok(next) => {
            *pc = next;
            Step::Continue
        }
        Err(err) => {
            *control = Control::Failed(err);
            Step::Done
        }
    }
}
