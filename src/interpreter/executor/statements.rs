//! Statement execution handlers
//!
//! Each handler receives the parts of the VM it needs and returns the next
//! program counter, or the error that ends the run.

use num_bigint::BigInt;

use super::expressions::eval_expr;
use super::types::{Expr, Program, Variables};
use crate::interpreter::errors::ScriptError;

/// 1-based line number for a program counter
pub fn line_of(pc: usize) -> Option<usize> {
    Some(pc + 1)
}

/* ===================== Statement Handlers ===================== */

/// Execute an assignment: evaluate and store, then fall through
pub fn execute_assign(
    vars: &mut Variables,
    pc: usize,
    name: &str,
    expr: &Expr,
) -> Result<usize, ScriptError> {
    let value = eval_expr(expr, vars, line_of(pc))?;
    vars.set(name, value);
    Ok(pc + 1)
}

/// Execute a `while` statement
///
/// A condition equal to 1 enters the body and records this pc as the loop's
/// return address. Any other value skips past the matching `end`.
pub fn execute_while(
    program: &Program,
    loop_stack: &mut Vec<usize>,
    vars: &Variables,
    pc: usize,
    test: &Expr,
) -> Result<usize, ScriptError> {
    let cond = eval_expr(test, vars, line_of(pc))?;

    if cond == BigInt::from(1) {
        loop_stack.push(pc);
        return Ok(pc + 1);
    }

    let next = skip_loop(program, pc)?;
    tracing::trace!(from = pc, to = next, "skipped loop body");
    Ok(next)
}

/// Execute an `end` statement: jump back to the owning `while`
///
/// The pc is set to the `while` itself, not the line after it, so the
/// condition is evaluated again on the next step.
pub fn execute_end(loop_stack: &mut Vec<usize>, pc: usize) -> Result<usize, ScriptError> {
    let Some(target) = loop_stack.pop() else {
        return Err(ScriptError::syntax("Unmatched 'end'", line_of(pc)));
    };

    tracing::trace!(from = pc, to = target, "jump to loop condition");
    Ok(target)
}

/* ===================== Loop Skipping ===================== */

/// Find the pc just past the `end` matching the `while` at `pc`
///
/// Matching is textual: any line starting with `while` opens a level and any
/// line starting with `end` closes one, whatever the rest of the line says.
fn skip_loop(program: &Program, pc: usize) -> Result<usize, ScriptError> {
    let mut depth = 1usize;
    let mut cursor = pc + 1;

    while cursor < program.len() && depth > 0 {
        let text = &program.lines[cursor].text;
        if text.starts_with("while") {
            depth += 1;
        } else if text.starts_with("end") {
            depth -= 1;
        }
        cursor += 1;
    }

    if depth != 0 {
        // Reported one past the last line: the scan ran off the program
        return Err(ScriptError::syntax("Unclosed 'while' loop", line_of(cursor)));
    }

    Ok(cursor)
}
