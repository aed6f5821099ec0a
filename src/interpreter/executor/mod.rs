//! # Executor - Program-Counter Driven Interpreter
//!
//! ## Core Principles
//!
//! 1. **Flat execution**: statements live in one indexed array; loops are
//!    jumps, not nested structures
//! 2. **Statement-level stepping**: `step()` dispatches exactly one statement
//! 3. **Loop return stack**: entering a `while` pushes its pc, `end` pops it
//!    and jumps back so the condition is evaluated again
//! 4. **Fail fast**: the first error halts the VM; there is no recovery

pub mod exec_loop;
pub mod expressions;
pub mod statements;
pub mod types;
pub mod vm;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use exec_loop::{run_until_done, step};
pub use expressions::eval_expr;
pub use types::{Control, Expr, Line, Program, Stmt, Variables};
pub use vm::{Step, VM};
