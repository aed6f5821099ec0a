//! Type definitions for the executor
//!
//! - AST nodes (Program, Line, Stmt, Expr)
//! - Runtime values (Variables)
//! - Run state (Control)

pub mod ast;
pub mod control;
pub mod values;

pub use ast::{Expr, Line, Program, Stmt};
pub use control::Control;
pub use values::Variables;
