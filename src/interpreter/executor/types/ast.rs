//! Abstract Syntax Tree node types

use serde::{Deserialize, Serialize};

/// Statement AST node
///
/// Lines are classified once at load time. A line that cannot be classified
/// becomes `Malformed` and only fails the run if execution reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Stmt {
    Assign { name: String, expr: Expr },
    While { test: Expr },
    End,
    Malformed { message: String },
}

/// Postfix expression: the source text and its whitespace-split tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expr {
    pub source: String,
    pub tokens: Vec<String>,
}

impl Expr {
    pub fn new(source: &str) -> Self {
        Expr {
            source: source.to_string(),
            tokens: source.split_whitespace().map(str::to_string).collect(),
        }
    }
}

/// One non-blank source line and its classified statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Trimmed source text, used by the loop-skip scan
    pub text: String,
    pub stmt: Stmt,
}

/// Loaded program, indexed by program counter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub lines: Vec<Line>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, pc: usize) -> Option<&Line> {
        self.lines.get(pc)
    }
}
