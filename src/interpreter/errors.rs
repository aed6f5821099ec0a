//! Script errors
//!
//! Every failure a program can hit at run time is one of three kinds. Each error
//! carries a human-readable message and, when known, the 1-based line of the
//! statement that raised it. Line numbers count non-blank lines only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error category, used by callers that branch on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    SyntaxError,
    UndefinedVariableError,
    StackUnderflowError,
}

/// A run-terminating error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// Malformed statement, unbalanced loop delimiters, or an expression that
    /// failed for a reason other than a bad token or missing operands
    #[error("{}", located(.line, .message))]
    Syntax { message: String, line: Option<usize> },

    /// Expression token that is neither a literal, a known variable nor an operator
    #[error("{}", located(.line, .message))]
    UndefinedVariable { message: String, line: Option<usize> },

    /// Operator applied to fewer than two operands, or an expression with no value
    #[error("{}", located(.line, .message))]
    StackUnderflow { message: String, line: Option<usize> },
}

fn located(line: &Option<usize>, message: &str) -> String {
    match line {
        Some(n) => format!("Error (line {n}): {message}"),
        None => format!("Error: {message}"),
    }
}

impl ScriptError {
    pub fn syntax(message: impl Into<String>, line: Option<usize>) -> Self {
        ScriptError::Syntax {
            message: message.into(),
            line,
        }
    }

    pub fn undefined_variable(message: impl Into<String>, line: Option<usize>) -> Self {
        ScriptError::UndefinedVariable {
            message: message.into(),
            line,
        }
    }

    pub fn stack_underflow(message: impl Into<String>, line: Option<usize>) -> Self {
        ScriptError::StackUnderflow {
            message: message.into(),
            line,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ScriptError::Syntax { .. } => ErrorKind::SyntaxError,
            ScriptError::UndefinedVariable { .. } => ErrorKind::UndefinedVariableError,
            ScriptError::StackUnderflow { .. } => ErrorKind::StackUnderflowError,
        }
    }

    /// The bare message, without the `Error (line N):` prefix
    pub fn message(&self) -> &str {
        match self {
            ScriptError::Syntax { message, .. }
            | ScriptError::UndefinedVariable { message, .. }
            | ScriptError::StackUnderflow { message, .. } => message,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            ScriptError::Syntax { line, .. }
            | ScriptError::UndefinedVariable { line, .. }
            | ScriptError::StackUnderflow { line, .. } => *line,
        }
    }
}
