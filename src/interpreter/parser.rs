//! Program loader
//!
//! Turns source text into a `Program`: one entry per non-blank line, each
//! classified by its first whitespace-delimited word. Loading never fails;
//! lines that cannot be classified become `Stmt::Malformed` and raise their
//! syntax error only when executed.

use super::executor::types::{Expr, Line, Program, Stmt};

/// Load source text into a program
///
/// Lines are trimmed and blank lines dropped before indexing, so program
/// counters (and the line numbers derived from them) count non-blank lines only.
pub fn load(source: &str) -> Program {
    let lines = source
        .split('\n')
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(|text| Line {
            text: text.to_string(),
            stmt: classify(text),
        })
        .collect();

    Program { lines }
}

/// Classify one trimmed, non-empty line
pub fn classify(text: &str) -> Stmt {
    let (head, rest) = match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (text, ""),
    };

    match head {
        "while" if rest.is_empty() => Stmt::Malformed {
            message: "Missing while condition".to_string(),
        },
        "while" => Stmt::While {
            test: Expr::new(rest),
        },
        // Anything after `end` is ignored
        "end" => Stmt::End,
        _ => classify_assignment(text),
    }
}

fn classify_assignment(text: &str) -> Stmt {
    let Some((name, expr)) = text.split_once('=') else {
        return Stmt::Malformed {
            message: format!("Invalid statement: '{}'", text),
        };
    };

    let (name, expr) = (name.trim(), expr.trim());
    if name.is_empty() || expr.is_empty() {
        return Stmt::Malformed {
            message: format!("Invalid assignment: '{}'", text),
        };
    }

    Stmt::Assign {
        name: name.to_string(),
        expr: Expr::new(expr),
    }
}
