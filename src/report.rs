//! Rendering of run outcomes for the console

use crate::config::OutputFormat;
use crate::interpreter::{ErrorKind, ScriptError, Variables};
use serde::Serialize;

const HEADER: &str = "Execution completed. Final variables:";

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    pub header: bool,
}

#[derive(Serialize)]
struct JsonError<'a> {
    kind: ErrorKind,
    message: &'a str,
    line: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum JsonReport<'a> {
    Variables(&'a Variables),
    Error(JsonError<'a>),
}

/// Render a run outcome
pub fn render(outcome: &Result<Variables, ScriptError>, options: ReportOptions) -> String {
    match options.format {
        OutputFormat::Text => match outcome {
            Ok(vars) => render_variables(vars, options.header),
            Err(err) => err.to_string(),
        },
        OutputFormat::Json => render_json(outcome),
    }
}

/// Text report: optional header, then one `name = value` line per variable
pub fn render_variables(vars: &Variables, header: bool) -> String {
    let mut out = String::new();
    if header {
        out.push('\n');
        out.push_str(HEADER);
        out.push('\n');
    }
    for (name, value) in vars.iter() {
        out.push_str(&format!("{} = {}\n", name, value));
    }
    out
}

fn render_json(outcome: &Result<Variables, ScriptError>) -> String {
    let report = match outcome {
        Ok(vars) => JsonReport::Variables(vars),
        Err(err) => JsonReport::Error(JsonError {
            kind: err.kind(),
            message: err.message(),
            line: err.line(),
        }),
    };

    // Serializing plain maps and strings cannot fail
    serde_json::to_string_pretty(&report).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::run;

    const TEXT: ReportOptions = ReportOptions {
        format: OutputFormat::Text,
        header: true,
    };

    #[test]
    fn test_text_success() {
        let outcome = run("b = 2\na = 1");
        assert_eq!(
            render(&outcome, TEXT),
            "\nExecution completed. Final variables:\nb = 2\na = 1\n"
        );
    }

    #[test]
    fn test_text_without_header() {
        let outcome = run("x = 0 5 -");
        let options = ReportOptions {
            header: false,
            ..TEXT
        };
        assert_eq!(render(&outcome, options), "x = -5\n");
    }

    #[test]
    fn test_text_error() {
        let outcome = run("x = 1\nend");
        assert_eq!(render(&outcome, TEXT), "Error (line 2): Unmatched 'end'");
    }

    #[test]
    fn test_json_success_keeps_order() {
        let outcome = run("zeta = 1\nalpha = 2");
        let options = ReportOptions {
            format: OutputFormat::Json,
            header: true,
        };
        let value: serde_json::Value = serde_json::from_str(&render(&outcome, options)).unwrap();
        assert_eq!(value["variables"]["zeta"], 1);
        assert_eq!(value["variables"]["alpha"], 2);

        let rendered = render(&outcome, options);
        assert!(rendered.find("zeta").unwrap() < rendered.find("alpha").unwrap());
    }

    #[test]
    fn test_large_values_render_in_full() {
        let outcome = run("big = 4294967296 4294967296 * 4294967296 *");
        assert_eq!(
            render(&outcome, ReportOptions { header: false, ..TEXT }),
            "big = 79228162514264337593543950336\n"
        );

        let options = ReportOptions {
            format: OutputFormat::Json,
            header: true,
        };
        let value: serde_json::Value = serde_json::from_str(&render(&outcome, options)).unwrap();
        assert_eq!(value["variables"]["big"], "79228162514264337593543950336");
    }

    #[test]
    fn test_json_error() {
        let outcome = run("z = foo 1 +");
        let options = ReportOptions {
            format: OutputFormat::Json,
            header: true,
        };
        let value: serde_json::Value = serde_json::from_str(&render(&outcome, options)).unwrap();
        assert_eq!(value["error"]["kind"], "UndefinedVariableError");
        assert_eq!(value["error"]["message"], "Unknown variable or operator: 'foo'");
        assert_eq!(value["error"]["line"], 1);
    }
}
