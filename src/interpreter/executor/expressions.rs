//! Expression evaluation
//!
//! Postfix expressions are evaluated left to right against a fresh operand stack.
//! Token resolution order is: integer literal, then variable, then operator. A
//! variable whose name is an operator symbol therefore shadows the operator.

use num_bigint::BigInt;

use super::types::{Expr, Variables};
use crate::interpreter::errors::ScriptError;

/// Binary operators understood by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Gte,
}

impl BinOp {
    fn from_token(tok: &str) -> Option<Self> {
        match tok {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            ">=" => Some(BinOp::Gte),
            _ => None,
        }
    }

    fn apply(self, lhs: BigInt, rhs: BigInt) -> BigInt {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Gte => BigInt::from(u8::from(lhs >= rhs)),
        }
    }
}

/// Evaluate a postfix expression to an integer
///
/// Returns the value at the bottom of the operand stack. For a well-formed
/// expression that is the only value left; when operands are left over
/// (`1 2`), the first value pushed wins and no error is raised. Arithmetic
/// is unbounded, so no operator can overflow.
///
/// `line` is attached to any error raised.
pub fn eval_expr(expr: &Expr, vars: &Variables, line: Option<usize>) -> Result<BigInt, ScriptError> {
    let mut stack: Vec<BigInt> = Vec::with_capacity(expr.tokens.len());

    for tok in &expr.tokens {
        if is_literal(tok) {
            let value = tok
                .parse::<BigInt>()
                .map_err(|e| invalid_expression(expr, &e.to_string(), line))?;
            stack.push(value);
        } else if let Some(value) = vars.get(tok) {
            stack.push(value.clone());
        } else {
            let Some(op) = BinOp::from_token(tok) else {
                return Err(ScriptError::undefined_variable(
                    format!("Unknown variable or operator: '{}'", tok),
                    line,
                ));
            };

            let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                return Err(ScriptError::stack_underflow(
                    "Not enough operands for operator",
                    line,
                ));
            };

            stack.push(op.apply(lhs, rhs));
        }
    }

    stack
        .into_iter()
        .next()
        .ok_or_else(|| ScriptError::stack_underflow("Empty expression", line))
}

/// Literals are runs of numeric characters; there is no sign
///
/// Only ASCII digits parse. Other numeric characters (`²`, `٣`) still claim
/// the token as a literal, so they fail as invalid expressions rather than
/// being looked up as names.
fn is_literal(tok: &str) -> bool {
    !tok.is_empty() && tok.chars().all(char::is_numeric)
}

fn invalid_expression(expr: &Expr, details: &str, line: Option<usize>) -> ScriptError {
    ScriptError::syntax(
        format!("Invalid expression: '{}' (details: {})", expr.source, details),
        line,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::errors::ErrorKind;

    fn eval(source: &str, vars: &Variables) -> Result<BigInt, ScriptError> {
        eval_expr(&Expr::new(source), vars, Some(1))
    }

    #[test]
    fn test_literal() {
        assert_eq!(eval("42", &Variables::new()), Ok(BigInt::from(42)));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(eval("007", &Variables::new()), Ok(BigInt::from(7)));
    }

    #[test]
    fn test_operand_order() {
        // The operand pushed later is the right-hand side
        assert_eq!(eval("10 3 -", &Variables::new()), Ok(BigInt::from(7)));
        assert_eq!(eval("3 10 >=", &Variables::new()), Ok(BigInt::from(0)));
        assert_eq!(eval("10 3 >=", &Variables::new()), Ok(BigInt::from(1)));
        assert_eq!(eval("3 3 >=", &Variables::new()), Ok(BigInt::from(1)));
    }

    #[test]
    fn test_nested_operations() {
        // (2 + 3) * (7 - 4)
        assert_eq!(eval("2 3 + 7 4 - *", &Variables::new()), Ok(BigInt::from(15)));
    }

    #[test]
    fn test_variable_lookup() {
        let vars: Variables = [("n", 4)].into_iter().collect();
        assert_eq!(eval("n n *", &vars), Ok(BigInt::from(16)));
    }

    #[test]
    fn test_leftover_operands_return_bottom_of_stack() {
        assert_eq!(eval("1 2", &Variables::new()), Ok(BigInt::from(1)));
        assert_eq!(eval("5 1 2 +", &Variables::new()), Ok(BigInt::from(5)));
    }

    #[test]
    fn test_negative_results_are_allowed() {
        assert_eq!(eval("0 1 -", &Variables::new()), Ok(BigInt::from(-1)));
    }

    #[test]
    fn test_minus_sign_is_an_operator() {
        let err = eval("-1", &Variables::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedVariableError);
        assert_eq!(err.message(), "Unknown variable or operator: '-1'");
    }

    #[test]
    fn test_variable_shadows_operator() {
        let vars: Variables = [("+", 9)].into_iter().collect();
        assert_eq!(eval("1 +", &vars), Ok(BigInt::from(1)));
        assert_eq!(eval("+", &vars), Ok(BigInt::from(9)));
    }

    #[test]
    fn test_underflow() {
        let err = eval("1 +", &Variables::new()).unwrap_err();
        assert_eq!(err, ScriptError::stack_underflow("Not enough operands for operator", Some(1)));
    }

    #[test]
    fn test_unknown_token_reported_before_underflow() {
        let err = eval("foo", &Variables::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedVariableError);
        assert!(err.message().contains("'foo'"));
    }

    #[test]
    fn test_empty_expression() {
        let err = eval("", &Variables::new()).unwrap_err();
        assert_eq!(err, ScriptError::stack_underflow("Empty expression", Some(1)));
    }

    #[test]
    fn test_literal_beyond_machine_width() {
        let value = eval("99999999999999999999", &Variables::new()).unwrap();
        assert_eq!(value.to_string(), "99999999999999999999");
    }

    #[test]
    fn test_arithmetic_does_not_overflow() {
        let value = eval("9223372036854775807 1 +", &Variables::new()).unwrap();
        assert_eq!(value.to_string(), "9223372036854775808");

        let value = eval("0 9223372036854775807 - 9223372036854775807 *", &Variables::new()).unwrap();
        assert_eq!(value.to_string(), "-85070591730234615847396907784232501249");
    }

    #[test]
    fn test_non_ascii_digits_are_invalid_literals() {
        for source in ["\u{b2}", "\u{663}", "1\u{b2}"] {
            let err = eval(source, &Variables::new()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::SyntaxError);
            assert!(err
                .message()
                .starts_with(&format!("Invalid expression: '{}' (details: ", source)));
        }
    }
}
