pub mod error;
pub mod eval;
pub mod lex;
pub mod parse;

pub use error::EvalError;
pub use lex::Lexer;
pub use parse::Parser;

/// Evaluates an infix expression of numbers, `+ - * /` and parentheses.
///
/// ```
/// assert_eq!(infix_calc::evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert!(infix_calc::evaluate("2 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    Parser::new(expression)?.evaluate()
}
