use std::num::ParseFloatError;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Everything that can go wrong while evaluating an expression.
///
/// Spans are byte ranges into the expression that was passed to
/// [`crate::evaluate`]; attach the expression with
/// [`miette::Report::with_source_code`] to render them.
#[derive(Error, Debug, Diagnostic)]
pub enum EvalError {
    #[error("the expression is empty")]
    #[diagnostic(code(calc::empty_expression), help("write something like `2 + 2`"))]
    EmptyExpression,

    #[error("invalid number: '{text}'")]
    #[diagnostic(code(calc::invalid_number))]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseFloatError,
        #[label("this numeric literal")]
        span: SourceSpan,
    },

    #[error("unmatched closing parenthesis")]
    #[diagnostic(
        code(calc::unmatched_closing_paren),
        help("remove the `)` or add a matching `(` before it")
    )]
    UnmatchedClosingParen {
        #[label("no `(` for this")]
        span: SourceSpan,
    },

    #[error("unknown token: '{text}'")]
    #[diagnostic(
        code(calc::unknown_token),
        help("only numbers, `+ - * /` and parentheses are understood")
    )]
    UnknownToken {
        text: String,
        #[label("this token")]
        span: SourceSpan,
    },

    #[error("not enough operands for the operation")]
    #[diagnostic(
        code(calc::insufficient_operands),
        help("negative numbers are not supported; write `0 - 3` instead of `-3`")
    )]
    InsufficientOperands {
        #[label("this operator")]
        span: Option<SourceSpan>,
    },

    #[error("no operators available")]
    #[diagnostic(code(calc::no_operator))]
    NoOperator,

    #[error("division by zero is not allowed")]
    #[diagnostic(code(calc::division_by_zero))]
    DivisionByZero {
        #[label("dividing by zero here")]
        span: SourceSpan,
    },

    #[error("unknown operator: '{text}'")]
    #[diagnostic(code(calc::unknown_operator))]
    UnknownOperator {
        text: String,
        #[label("not an operator")]
        span: SourceSpan,
    },

    #[error("invalid expression: check the number of operators and operands")]
    #[diagnostic(
        code(calc::malformed_expression),
        help("look for a missing `)` or two numbers with no operator between them")
    )]
    MalformedExpression {
        #[label("in this expression")]
        span: SourceSpan,
    },
}
