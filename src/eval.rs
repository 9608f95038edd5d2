use crate::{
    EvalError,
    lex::{Token, TokenKind},
};

/// Binding strength of an operator on the stack. `(` and anything else rank 0,
/// so the precedence rule never reduces past an open parenthesis.
pub fn precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Plus | TokenKind::Minus => 1,
        TokenKind::Star | TokenKind::Slash => 2,
        _ => 0,
    }
}

/// Pops one operator and two operands, pushes `lhs op rhs` back.
///
/// For operands `[.., a, b]` the result is `a op b`.
pub fn reduce(operands: &mut Vec<f64>, operators: &mut Vec<Token<'_>>) -> Result<(), EvalError> {
    let &[.., lhs, rhs] = operands.as_slice() else {
        return Err(EvalError::InsufficientOperands {
            span: operators.last().map(Token::span),
        });
    };
    let Some(op) = operators.pop() else {
        return Err(EvalError::NoOperator);
    };
    operands.truncate(operands.len() - 2);

    let result = match op.kind {
        TokenKind::Plus => lhs + rhs,
        TokenKind::Minus => lhs - rhs,
        TokenKind::Star => lhs * rhs,
        TokenKind::Slash => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero { span: op.span() });
            }
            lhs / rhs
        }
        _ => {
            return Err(EvalError::UnknownOperator {
                text: op.literal.to_string(),
                span: op.span(),
            });
        }
    };

    log::trace!("{lhs} {} {rhs} = {result}", op.literal);
    operands.push(result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::Lexer;

    fn op(symbol: &str) -> Token<'_> {
        Lexer::new(symbol).next().expect("one token")
    }

    #[test]
    fn precedence_table() {
        assert_eq!(precedence(TokenKind::Plus), 1);
        assert_eq!(precedence(TokenKind::Minus), 1);
        assert_eq!(precedence(TokenKind::Star), 2);
        assert_eq!(precedence(TokenKind::Slash), 2);
        assert_eq!(precedence(TokenKind::LeftParen), 0);
        assert_eq!(precedence(TokenKind::Literal), 0);
    }

    #[test]
    fn second_from_top_is_left_hand_side() {
        let mut operands = vec![1.0, 8.0, 2.0];
        let mut operators = vec![op("+"), op("-")];
        reduce(&mut operands, &mut operators).unwrap();
        assert_eq!(operands, vec![1.0, 6.0]);
        assert_eq!(operators, vec![op("+")]);

        let mut operands = vec![8.0, 2.0];
        reduce(&mut operands, &mut vec![op("/")]).unwrap();
        assert_eq!(operands, vec![4.0]);
    }

    #[test]
    fn all_four_operators() {
        for (symbol, expected) in [("+", 7.0), ("-", 3.0), ("*", 10.0), ("/", 2.5)] {
            let mut operands = vec![5.0, 2.0];
            reduce(&mut operands, &mut vec![op(symbol)]).unwrap();
            assert_eq!(operands, vec![expected], "5 {symbol} 2");
        }
    }

    #[test]
    fn only_exact_zero_divisor_fails() {
        let mut operands = vec![1.0, 0.0];
        let err = reduce(&mut operands, &mut vec![op("/")]).unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero { .. }));

        let mut operands = vec![1.0, -0.0];
        let err = reduce(&mut operands, &mut vec![op("/")]).unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero { .. }));

        let mut operands = vec![1.0, 1e-300];
        reduce(&mut operands, &mut vec![op("/")]).unwrap();
        assert!(operands[0].is_finite());
    }

    #[test]
    fn operand_count_is_checked_before_operator() {
        let err = reduce(&mut vec![1.0], &mut vec![]).unwrap_err();
        assert!(matches!(err, EvalError::InsufficientOperands { span: None }));

        let err = reduce(&mut vec![1.0], &mut vec![op("*")]).unwrap_err();
        assert!(matches!(err, EvalError::InsufficientOperands { span: Some(_) }));

        let err = reduce(&mut vec![1.0, 2.0], &mut vec![]).unwrap_err();
        assert!(matches!(err, EvalError::NoOperator));
    }

    #[test]
    fn non_operator_on_stack_is_rejected() {
        let err = reduce(&mut vec![1.0, 2.0], &mut vec![op("(")]).unwrap_err();
        assert!(matches!(err, EvalError::UnknownOperator { ref text, .. } if text == "("));
    }
}
