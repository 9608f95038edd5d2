use miette::SourceSpan;

use crate::{
    EvalError,
    eval::{precedence, reduce},
    lex::{Token, TokenKind, tokenize},
};

/// Shunting-yard evaluator over one expression.
///
/// All state lives in the parser and is dropped with it, so separate
/// expressions never share stacks.
pub struct Parser<'de> {
    whole: &'de str,
    tokens: Vec<Token<'de>>,
    operands: Vec<f64>,
    operators: Vec<Token<'de>>,
}

impl<'de> Parser<'de> {
    pub fn new(whole: &'de str) -> Result<Self, EvalError> {
        Ok(Parser {
            whole,
            tokens: tokenize(whole)?,
            operands: Vec::new(),
            operators: Vec::new(),
        })
    }

    pub fn evaluate(mut self) -> Result<f64, EvalError> {
        for token in std::mem::take(&mut self.tokens) {
            self.step(token)?;
        }
        self.finish()
    }

    fn step(&mut self, token: Token<'de>) -> Result<(), EvalError> {
        match token.kind {
            TokenKind::Literal if token.looks_numeric() => {
                let n = token
                    .literal
                    .parse::<f64>()
                    .map_err(|source| EvalError::InvalidNumber {
                        text: token.literal.to_string(),
                        source,
                        span: token.span(),
                    })?;
                self.operands.push(n);
            }
            TokenKind::LeftParen => self.operators.push(token),
            TokenKind::RightParen => {
                while self
                    .operators
                    .last()
                    .is_some_and(|top| top.kind != TokenKind::LeftParen)
                {
                    reduce(&mut self.operands, &mut self.operators)?;
                }
                if self.operators.pop().is_none() {
                    return Err(EvalError::UnmatchedClosingParen { span: token.span() });
                }
            }
            kind if kind.is_operator() => {
                while self
                    .operators
                    .last()
                    .is_some_and(|top| precedence(top.kind) >= precedence(kind))
                {
                    reduce(&mut self.operands, &mut self.operators)?;
                }
                self.operators.push(token);
            }
            _ => {
                return Err(EvalError::UnknownToken {
                    text: token.literal.to_string(),
                    span: token.span(),
                });
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<f64, EvalError> {
        while let Some(top) = self.operators.last() {
            // an open paren still here never saw its `)`
            if top.kind == TokenKind::LeftParen {
                return Err(EvalError::MalformedExpression { span: top.span() });
            }
            reduce(&mut self.operands, &mut self.operators)?;
        }

        match self.operands.as_slice() {
            [result] => {
                log::debug!("{:?} = {result}", self.whole);
                Ok(*result)
            }
            _ => Err(EvalError::MalformedExpression {
                span: SourceSpan::from(0..self.whole.len()),
            }),
        }
    }
}
