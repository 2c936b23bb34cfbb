use std::ops::Deref;

use lexers::{InfixToken, InfixTokenizer};
use log::{debug, trace};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("missing opening paren")]
    MissingOParen,
    #[error("missing closing paren")]
    MissingCParen,
}

/// What to do with parens that don't pair up.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ParenMode {
    /// A stray `)` stops popping silently, a stray `(` is flushed to the output.
    #[default]
    Lenient,
    /// Unbalanced parens are a `ParseError`.
    Strict,
}

pub fn precedence(token: &InfixToken) -> isize {
    match *token {
        InfixToken::BOp('+') | InfixToken::BOp('-') => 1,
        InfixToken::BOp('*') | InfixToken::BOp('/') => 2,
        // parens and unknown symbols bind loosest
        _ => -1,
    }
}

/// Operators and numbers in evaluation order, each in its textual form.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct RPNExpr(pub Vec<String>);

impl Deref for RPNExpr {
    type Target = [String];
    fn deref(&self) -> &[String] {
        &self.0
    }
}

// stack entries are kept as tokens, but only their symbol goes to the output
fn lexeme(token: InfixToken) -> String {
    match token {
        InfixToken::Number(num) => num,
        InfixToken::BOp(op) | InfixToken::Unknown(op) => op.to_string(),
        InfixToken::UMinus => format!("-"),
        InfixToken::OParen => format!("("),
        InfixToken::CParen => format!(")"),
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> RPNExpr {
        Self::parse(&mut InfixTokenizer::new(expr.chars()))
    }

    /// Shunting-yard without paren checks, it never fails.
    pub fn parse(lex: &mut impl Iterator<Item = InfixToken>) -> RPNExpr {
        Self::shunt(lex).0
    }

    pub fn parse_str_checked(expr: &str, mode: ParenMode) -> Result<RPNExpr, ParseError> {
        Self::parse_checked(&mut InfixTokenizer::new(expr.chars()), mode)
    }

    pub fn parse_checked(
        lex: &mut impl Iterator<Item = InfixToken>,
        mode: ParenMode,
    ) -> Result<RPNExpr, ParseError> {
        match (Self::shunt(lex), mode) {
            ((_, Some(err)), ParenMode::Strict) => Err(err),
            ((rpn, _), _) => Ok(rpn),
        }
    }

    // the output plus the first paren mismatch seen, if any
    fn shunt(lex: &mut impl Iterator<Item = InfixToken>) -> (RPNExpr, Option<ParseError>) {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut mismatch = None;

        for token in lex {
            trace!("token {:?}, stack {:?}", token, stack);
            match token {
                InfixToken::Number(num) => out.push(num),
                InfixToken::OParen => stack.push(token),
                InfixToken::CParen => {
                    let mut matched = false;
                    while let Some(top) = stack.pop() {
                        if top == InfixToken::OParen {
                            matched = true;
                            break;
                        }
                        out.push(lexeme(top));
                    }
                    if !matched {
                        mismatch = mismatch.or(Some(ParseError::MissingOParen));
                    }
                }
                // unary minus is rewritten as a subtraction from zero
                InfixToken::UMinus => {
                    out.push(format!("0"));
                    stack.push(InfixToken::BOp('-'));
                }
                InfixToken::BOp(_) => {
                    let prec_rhs = precedence(&token);
                    while let Some(top) = stack.pop() {
                        if precedence(&top) < prec_rhs {
                            stack.push(top);
                            break;
                        }
                        out.push(lexeme(top));
                    }
                    stack.push(token);
                }
                InfixToken::Unknown(_) => stack.push(token),
            }
        }
        while let Some(top) = stack.pop() {
            if top == InfixToken::OParen {
                mismatch = mismatch.or(Some(ParseError::MissingCParen));
            }
            out.push(lexeme(top));
        }
        let rpn = RPNExpr(out);
        debug!("rpn: {}", rpn);
        (rpn, mismatch)
    }
}
