use crate::parser::RPNExpr;
use log::{trace, warn};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EvalErr {
    #[error("invalid expression")]
    InvalidExpression,
    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),
    #[error("{0} operands left on the stack")]
    DanglingOperands(usize),
}

/// What to do with operands still stacked once the input runs out.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum EvalMode {
    /// Return the top of the stack and drop the rest.
    #[default]
    Lenient,
    /// Anything other than a single value is an error.
    Strict,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RPNEvaluator {
    mode: EvalMode,
}

impl RPNEvaluator {
    pub fn new(mode: EvalMode) -> RPNEvaluator {
        RPNEvaluator { mode }
    }

    /// Evaluate tokens separated by single spaces, `"1  2 +"` holds an empty token.
    pub fn eval_str(&self, rpn: &str) -> Result<f64, EvalErr> {
        self.eval_tokens(rpn.split(' '))
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<f64, EvalErr> {
        self.eval_tokens(rpn.iter().map(String::as_str))
    }

    fn eval_tokens<'a>(&self, tokens: impl Iterator<Item = &'a str>) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in tokens {
            if let Ok(num) = token.parse::<f64>() {
                operands.push(num);
                continue;
            }
            // right operand comes off first
            let (Some(r), Some(l)) = (operands.pop(), operands.pop()) else {
                return Err(EvalErr::InvalidExpression);
            };
            trace!("{} {} {}", l, token, r);
            match token {
                "+" => operands.push(l + r),
                "-" => operands.push(l - r),
                "*" => operands.push(l * r),
                "/" => operands.push(l / r),
                _ => return Err(EvalErr::UnsupportedOperator(token.to_string())),
            }
        }
        let result = operands.pop().ok_or(EvalErr::InvalidExpression)?;
        if !operands.is_empty() {
            match self.mode {
                EvalMode::Strict => return Err(EvalErr::DanglingOperands(operands.len() + 1)),
                EvalMode::Lenient => warn!("discarding {} unused operands", operands.len()),
            }
        }
        Ok(result)
    }
}
