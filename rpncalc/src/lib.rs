extern crate lexers;

use thiserror::Error;

pub use parser::ParenMode;
pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod parser;
#[cfg(test)]
mod parser_test;

pub use self::rpneval::EvalErr;
pub use self::rpneval::EvalMode;
pub use self::rpneval::RPNEvaluator;

mod rpnprint;
mod rpneval;

/// Rewrite an infix expression as space separated RPN. Never fails,
/// malformed input gives a sequence that `evaluate` will reject.
pub fn convert(infix: &str) -> String {
    ShuntingParser::parse_str(infix).to_string()
}

pub fn evaluate(rpn: &str) -> Result<f64, EvalErr> {
    RPNEvaluator::default().eval_str(rpn)
}

#[derive(Error, Debug, PartialEq)]
pub enum CalcErr {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Eval error: {0}")]
    Eval(#[from] EvalErr),
}

/// An expression with its RPN form and value.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub infix: String,
    pub rpn: RPNExpr,
    pub value: f64,
}

/// Convert then evaluate, the RPN goes through its textual form in between.
pub fn calculate(infix: &str, parens: ParenMode, mode: EvalMode) -> Result<Calculation, CalcErr> {
    let rpn = ShuntingParser::parse_str_checked(infix, parens)?;
    let value = RPNEvaluator::new(mode).eval_str(&rpn.to_string())?;
    Ok(Calculation { infix: infix.to_string(), rpn, value })
}
