use crate::parser::RPNExpr;
use std::fmt;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a str),
    Node(char, Box<AST<'a>>, Box<AST<'a>>),
}

fn op_precedence(op: char) -> usize {
    match op {
        '+' | '-' => 1,
        _ => 2,
    }
}

impl RPNExpr {
    // None when the sequence isn't a well formed expression
    fn build_ast(&self) -> Option<AST> {
        let mut ops = Vec::new();
        for token in self.0.iter() {
            match token.as_str() {
                "+" | "-" | "*" | "/" => {
                    let rhs = ops.pop()?;
                    let lhs = ops.pop()?;
                    let op = token.chars().next()?;
                    ops.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
                num if num.parse::<f64>().is_ok() => ops.push(AST::Leaf(num)),
                _ => return None,
            }
        }
        if ops.len() != 1 {
            return None;
        }
        ops.pop()
    }

    /// Render back to infix with the fewest parens that keep the same
    /// evaluation order. Returns `None` for a malformed sequence.
    pub fn to_infix(&self) -> Option<String> {
        fn printer(root: &AST) -> (String, usize) {
            match root {
                AST::Leaf(num) => (num.to_string(), 99),
                AST::Node(op, lhs, rhs) => {
                    let (lhs, rhs) = (printer(lhs), printer(rhs));
                    let prec = op_precedence(*op);
                    let lh = if prec > lhs.1 {
                        format!("({})", lhs.0)
                    } else {
                        lhs.0
                    };
                    // left associative: an equal precedence rhs needs grouping
                    let rh = if prec >= rhs.1 {
                        format!("({})", rhs.0)
                    } else {
                        rhs.0
                    };
                    (format!("{} {} {}", lh, op, rh), prec)
                }
            }
        }
        self.build_ast().map(|ast| printer(&ast).0)
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

///////////////////////////////////////////////////////////////////////////////
