#![deny(warnings)]

use crate::scanner::Scanner;


#[derive(Clone, PartialEq, Debug)]
pub enum InfixToken {
    Number(String), // raw lexeme, may not be a valid float
    BOp(char),
    UMinus,
    OParen, CParen,
    Unknown(char),
}

/// Splits an arithmetic expression into `InfixToken`s, skipping whitespace.
///
/// A `-` is tagged `UMinus` when it starts the expression or follows an
/// operator or an opening paren. Characters that aren't part of the grammar
/// come out as `Unknown` so that a consumer decides what to do with them.
pub struct InfixTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<InfixToken>
}

impl<I: Iterator<Item=char>> InfixTokenizer<I> {
    pub fn new(source: I) -> Self {
        InfixTokenizer{src: Scanner::new(source), prev: None}
    }

    // when would a minus be unary? we need to know the prev token
    fn makes_unary(prev: &Option<InfixToken>) -> bool {
        match *prev {
            Some(InfixToken::Number(_)) => false,
            Some(InfixToken::CParen) => false,
            Some(InfixToken::Unknown(_)) => false,
            _ => true
        }
    }

    fn get_token(&mut self) -> Option<InfixToken> {
        self.src.ignore_ws();
        if let Some(num) = self.src.scan_literal() {
            Some(InfixToken::Number(num))
        } else if let Some(sym) = self.src.scan_symbol() {
            match sym {
                '(' => Some(InfixToken::OParen),
                ')' => Some(InfixToken::CParen),
                '-' if Self::makes_unary(&self.prev) => Some(InfixToken::UMinus),
                _ => Some(InfixToken::BOp(sym)),
            }
        } else if let Some(other) = self.src.next() {
            self.src.ignore();
            Some(InfixToken::Unknown(other))
        } else {
            None
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for InfixTokenizer<I> {
    type Item = InfixToken;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        self.prev = token.clone();
        token
    }
}

///////////////////////////////////////////////////////////////////////////////
