#![deny(warnings)]

use crate::scanner::Scanner;

static LITERAL: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];
static SYMBOLS: &[char] = &['+', '-', '*', '/', '(', ')'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn ignore_ws(&mut self) {
        self.skip_matching(|c| c.is_whitespace());
        self.ignore();
    }

    // scan literals like [0-9.]+, the amount of '.' isn't checked
    pub fn scan_literal(&mut self) -> Option<String> {
        if !self.skip_all(LITERAL) {
            return None;
        }
        Some(self.extract_string())
    }

    // single char operators and parens
    pub fn scan_symbol(&mut self) -> Option<char> {
        let symbol = self.accept_any(SYMBOLS)?;
        self.ignore();
        Some(symbol)
    }
}

///////////////////////////////////////////////////////////////////////////////
