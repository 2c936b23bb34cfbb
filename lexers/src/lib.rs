mod scanner;
mod char_scanner;
mod infix_tokenizer;

pub use scanner::Scanner;
pub use infix_tokenizer::{InfixTokenizer, InfixToken};
