use crate::parser::{ParenMode, ParseError, ShuntingParser};
use crate::convert;
use lexers::InfixToken;

fn rpn_of(expr: &str) -> String {
    ShuntingParser::parse_str(expr).to_string()
}

#[test]
fn test_precedence() {
    assert_eq!(rpn_of("2 + 3 * 4"), "2 3 4 * +");
    assert_eq!(rpn_of("2 * 3 + 4"), "2 3 * 4 +");
    assert_eq!(rpn_of("8 / 4 - 1"), "8 4 / 1 -");
}

#[test]
fn test_left_associativity() {
    assert_eq!(rpn_of("8 - 3 - 1"), "8 3 - 1 -");
    assert_eq!(rpn_of("8 / 4 * 2"), "8 4 / 2 *");
    assert_eq!(rpn_of("1 + 2 - 3 + 4"), "1 2 + 3 - 4 +");
}

#[test]
fn test_parens() {
    assert_eq!(rpn_of("(2 + 3) * 4"), "2 3 + 4 *");
    assert_eq!(rpn_of("8 - (3 - 1)"), "8 3 1 - -");
    assert_eq!(rpn_of("((7))"), "7");
    assert_eq!(
        rpn_of("12 + 2 * ((3 * 4) + (10 / 5))"),
        "12 2 3 4 * 10 5 / + * +"
    );
}

#[test]
fn test_unary_minus() {
    assert_eq!(rpn_of("-5 + 3"), "0 5 - 3 +");
    assert_eq!(rpn_of("-5"), "0 5 -");
    assert_eq!(rpn_of("2 * -3"), "2 0 3 - *");
    assert_eq!(rpn_of("(-2)"), "0 2 -");
    assert_eq!(rpn_of("4 - -1"), "4 0 1 - -");
    // zero-subtraction binds looser than a following '*'
    assert_eq!(rpn_of("6 / -2 * 3"), "6 0 2 3 * - /");
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(convert("  12   +   3 "), convert("12+3"));
    assert_eq!(convert("\t(1+2)\n*3"), "1 2 + 3 *");
    assert_eq!(convert(""), "");
    assert_eq!(convert("   "), "");
}

#[test]
fn test_all_whitespace_is_ignored() {
    assert_eq!(convert("1 +\x0c2"), "1 2 +");
    assert_eq!(convert("1\x0b+ 2"), "1 2 +");
    assert_eq!(convert("\x0b(\x0c3\u{a0}*\x0b4)\x0c"), "3 4 *");
    assert_eq!(crate::evaluate(&convert("1\x0b+ 2")), Ok(3.0));
}

#[test]
fn test_literals_pass_through() {
    assert_eq!(rpn_of("1.2.3 + 4"), "1.2.3 4 +");
    assert_eq!(rpn_of(".5 * 007"), ".5 007 *");
}

#[test]
fn test_unknown_symbols() {
    // pushed without popping, emitted at the end
    assert_eq!(rpn_of("3 ^ 4"), "3 4 ^");
    assert_eq!(rpn_of("2 * 3 % 4 + 1"), "2 3 4 1 + % *");
    assert_eq!(rpn_of("(3 ^ 4) + 1"), "3 4 ^ 1 +");
}

#[test]
fn test_lenient_parens() {
    assert_eq!(rpn_of("1 + 2)"), "1 2 +");
    assert_eq!(rpn_of(")3"), "3");
    assert_eq!(rpn_of("(1 + 2"), "1 2 + (");
}

#[test]
fn test_strict_parens() {
    let rpn = ShuntingParser::parse_str_checked("(2 + 3) * 4", ParenMode::Strict);
    assert_eq!(rpn.map(|r| r.to_string()), Ok(format!("2 3 + 4 *")));

    let rpn = ShuntingParser::parse_str_checked("(1 + (2 * 3)", ParenMode::Strict);
    assert_eq!(rpn, Err(ParseError::MissingCParen));

    let rpn = ShuntingParser::parse_str_checked("1 + 2) * 3", ParenMode::Strict);
    assert_eq!(rpn, Err(ParseError::MissingOParen));

    let rpn = ShuntingParser::parse_str_checked(")", ParenMode::Strict);
    assert_eq!(rpn, Err(ParseError::MissingOParen));

    // the first mismatch wins
    let rpn = ShuntingParser::parse_str_checked(")(", ParenMode::Strict);
    assert_eq!(rpn, Err(ParseError::MissingOParen));
}

#[test]
fn test_lenient_mode_matches_parse() {
    for expr in ["(1 + 2", "1 + 2)", "-(4 - 5) * 2"] {
        let checked = ShuntingParser::parse_str_checked(expr, ParenMode::Lenient);
        assert_eq!(checked, Ok(ShuntingParser::parse_str(expr)));
    }
}

#[test]
fn test_parse_from_tokens() {
    let mut tokens = vec![
        InfixToken::UMinus,
        InfixToken::OParen,
        InfixToken::Number(format!("1")),
        InfixToken::BOp('+'),
        InfixToken::Number(format!("2")),
        InfixToken::CParen,
    ]
    .into_iter();
    let rpn = ShuntingParser::parse(&mut tokens);
    assert_eq!(rpn.0, vec!["0", "1", "2", "+", "-"]);
    assert_eq!(rpn.len(), 5);
}
