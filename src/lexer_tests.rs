use crate::lexer::Lexer;
use crate::token::Token;

#[test]
fn tokenizes_metacharacters_and_literals() {
    let mut lexer = Lexer::new("a(b|c)*+?");
    let tokens = lexer.tokenize_all().unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Char(b'a'),
            Token::LParen,
            Token::Char(b'b'),
            Token::Or,
            Token::Char(b'c'),
            Token::RParen,
            Token::Star,
            Token::Plus,
            Token::Question,
        ]
    );
}

#[test]
fn reports_offset_of_first_non_printable_byte() {
    let mut lexer = Lexer::new("a\x01b");
    let err = lexer.tokenize_all().unwrap_err();
    assert_eq!(err.offset, 1);
    assert_eq!(err.byte, 0x01);
}

#[test]
fn eof_is_terminal_and_repeatable() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn error_is_terminal_and_repeatable() {
    let mut lexer = Lexer::new("\x01");
    assert_eq!(lexer.next_token(), Token::Error(0x01));
    assert_eq!(lexer.next_token(), Token::Error(0x01));
}

#[test]
fn lex_round_trip_reproduces_pattern() {
    for pattern in ["a(b|c)*+?d", "abc", "(a|b)*c", "a**+?"] {
        let mut lexer = Lexer::new(pattern);
        let tokens = lexer.tokenize_all().unwrap();
        let reconstructed: String = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(reconstructed, pattern);
    }
}
