use super::cst::SyntaxKind;
use super::lexer::{lex, token_text};

fn kinds(source: &str) -> Vec<SyntaxKind> {
    lex(source).iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_at_keywords_before_plain_at() {
    assert_eq!(kinds("@interface"), vec![SyntaxKind::AtInterface]);
    assert_eq!(kinds("@end"), vec![SyntaxKind::AtEnd]);
    assert_eq!(kinds("@banana"), vec![SyntaxKind::At, SyntaxKind::Id]);
}

#[test]
fn lexes_identifiers_and_punctuation() {
    assert_eq!(
        kinds("NSString *name;"),
        vec![
            SyntaxKind::Id,
            SyntaxKind::Whitespace,
            SyntaxKind::Star,
            SyntaxKind::Id,
            SyntaxKind::Semicolon,
        ]
    );
}

#[test]
fn lexes_ownership_specifiers_as_identifiers() {
    // §4.1: keyword recognition is layered on top of identifier lexing by the parser,
    // not baked into the lexer's token table for every specifier word.
    assert_eq!(kinds("__weak"), vec![SyntaxKind::Id]);
    assert_eq!(kinds("__unsafe_unretained"), vec![SyntaxKind::Id]);
}

#[test]
fn coalesces_unknown_characters_into_garbage() {
    let tokens = lex("@interface $$$ @end");
    let garbage = tokens
        .iter()
        .find(|t| t.kind == SyntaxKind::Garbage)
        .expect("garbage token");
    assert_eq!(token_text("@interface $$$ @end", garbage), "$$$");
}

#[test]
fn lexes_comments_as_trivia() {
    let tokens = lex("// a line comment\n/* a block */");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            SyntaxKind::LineComment,
            SyntaxKind::Newline,
            SyntaxKind::BlockComment,
        ]
    );
}

#[test]
fn lexes_string_and_numeric_literals() {
    assert_eq!(kinds("\"hello\""), vec![SyntaxKind::StringLiteral]);
    assert_eq!(kinds("42"), vec![SyntaxKind::IntLiteral]);
    assert_eq!(kinds("0x2A"), vec![SyntaxKind::IntLiteral]);
    assert_eq!(kinds("3.14"), vec![SyntaxKind::FloatLiteral]);
}
