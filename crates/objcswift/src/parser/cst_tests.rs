use super::cst::SyntaxKind::*;
use super::cst::TokenSet;

#[test]
fn token_set_contains_members() {
    let set = TokenSet::new(&[AtInterface, AtEnd]);
    assert!(set.contains(AtInterface));
    assert!(set.contains(AtEnd));
    assert!(!set.contains(AtImplementation));
}

#[test]
fn token_set_union() {
    let a = TokenSet::single(AtInterface);
    let b = TokenSet::single(AtImplementation);
    let union = a.union(b);
    assert!(union.contains(AtInterface));
    assert!(union.contains(AtImplementation));
    assert!(!union.contains(AtEnd));
}

#[test]
fn empty_set_contains_nothing() {
    assert!(!TokenSet::EMPTY.contains(AtInterface));
}

#[test]
fn trivia_classification() {
    assert!(Whitespace.is_trivia());
    assert!(LineComment.is_trivia());
    assert!(!Id.is_trivia());
}

#[test]
fn at_keyword_classification() {
    assert!(AtInterface.is_at_keyword());
    assert!(AtSynthesize.is_at_keyword());
    assert!(!At.is_at_keyword());
    assert!(!Id.is_at_keyword());
}

#[test]
fn error_classification() {
    assert!(Garbage.is_error());
    assert!(Error.is_error());
    assert!(!Id.is_error());
}
