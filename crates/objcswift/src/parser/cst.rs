//! Syntax kinds for the Objective-C concrete syntax tree.
//!
//! `SyntaxKind` serves dual roles: token kinds (from the lexer) and node kinds (from the
//! parser). Logos derives token recognition; node kinds lack token/regex attributes.
//! `ObjCLang` implements Rowan's `Language` trait for tree construction.

#![allow(dead_code)] // Some items are for future use

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("=")]
    Equals,

    /// The closed set of Objective-C at-keywords. Defined before `At` so Logos prefers
    /// the longer match; a bare `@` not followed by a recognised word becomes `At`.
    #[token("@interface")]
    AtInterface,

    #[token("@implementation")]
    AtImplementation,

    #[token("@protocol")]
    AtProtocol,

    #[token("@end")]
    AtEnd,

    #[token("@class")]
    AtClass,

    #[token("@property")]
    AtProperty,

    #[token("@synthesize")]
    AtSynthesize,

    #[token("@dynamic")]
    AtDynamic,

    #[token("@private")]
    AtPrivate,

    #[token("@protected")]
    AtProtected,

    #[token("@package")]
    AtPackage,

    #[token("@public")]
    AtPublic,

    #[token("@optional")]
    AtOptional,

    #[token("@required")]
    AtRequired,

    #[token("@selector")]
    AtSelector,

    /// Any other `@`-prefixed word, or a bare `@`: recorded so the lexer can coalesce it
    /// with a diagnostic rather than dropping it silently.
    #[token("@")]
    At,

    #[regex(r"[0-9]+\.[0-9]+[fF]?")]
    FloatLiteral,

    #[regex(r"0[xX][0-9a-fA-F]+")]
    #[regex(r"0[0-7]*")]
    #[regex(r"[1-9][0-9]*")]
    IntLiteral,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    StringLiteral,

    /// Identifier. Keyword words (`id`, `void`, `__weak`, property attributes, …) are
    /// lexed as plain identifiers and classified by the parser from their text, per the
    /// closed at-keyword set being the only reserved-word table the lexer itself applies.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Id,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*[^/])*\*/")]
    BlockComment,

    /// Coalesced unrecognized characters.
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    GlobalContext,
    ClassInterface,
    ClassImplementation,
    ClassCategory,
    ProtocolDeclaration,
    ProtocolReferenceList,
    ForwardClassDeclaration,
    IVarsList,
    IVarDecl,
    PropertyDeclaration,
    PropertyAttributeList,
    PropertyAttribute,
    PropertyImplementation,
    PropertyImplementationItem,
    MethodSignature,
    MethodSelectorPart,
    MethodBody,
    ObjcType,
    TypeSpecifierList,
    TypeArgumentList,
    KeywordNode,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    /// Whether this kind is one of the closed at-keyword set, attached to the tree as a
    /// first-class [`KeywordNode`](SyntaxKind::KeywordNode) child wherever it terminates
    /// or introduces a construct.
    #[inline]
    pub fn is_at_keyword(self) -> bool {
        matches!(
            self,
            AtInterface
                | AtImplementation
                | AtProtocol
                | AtEnd
                | AtClass
                | AtProperty
                | AtSynthesize
                | AtDynamic
                | AtPrivate
                | AtProtected
                | AtPackage
                | AtPublic
                | AtOptional
                | AtRequired
                | AtSelector
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjCLang {}

impl Language for ObjCLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<ObjCLang>;
pub type SyntaxToken = rowan::SyntaxToken<ObjCLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser, one per §4.2's follow-set table.
pub mod token_sets {
    use super::*;

    /// Follow set for a class/implementation/category/protocol body: `@end`, the next
    /// top-level declaration keyword, or EOF (EOF is handled separately via `should_stop`).
    pub const BODY_RECOVERY: TokenSet =
        TokenSet::new(&[AtEnd, AtInterface, AtImplementation, AtProtocol, AtClass]);

    /// Follow set for an ivar block: `}` or `@end`.
    pub const IVAR_BLOCK_RECOVERY: TokenSet = TokenSet::new(&[BraceClose, AtEnd]);

    /// Follow set for a property declaration: `;`.
    pub const PROPERTY_RECOVERY: TokenSet = TokenSet::new(&[Semicolon]);

    /// Follow set for a method signature in an `@interface`: `;`.
    pub const METHOD_DECL_RECOVERY: TokenSet = TokenSet::new(&[Semicolon]);

    /// Follow set for a method signature in an `@implementation`: `{`.
    pub const METHOD_IMPL_RECOVERY: TokenSet = TokenSet::new(&[BraceOpen]);

    /// Follow set for a protocol reference list: `>`, `;`, `{`.
    pub const PROTOCOL_LIST_RECOVERY: TokenSet = TokenSet::new(&[Gt, Semicolon, BraceOpen]);

    /// Tokens that can start a top-level declaration.
    pub const GLOBAL_FIRST: TokenSet =
        TokenSet::new(&[AtInterface, AtImplementation, AtProtocol, AtClass]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment]);
}
