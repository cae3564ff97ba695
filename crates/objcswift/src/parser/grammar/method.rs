//! Method signatures: `- (ReturnType)selector;` and `+ (ReturnType)kw:(T)name …;`,
//! with bodies attached only inside `@implementation` (§3, §4.2).

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{BODY_RECOVERY, METHOD_DECL_RECOVERY, METHOD_IMPL_RECOVERY};

impl Parser<'_> {
    /// Parses the declaration-only member sequence shared by `@interface`, a category, and
    /// `@protocol`: `@property` declarations, `@optional`/`@required` markers, and method
    /// signatures with no body, until `terminator` or the body follow set is reached.
    pub(crate) fn parse_member_sequence(&mut self, terminator: SyntaxKind) {
        loop {
            if self.should_stop() || self.peek() == terminator {
                return;
            }
            match self.peek() {
                SyntaxKind::AtProperty => self.parse_property_declaration(),
                SyntaxKind::AtOptional | SyntaxKind::AtRequired => self.bump_keyword(),
                SyntaxKind::Plus | SyntaxKind::Minus => self.parse_method_signature(false),
                _ => {
                    if BODY_RECOVERY.contains(self.peek()) {
                        return;
                    }
                    self.error_recover(
                        DiagnosticKind::UnexpectedToken,
                        "expected a member declaration",
                        BODY_RECOVERY,
                    );
                    if !BODY_RECOVERY.contains(self.peek()) {
                        return;
                    }
                }
            }
        }
    }

    /// `(+|-) (ReturnType) selector…;` or, with `with_body`, `… { … }`.
    pub(crate) fn parse_method_signature(&mut self, with_body: bool) {
        self.start_node(SyntaxKind::MethodSignature);
        self.bump(); // '+' or '-'

        if self.eat(SyntaxKind::ParenOpen) {
            self.parse_objc_type();
            self.expect(SyntaxKind::ParenClose, "`)` after return type");
        }

        if self.peek() == SyntaxKind::Id && self.peek_nth(1) == SyntaxKind::Colon {
            self.parse_selector_parts();
        } else if self.peek() == SyntaxKind::Id {
            self.bump();
        } else {
            self.error(DiagnosticKind::UnexpectedToken);
        }

        if with_body {
            if self.peek() == SyntaxKind::BraceOpen {
                self.parse_method_body();
            } else {
                self.error_recover(
                    DiagnosticKind::MissingDeclarationEnd,
                    "expected `{` to begin method body",
                    METHOD_IMPL_RECOVERY,
                );
            }
        } else if !self.eat(SyntaxKind::Semicolon) {
            self.error_recover(
                DiagnosticKind::MissingDeclarationEnd,
                "expected `;` to end method declaration",
                METHOD_DECL_RECOVERY,
            );
        }

        self.finish_node();
    }

    fn parse_selector_parts(&mut self) {
        while self.peek() == SyntaxKind::Id && self.peek_nth(1) == SyntaxKind::Colon {
            self.start_node(SyntaxKind::MethodSelectorPart);
            self.bump(); // keyword
            self.bump(); // ':'
            if self.eat(SyntaxKind::ParenOpen) {
                self.parse_objc_type();
                self.expect(SyntaxKind::ParenClose, "`)` after parameter type");
            }
            self.expect(SyntaxKind::Id, "parameter name");
            self.finish_node();
        }
    }

    /// Skips a balanced `{ … }` body opaquely: statement grammar is out of scope, but the
    /// consumed range still needs to land under the method's node for source-range
    /// containment (§8).
    fn parse_method_body(&mut self) {
        self.start_node(SyntaxKind::MethodBody);
        self.bump(); // '{'
        let mut depth = 1u32;
        while depth > 0 && !self.should_stop() {
            match self.peek() {
                SyntaxKind::BraceOpen => {
                    depth += 1;
                    self.bump();
                }
                SyntaxKind::BraceClose => {
                    depth -= 1;
                    self.bump();
                }
                _ => self.bump(),
            }
        }
        self.finish_node();
    }
}
