//! Top-level dispatch: `parseMain()` / `GlobalContextNode` (§4.2).

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    /// Consumes the whole token stream, dispatching each top-level declaration by its
    /// leading at-keyword.
    pub fn parse_global_context(&mut self) {
        self.start_node(SyntaxKind::GlobalContext);

        while !self.should_stop() {
            match self.peek() {
                SyntaxKind::AtInterface => {
                    if self.peek_nth(1) != SyntaxKind::Error && self.is_category_lookahead() {
                        self.parse_class_category_node();
                    } else {
                        self.parse_class_interface_node();
                    }
                }
                SyntaxKind::AtImplementation => {
                    if self.is_category_lookahead() {
                        self.parse_class_category_node();
                    } else {
                        self.parse_class_implementation();
                    }
                }
                SyntaxKind::AtProtocol => self.parse_protocol_declaration(),
                SyntaxKind::AtClass => self.parse_forward_class_declaration(),
                SyntaxKind::Error if self.eof() => break,
                _ => {
                    self.error(DiagnosticKind::UnexpectedToken);
                    if !self.synchronize_to_global_start() {
                        // Nothing recognizable ahead; consume one token to guarantee progress.
                        if !self.eof() {
                            self.start_node(SyntaxKind::Error);
                            self.bump();
                            self.finish_node();
                        }
                    }
                }
            }
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// `@interface Name (Category)` / `@implementation Name (Category)`: a category has
    /// a parenthesized name (possibly empty, for a class extension) right after the class
    /// identifier.
    fn is_category_lookahead(&mut self) -> bool {
        self.peek_nth(1) == SyntaxKind::Id && self.peek_nth(2) == SyntaxKind::ParenOpen
    }

    /// `@class A, B;`: a forward declaration produces no intention on its own (§8
    /// scenario 1) but still needs a tree node so its keyword and identifiers are
    /// recoverable like any other construct.
    pub fn parse_forward_class_declaration(&mut self) {
        self.start_node(SyntaxKind::ForwardClassDeclaration);
        self.bump_keyword(); // @class

        self.expect(SyntaxKind::Id, "class name");
        while self.eat(SyntaxKind::Comma) {
            self.expect(SyntaxKind::Id, "class name");
        }

        if !self.eat(SyntaxKind::Semicolon) {
            self.error(DiagnosticKind::MissingDeclarationEnd);
        }

        self.finish_node();
    }
}
