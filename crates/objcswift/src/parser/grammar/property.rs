//! `@property (attr, attr, getter=name) Type *ident;` (§3, §4.2, §4.4).

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::PROPERTY_RECOVERY;

impl Parser<'_> {
    pub(crate) fn parse_property_declaration(&mut self) {
        self.start_node(SyntaxKind::PropertyDeclaration);
        self.bump_keyword(); // @property

        if self.peek() == SyntaxKind::ParenOpen {
            self.parse_property_attribute_list();
        }

        self.parse_objc_type();
        self.expect(SyntaxKind::Id, "property name");

        if !self.eat(SyntaxKind::Semicolon) {
            self.error_recover(
                DiagnosticKind::MissingDeclarationEnd,
                "expected `;` to end property declaration",
                PROPERTY_RECOVERY,
            );
        }

        self.finish_node();
    }

    fn parse_property_attribute_list(&mut self) {
        self.start_node(SyntaxKind::PropertyAttributeList);
        self.bump(); // '('

        if self.peek() != SyntaxKind::ParenClose {
            self.parse_property_attribute();
            while self.eat(SyntaxKind::Comma) {
                self.parse_property_attribute();
            }
        }

        self.expect(SyntaxKind::ParenClose, "`)` to close property attribute list");
        self.finish_node();
    }

    fn parse_property_attribute(&mut self) {
        self.start_node(SyntaxKind::PropertyAttribute);
        self.expect(SyntaxKind::Id, "property attribute");
        if self.eat(SyntaxKind::Equals) {
            self.expect(SyntaxKind::Id, "attribute value");
        }
        self.finish_node();
    }
}
