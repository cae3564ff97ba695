//! `@interface Name : Superclass <Protocols> { ivars } members @end` (§3, §4.2).

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    pub fn parse_class_interface_node(&mut self) {
        self.start_node(SyntaxKind::ClassInterface);
        self.bump_keyword(); // @interface

        self.expect(SyntaxKind::Id, "class name");

        if self.eat(SyntaxKind::Colon) {
            self.expect(SyntaxKind::Id, "superclass name");
        }

        if self.peek() == SyntaxKind::Lt {
            self.parse_protocol_reference_list();
        }

        if self.peek() == SyntaxKind::BraceOpen {
            self.parse_ivars_list();
        }

        self.parse_member_sequence(SyntaxKind::AtEnd);

        if self.peek() == SyntaxKind::AtEnd {
            self.bump_keyword();
        } else {
            self.error(DiagnosticKind::MissingDeclarationEnd);
        }

        self.finish_node();
    }
}
