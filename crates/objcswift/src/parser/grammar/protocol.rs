//! `@protocol` declarations and protocol reference lists (`<A, B>`), including the
//! testable stray-comma recovery of §4.2.

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::PROTOCOL_LIST_RECOVERY;

impl Parser<'_> {
    /// `<A, B, …>`. On `<A, , >` accepts `A`, reports the stray comma, and terminates at
    /// `>`; the returned list contains exactly one protocol and both angle brackets are
    /// preserved as children.
    pub fn parse_protocol_reference_list(&mut self) {
        self.start_node(SyntaxKind::ProtocolReferenceList);
        self.expect(SyntaxKind::Lt, "`<` to start protocol reference list");

        if self.peek() == SyntaxKind::Id {
            self.bump();
            while self.peek() == SyntaxKind::Comma {
                self.bump();
                if self.peek() == SyntaxKind::Id {
                    self.bump();
                } else {
                    self.error(DiagnosticKind::SkippedMalformedEntry);
                    if self.peek() != SyntaxKind::Gt {
                        while !self.at_set(PROTOCOL_LIST_RECOVERY) && !self.should_stop() {
                            self.bump();
                        }
                    }
                    break;
                }
            }
        } else if self.peek() != SyntaxKind::Gt {
            self.error(DiagnosticKind::SkippedMalformedEntry);
        }

        self.expect(SyntaxKind::Gt, "`>` to close protocol reference list");
        self.finish_node();
    }

    /// `@protocol Name <List> methods… @end`.
    pub fn parse_protocol_declaration(&mut self) {
        self.start_node(SyntaxKind::ProtocolDeclaration);
        self.bump_keyword(); // @protocol

        self.expect(SyntaxKind::Id, "protocol name");

        if self.peek() == SyntaxKind::Lt {
            self.parse_protocol_reference_list();
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
