//! `@interface Name (Category) <Protocols> members @end` and the matching
//! `@implementation Name (Category) … @end` (§3, §4.2). Both share one node kind; which
//! at-keyword introduced it decides whether members carry bodies.

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    pub fn parse_class_category_node(&mut self) {
        self.start_node(SyntaxKind::ClassCategory);
        let is_impl = self.peek() == SyntaxKind::AtImplementation;
        self.bump_keyword(); // @interface or @implementation

        self.expect(SyntaxKind::Id, "class name");

        self.expect(SyntaxKind::ParenOpen, "`(` to start category name");
        if self.peek() != SyntaxKind::ParenClose {
            self.expect(SyntaxKind::Id, "category name");
        }
        self.expect(SyntaxKind::ParenClose, "`)` to close category name");

        if !is_impl && self.peek() == SyntaxKind::Lt {
            self.parse_protocol_reference_list();
        }

        if is_impl {
            self.parse_implementation_member_sequence();
        } else {
            self.parse_member_sequence(SyntaxKind::AtEnd);
        }

        if self.peek() == SyntaxKind::AtEnd {
            self.bump_keyword();
        } else {
            self.error(DiagnosticKind::MissingDeclarationEnd);
        }

        self.finish_node();
    }
}
