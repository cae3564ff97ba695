//! Type parsing: pointers, generics, specifiers, and the bare `id` with optional
//! protocol qualification, folded into the `ObjcType` CST shape per §4.2.

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;

const SPECIFIER_WORDS: &[&str] = &[
    "__weak",
    "__strong",
    "__unsafe_unretained",
    "const",
    "volatile",
    "nullable",
    "nonnull",
    "_Nullable",
    "_Nonnull",
];

impl Parser<'_> {
    pub(crate) fn parse_objc_type(&mut self) {
        self.start_node(SyntaxKind::ObjcType);

        if self.at_specifier_keyword() {
            self.start_node(SyntaxKind::TypeSpecifierList);
            while self.at_specifier_keyword() {
                self.bump();
            }
            self.finish_node();
            self.parse_objc_type();
        } else {
            self.parse_objc_base_type();
            self.parse_pointer_stars();
        }

        self.finish_node();
    }

    fn at_specifier_keyword(&mut self) -> bool {
        self.peek() == SyntaxKind::Id && SPECIFIER_WORDS.contains(&self.peek_text(0))
    }

    fn parse_objc_base_type(&mut self) {
        if self.peek() != SyntaxKind::Id {
            self.error(DiagnosticKind::UnexpectedToken);
            return;
        }

        let is_id = self.peek_text(0) == "id";
        self.bump();

        if self.peek() == SyntaxKind::Lt {
            if is_id {
                self.parse_protocol_reference_list();
            } else {
                self.parse_type_argument_list();
            }
        }
    }

    fn parse_type_argument_list(&mut self) {
        self.start_node(SyntaxKind::TypeArgumentList);
        self.bump(); // '<'

        if self.peek() != SyntaxKind::Gt {
            self.parse_objc_type();
            while self.eat(SyntaxKind::Comma) {
                self.parse_objc_type();
            }
        }

        self.expect(SyntaxKind::Gt, "`>` to close generic argument list");
        self.finish_node();
    }

    fn parse_pointer_stars(&mut self) {
        while self.peek() == SyntaxKind::Star {
            self.bump();
        }
    }
}
