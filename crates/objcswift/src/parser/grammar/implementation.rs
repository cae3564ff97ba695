//! `@implementation Name` bodies: methods with bodies, and `@synthesize`/`@dynamic`
//! property implementations (§3, §4.2, §4.4).

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::BODY_RECOVERY;

impl Parser<'_> {
    pub fn parse_class_implementation(&mut self) {
        self.start_node(SyntaxKind::ClassImplementation);
        self.bump_keyword(); // @implementation

        self.expect(SyntaxKind::Id, "class name");

        self.parse_implementation_member_sequence();

        if self.peek() == SyntaxKind::AtEnd {
            self.bump_keyword();
        } else {
            self.error(DiagnosticKind::MissingDeclarationEnd);
        }

        self.finish_node();
    }

    pub(crate) fn parse_implementation_member_sequence(&mut self) {
        loop {
            if self.should_stop() || self.peek() == SyntaxKind::AtEnd {
                return;
            }
            match self.peek() {
                SyntaxKind::AtSynthesize | SyntaxKind::AtDynamic => {
                    self.parse_property_implementation()
                }
                SyntaxKind::Plus | SyntaxKind::Minus => self.parse_method_signature(true),
                _ => {
                    if BODY_RECOVERY.contains(self.peek()) {
                        return;
                    }
                    self.error_recover(
                        DiagnosticKind::UnexpectedToken,
                        "expected a method or property implementation",
                        BODY_RECOVERY,
                    );
                    if !BODY_RECOVERY.contains(self.peek()) {
                        return;
                    }
                }
            }
        }
    }

    /// `@synthesize abc, def=_def;` / `@dynamic abc;`.
    pub(crate) fn parse_property_implementation(&mut self) {
        self.start_node(SyntaxKind::PropertyImplementation);
        self.bump_keyword(); // @synthesize or @dynamic

        self.parse_property_implementation_item();
        while self.eat(SyntaxKind::Comma) {
            self.parse_property_implementation_item();
        }

        if !self.eat(SyntaxKind::Semicolon) {
            self.error_recover(
                DiagnosticKind::MissingDeclarationEnd,
                "expected `;` to end property implementation",
                BODY_RECOVERY,
            );
        }

        self.finish_node();
    }

    fn parse_property_implementation_item(&mut self) {
        self.start_node(SyntaxKind::PropertyImplementationItem);
        self.expect(SyntaxKind::Id, "property name");
        if self.eat(SyntaxKind::Equals) {
            self.expect(SyntaxKind::Id, "backing ivar name");
        }
        self.finish_node();
    }
}
