//! The `{ … }` ivar block directly following a class/superclass/protocol-list clause
//! (§3, §4.2). Visibility keywords apply to the suffix of ivars that follows them,
//! resolved later by [`IVarsList::ivars_with_visibility`](crate::parser::ast::IVarsList).

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::IVAR_BLOCK_RECOVERY;

impl Parser<'_> {
    pub(crate) fn parse_ivars_list(&mut self) {
        self.start_node(SyntaxKind::IVarsList);
        self.bump(); // '{'

        while !self.should_stop() && self.peek() != SyntaxKind::BraceClose {
            match self.peek() {
                SyntaxKind::AtPrivate
                | SyntaxKind::AtProtected
                | SyntaxKind::AtPackage
                | SyntaxKind::AtPublic => self.bump_keyword(),
                SyntaxKind::Id => self.parse_ivar_decl(),
                _ => {
                    if IVAR_BLOCK_RECOVERY.contains(self.peek()) {
                        break;
                    }
                    self.error_recover(
                        DiagnosticKind::SkippedMalformedEntry,
                        "expected an ivar declaration",
                        IVAR_BLOCK_RECOVERY,
                    );
                    if IVAR_BLOCK_RECOVERY.contains(self.peek()) {
                        break;
                    }
                }
            }
        }

        self.expect(SyntaxKind::BraceClose, "`}` to close ivar block");
        self.finish_node();
    }

    fn parse_ivar_decl(&mut self) {
        self.start_node(SyntaxKind::IVarDecl);
        self.parse_objc_type();
        self.expect(SyntaxKind::Id, "ivar name");
        if !self.eat(SyntaxKind::Semicolon) {
            self.error_recover(
                DiagnosticKind::MissingDeclarationEnd,
                "expected `;` to end ivar declaration",
                IVAR_BLOCK_RECOVERY,
            );
        }
        self.finish_node();
    }
}
