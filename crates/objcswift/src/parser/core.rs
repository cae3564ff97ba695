//! Parser state machine and low-level operations.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::ast::GlobalContext;
use super::cst::token_sets::GLOBAL_FIRST;
use super::cst::{SyntaxKind, SyntaxNode, TokenSet};
use super::lexer::{Token, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

use crate::Error;

#[derive(Debug)]
pub struct ParseResult {
    pub root: GlobalContext,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    #[allow(dead_code)] // for future mismatch detection (e.g. `(]`)
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Trivia tokens (whitespace, comments) are buffered and flushed as leading trivia
/// when starting a new node. This gives predictable trivia attachment without backtracking.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) context_depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    exec_fuel_initial: Option<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

/// A scoped, guaranteed-release handle over a nested parse root.
///
/// Per-construct entry points (`parse_class_interface_node`, etc.) run inside one of
/// these: a fresh [`SyntaxKind::GlobalContext`] wrapper node is opened on acquisition and
/// closed on drop, whether the nonterminal completed normally or bailed out through
/// recovery. This is the "temporary context" pattern: the handle's destructor restores
/// the parser to the state it was in before the targeted entry point was called.
pub(super) struct TemporaryContext<'p, 'src> {
    parser: &'p mut Parser<'src>,
}

impl<'p, 'src> TemporaryContext<'p, 'src> {
    pub(super) fn parser(&mut self) -> &mut Parser<'src> {
        self.parser
    }
}

impl Drop for TemporaryContext<'_, '_> {
    fn drop(&mut self) {
        self.parser.finish_node();
        self.parser.context_depth = self.parser.context_depth.saturating_sub(1);
    }
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            context_depth: 0,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            debug_fuel: std::cell::Cell::new(256),
            exec_fuel_initial: None,
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            fatal_error: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_initial = limit;
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Consumes the whole token stream and returns a `GlobalContextNode` (§4.2).
    pub fn parse(mut self) -> Result<ParseResult, Error> {
        self.parse_global_context();
        let (cst, diagnostics, exec_fuel_consumed) = self.finish()?;
        let root =
            GlobalContext::cast(SyntaxNode::new_root(cst)).expect("parser always produces a root");
        Ok(ParseResult {
            root,
            diagnostics,
            exec_fuel_consumed,
        })
    }

    /// Runs `construct` inside a fresh temporary context and returns that context's root
    /// as a standalone tree, for targeted per-construct testing (§4.2).
    pub fn parse_construct(mut self, construct: impl FnOnce(&mut Parser<'src>)) -> Result<ParseResult, Error> {
        {
            let mut ctx = self.enter_temporary_context(SyntaxKind::GlobalContext);
            construct(ctx.parser());
        }
        let (cst, diagnostics, exec_fuel_consumed) = self.finish()?;
        let root =
            GlobalContext::cast(SyntaxNode::new_root(cst)).expect("parser always produces a root");
        Ok(ParseResult {
            root,
            diagnostics,
            exec_fuel_consumed,
        })
    }

    pub(super) fn enter_temporary_context(&mut self, kind: SyntaxKind) -> TemporaryContext<'_, 'src> {
        self.context_depth += 1;
        self.start_node(kind);
        TemporaryContext { parser: self }
    }

    fn finish(mut self) -> Result<(GreenNode, Diagnostics, u32), Error> {
        self.drain_trivia();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        let exec_fuel_consumed = match (self.exec_fuel_initial, self.exec_fuel_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        };
        Ok((self.builder.finish(), self.diagnostics, exec_fuel_consumed))
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    /// Returns `Error` at EOF (acts as sentinel).
    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn nth(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();

        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn peek(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.current()
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        let mut count = 0;
        let mut pos = self.pos;
        while pos < self.tokens.len() {
            let kind = self.tokens[pos].kind;
            if !kind.is_trivia() {
                if count == n {
                    return kind;
                }
                count += 1;
            }
            pos += 1;
        }
        SyntaxKind::Error
    }

    /// The text of the token `n` places ahead, skipping trivia. Used to classify
    /// identifier-spelled keywords (`id`, `__weak`, property attributes, …) by lexeme.
    pub(super) fn peek_text(&mut self, n: usize) -> &'src str {
        self.skip_trivia_to_buffer();
        let mut count = 0;
        let mut pos = self.pos;
        while pos < self.tokens.len() {
            let token = self.tokens[pos];
            if !token.kind.is_trivia() {
                if count == n {
                    return token_text(self.source, &token);
                }
                count += 1;
            }
            pos += 1;
        }
        ""
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    /// Wraps the current at-keyword token in a first-class `KeywordNode`, so the emitter
    /// and tests can recover it by filtered lookup (§4.2's "ordering invariants").
    pub(super) fn bump_keyword(&mut self) {
        self.start_node(SyntaxKind::KeywordNode);
        self.bump();
        self.finish_node();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    /// Wrap previously-parsed content using checkpoint.
    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");

        self.reset_debug_fuel();

        self.consume_exec_fuel();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    /// Bumps the current token, re-tagged as `kind`. Used to fold an `Id` token whose
    /// lexeme is a keyword word (`id`, `__weak`, `nonatomic`, …) into a `KeywordNode`
    /// without changing the lexer's token classification.
    pub(super) fn bump_as(&mut self, kind: SyntaxKind) {
        assert!(!self.eof(), "bump_as called at EOF");

        self.reset_debug_fuel();
        self.consume_exec_fuel();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn skip_token(&mut self) {
        assert!(!self.eof(), "skip_token called at EOF");

        self.reset_debug_fuel();

        self.consume_exec_fuel();

        self.pos += 1;
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume (allows parent recovery).
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error_msg(
            DiagnosticKind::UnexpectedToken,
            format!("expected {}", what),
        );
        false
    }

    /// Emit diagnostic with default message for the kind.
    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        self.error_msg(kind, kind.default_message());
    }

    /// Emit diagnostic with custom message.
    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        let pos = range.start();
        if self.last_diagnostic_pos == Some(pos) {
            return;
        }
        self.last_diagnostic_pos = Some(pos);
        self.diagnostics.report(kind, range).message(message).emit();
    }

    pub(super) fn warning_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        self.diagnostics
            .report_warning(kind, range)
            .message(message)
            .emit();
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        self.error_and_bump_msg(kind, kind.default_message());
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: &str) {
        self.error_msg(kind, message);
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Panic-mode recovery: emit a diagnostic, wrap and discard tokens until the nearest
    /// member of `recovery` (or EOF), leaving that token unconsumed (§4.2).
    pub(super) fn error_recover(&mut self, kind: DiagnosticKind, message: &str, recovery: TokenSet) {
        if self.at_set(recovery) || self.should_stop() {
            self.error_msg(kind, message);
            return;
        }

        self.start_node(SyntaxKind::Error);
        self.error_msg(kind, message);
        while !self.at_set(recovery) && !self.should_stop() {
            self.bump();
        }
        self.finish_node();
    }

    pub(super) fn synchronize_to_global_start(&mut self) -> bool {
        if self.should_stop() {
            return false;
        }

        if GLOBAL_FIRST.contains(self.peek()) {
            return false;
        }

        self.start_node(SyntaxKind::Error);
        while !self.should_stop() && !GLOBAL_FIRST.contains(self.peek()) {
            self.bump();
        }
        self.finish_node();
        true
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        self.delimiter_stack.push(OpenDelimiter {
            kind,
            span: self.current_span(),
        });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    pub(super) fn error_with_related(
        &mut self,
        kind: DiagnosticKind,
        message: impl Into<String>,
        related_msg: impl Into<String>,
        related_range: TextRange,
    ) {
        let range = self.current_span();
        let pos = range.start();
        if self.last_diagnostic_pos == Some(pos) {
            return;
        }
        self.last_diagnostic_pos = Some(pos);
        self.diagnostics
            .report(kind, range)
            .message(message)
            .related_to(related_msg, related_range)
            .emit();
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        for i in (0..self.pos).rev() {
            if !self.tokens[i].kind.is_trivia() {
                return Some(self.tokens[i].span.end());
            }
        }
        None
    }
}
