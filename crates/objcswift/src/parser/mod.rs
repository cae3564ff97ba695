//! Parser infrastructure for Objective-C source.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree
//! builder. Key design decisions borrowed from rust-analyzer, rnix-parser, and taplo:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: available for constructs needing retroactive restructuring
//! - Explicit recovery sets: per-production sets determine when to bail vs consume diagnostics
//!
//! # Recovery Strategy
//!
//! The parser is resilient - it always produces a tree. Recovery follows panic mode with
//! sentinel sets (§4.2): on an unexpected token the parser emits a diagnostic, discards
//! tokens until the nearest follow-set member, and returns a partially-populated node.
//!
//! However, fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
mod cst;
mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod cst_tests;
#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod tests;

pub use cst::{ObjCLang, SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    ClassCategory, ClassImplementation, ClassInterface, ForwardClassDeclaration, GlobalContext,
    IVarDecl, IVarVisibility, IVarsList, MethodBody, MethodSelectorPart, MethodSignature,
    ObjcType, ObjcTypeNode, PropertyAttribute, PropertyAttributeList, PropertyDeclaration,
    PropertyImplementation, PropertyImplementationItem, PropertyImplementationKind,
    ProtocolDeclaration, ProtocolReferenceList, TopLevelItem,
};

pub use core::{ParseResult, Parser};

pub use lexer::{Token, lex, token_text};
