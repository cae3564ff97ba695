//! Source location primitives shared between the parser, diagnostics, and
//! intention graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A half-open byte offset range into a single source file's text.
///
/// Distinct from `rowan::TextRange` (which the parser uses internally for a
/// single file's CST): a `SourceRange` additionally carries which file it
/// belongs to, since the intention graph merges nodes originating in paired
/// `.h`/`.m` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: u32,
    pub end: u32,
}

impl SourceRange {
    pub fn new(start: u32, end: u32) -> Self {
        assert!(start <= end, "SourceRange start must not exceed end");
        Self { start, end }
    }

    pub fn empty(at: u32) -> Self {
        Self { start: at, end: at }
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Identifies which of a paired `.h`/`.m` file a `SourceRange` was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFile {
    Header,
    Implementation,
}

/// A range together with the file it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRange {
    pub file: SourceFile,
    pub range: SourceRange,
}

impl FileRange {
    pub fn new(file: SourceFile, range: SourceRange) -> Self {
        Self { file, range }
    }
}
