//! The intention graph and the builder that folds parsed files into it (§3, §4.4).

mod builder;
mod graph;
mod pairing;
mod storage;

#[cfg(test)]
mod builder_tests;

pub use builder::build;
pub use graph::{Intention, IntentionGraph, IntentionHeader, IntentionId, IntentionKind, MethodParam, Selector};
pub use pairing::{ClassEntry, PairedDeclarations, ParsedFile, pair_files};
pub use storage::{AccessLevel, Ownership, ValueStorage};
