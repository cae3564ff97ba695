#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared primitives used by the `objcswift` crate: source-range types that
//! track which half of a paired `.h`/`.m` file a construct originated in.

mod span;

pub use span::{FileRange, SourceFile, SourceRange};
