//! objcswift: transpiles Objective-C sources into idiomatic Swift.
//!
//! # Example
//!
//! ```
//! use objcswift::driver::rewrite;
//! use objcswift::io::{MemoryInputSource, MemoryInputSourcesProvider, MemoryWriterOutput};
//!
//! let provider = MemoryInputSourcesProvider::new(vec![MemoryInputSource::new(
//!     "objc.h",
//!     "@interface MyClass\n- (void)myMethod;\n@end",
//! )]);
//! let mut output = MemoryWriterOutput::new();
//!
//! rewrite(&provider, &mut output).expect("rewrite succeeds");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod driver;
pub mod emit;
pub mod intention;
pub mod io;
pub mod parser;

pub use diagnostics::{DiagnosticMessage, Diagnostics, DiagnosticsPrinter, Fix, RelatedInfo, Severity};
pub use driver::rewrite;

/// Errors that can occur while transpiling a source set.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// An input source could not be loaded (§7: fatal driver error).
    #[error("failed to load source {name}: {message}")]
    SourceLoadFailed { name: String, message: String },
}

/// Result type for transpilation operations.
pub type Result<T> = std::result::Result<T, Error>;
