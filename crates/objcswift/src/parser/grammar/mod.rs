//! Grammar productions for Objective-C source.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`, split by
//! construct the way §4.2 enumerates them.

mod category;
mod global;
mod implementation;
mod interface;
mod ivars;
mod method;
mod property;
mod protocol;
mod types;
