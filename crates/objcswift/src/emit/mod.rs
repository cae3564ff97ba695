//! Swift syntax emission: the modifier-decorator chain, type mapping, and the text
//! printer that walks an `IntentionGraph` (§4.5).

pub mod decorators;
pub mod printer;
pub mod type_map;

pub use decorators::{DecoratableElement, Modifier, decorate};
pub use printer::print_file;
pub use type_map::{Nullability, map_return_type, map_type};
