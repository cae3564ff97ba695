//! `ValueStorage`, `Ownership`, and `AccessLevel` — the property-level facts the emitter's
//! decorator chain consults (§3, §4.5).

/// Swift access level. Default is `internal` (§4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccessLevel {
    Private,
    FilePrivate,
    Internal,
    Public,
    /// Emitted as the literal token `open` (§9 open question: the underlying syntax
    /// factory this was distilled from had no dedicated node for it).
    Open,
}

impl Default for AccessLevel {
    fn default() -> Self {
        AccessLevel::Internal
    }
}

impl AccessLevel {
    /// `None` when the access level should be omitted from emitted output (§4.5 step 1:
    /// "omits `internal`").
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            AccessLevel::Private => Some("private"),
            AccessLevel::FilePrivate => Some("fileprivate"),
            AccessLevel::Internal => None,
            AccessLevel::Public => Some("public"),
            AccessLevel::Open => Some("open"),
        }
    }

    /// Maps an ivar's `@private`/`@protected`/`@package`/`@public` visibility to its
    /// corresponding Swift access level (§4.4: Objective-C has no exact equivalent of
    /// `fileprivate`, used only for setter visibility narrowing).
    pub fn from_ivar_visibility(visibility: crate::parser::IVarVisibility) -> Self {
        use crate::parser::IVarVisibility::*;
        match visibility {
            Private => AccessLevel::Private,
            Protected | Package => AccessLevel::Internal,
            Public => AccessLevel::Public,
        }
    }
}

/// Ownership of a stored property, derived from its Objective-C attribute list (§4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    Strong,
    Weak,
    UnownedSafe,
    UnownedUnsafe,
}

impl Ownership {
    /// The modifier token(s) this ownership contributes; `strong` emits nothing (§4.5
    /// step 8).
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Ownership::Strong => None,
            Ownership::Weak => Some("weak"),
            Ownership::UnownedSafe => Some("unowned(safe)"),
            Ownership::UnownedUnsafe => Some("unowned(unsafe)"),
        }
    }
}

/// The resolved storage facts for a property or ivar-backed member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueStorage {
    pub swift_type: String,
    pub ownership: Ownership,
    pub is_constant: bool,
}

impl ValueStorage {
    pub fn new(swift_type: impl Into<String>, ownership: Ownership, is_constant: bool) -> Self {
        Self {
            swift_type: swift_type.into(),
            ownership,
            is_constant,
        }
    }
}
