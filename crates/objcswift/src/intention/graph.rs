//! The intention graph: a rooted tree `File → (Type | GlobalFn | GlobalVar | Typealias |
//! Protocol)*` (§3).
//!
//! Intentions are stored in a flat arena and referenced by `IntentionId`, with parent
//! links held as indices rather than pointers — an index-based arena makes the "weak
//! parent back-reference" invariant in §9 true by construction, the same way
//! `BuildGraph`'s `NodeId` avoids owning cycles.

use indexmap::IndexSet;
use objcswift_core::FileRange;

use super::storage::{AccessLevel, ValueStorage};

/// Index into `IntentionGraph::nodes`.
pub type IntentionId = u32;

/// The ordered tuple of keyword parts identifying a method (glossary: "Selector").
/// Equality compares keyword parts only, not parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector(pub Vec<String>);

impl Selector {
    pub fn bare(name: impl Into<String>) -> Self {
        Selector(vec![name.into()])
    }

    pub fn keyword_parts(keywords: impl IntoIterator<Item = String>) -> Self {
        Selector(keywords.into_iter().collect())
    }

    /// A `/`-joined display form, e.g. `initWithThing:` for a one-part selector.
    pub fn display(&self) -> String {
        if self.0.len() == 1 && !self.0[0].is_empty() {
            return self.0[0].clone();
        }
        self.0.iter().map(|k| format!("{k}:")).collect()
    }
}

/// Common header every intention carries, regardless of kind (§9: "tagged sum with a
/// common header record").
#[derive(Debug, Clone, Default)]
pub struct IntentionHeader {
    /// Which file and byte range this intention was built from, if any (§4.4: the
    /// builder "records source-of-origin per intention" across paired `.h`/`.m` files).
    pub source: Option<FileRange>,
    pub parent: Option<IntentionId>,
    pub access_level: AccessLevel,
    pub known_attributes: IndexSet<String>,
}

/// One method parameter: external keyword label and local name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParam {
    pub label: String,
    pub name: String,
    pub swift_type: String,
}

/// Kind-specific payload. Decorators dispatch on this tag rather than by virtual call
/// (§9).
#[derive(Debug, Clone)]
pub enum IntentionKind {
    /// Root of one output file's subtree.
    File { output_path: String },

    /// A generated Swift `class` (or in principle `struct`/`protocol` body), from a
    /// merged `@interface`/`@implementation` pair.
    ClassGeneration {
        name: String,
        superclass: Option<String>,
        conformances: Vec<String>,
    },

    /// A stored or computed property.
    Property {
        name: String,
        storage: ValueStorage,
        /// `setterAccessLevel < accessLevel` narrowing, from `readonly` (§4.4).
        setter_access: Option<AccessLevel>,
        is_static: bool,
        is_override: bool,
    },

    /// A method, either from an interface signature, an implementation body, or both.
    Method {
        selector: Selector,
        return_type: String,
        params: Vec<MethodParam>,
        has_body: bool,
        is_static: bool,
        is_override: bool,
        is_convenience: bool,
        is_mutating: bool,
        is_optional: bool,
    },

    /// `initWithThing:` style initialisers, kept distinct from ordinary methods because
    /// `convenience` only applies here (§4.5 step 6).
    Init {
        params: Vec<MethodParam>,
        has_body: bool,
        is_convenience: bool,
    },

    /// A `@protocol` declaration.
    Protocol { name: String, conformances: Vec<String> },
}

/// One node of the intention graph.
#[derive(Debug, Clone)]
pub struct Intention {
    pub header: IntentionHeader,
    pub kind: IntentionKind,
    pub children: Vec<IntentionId>,
}

/// The arena holding every intention produced from one `rewrite()` run.
#[derive(Debug, Default)]
pub struct IntentionGraph {
    nodes: Vec<Intention>,
    roots: Vec<IntentionId>,
}

impl IntentionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, header: IntentionHeader, kind: IntentionKind) -> IntentionId {
        let id = self.nodes.len() as IntentionId;
        self.nodes.push(Intention {
            header,
            kind,
            children: Vec::new(),
        });
        id
    }

    /// Adds a file root and records it in visitation order (§5 ordering guarantee ii).
    pub fn add_root(&mut self, header: IntentionHeader, kind: IntentionKind) -> IntentionId {
        let id = self.add(header, kind);
        self.roots.push(id);
        id
    }

    pub fn attach_child(&mut self, parent: IntentionId, child: IntentionId) {
        self.nodes[child as usize].header.parent = Some(parent);
        self.nodes[parent as usize].children.push(child);
    }

    pub fn get(&self, id: IntentionId) -> &Intention {
        &self.nodes[id as usize]
    }

    pub fn get_mut(&mut self, id: IntentionId) -> &mut Intention {
        &mut self.nodes[id as usize]
    }

    pub fn roots(&self) -> impl Iterator<Item = IntentionId> + '_ {
        self.roots.iter().copied()
    }

    pub fn children(&self, id: IntentionId) -> impl Iterator<Item = IntentionId> + '_ {
        self.nodes[id as usize].children.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
