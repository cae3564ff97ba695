//! File pairing (§4.4): for every class name declared by any `@interface` or
//! `@implementation` across the input set, exactly one `ClassGenerationIntention` is
//! produced.

use indexmap::IndexMap;

use crate::parser::{ClassCategory, ClassImplementation, ClassInterface, ProtocolDeclaration, TopLevelItem};

/// One parsed input file: its name (used to derive output paths) and its top-level
/// declarations.
pub struct ParsedFile {
    pub name: String,
    pub items: Vec<TopLevelItem>,
}

/// Everything known about one class name across the whole input set.
#[derive(Default)]
pub struct ClassEntry {
    pub interface: Option<(String, ClassInterface)>,
    pub implementation: Option<(String, ClassImplementation)>,
    pub categories: Vec<ClassCategory>,
}

impl ClassEntry {
    /// The output file this class's Swift declaration is written to: the `.m` file's
    /// name if an implementation exists, else the header's (§4.4 "header-only classes").
    pub fn output_file(&self) -> Option<&str> {
        self.implementation
            .as_ref()
            .map(|(name, _)| name.as_str())
            .or_else(|| self.interface.as_ref().map(|(name, _)| name.as_str()))
    }
}

/// The result of pairing: classes keyed by name in first-declared order, plus every
/// `@protocol` declaration seen.
pub struct PairedDeclarations {
    pub classes: IndexMap<String, ClassEntry>,
    /// `(declaring file name, protocol name, node)`, in encounter order.
    pub protocols: Vec<(String, String, ProtocolDeclaration)>,
}

/// Groups every parsed file's top-level items by class name. `@class` forward
/// declarations produce no intention (§8 scenario 1) and are dropped here.
pub fn pair_files(files: &[ParsedFile]) -> PairedDeclarations {
    let mut classes: IndexMap<String, ClassEntry> = IndexMap::new();
    let mut protocols = Vec::new();

    for file in files {
        for item in &file.items {
            match item {
                TopLevelItem::Interface(interface) => {
                    let Some(name) = interface.identifier() else {
                        continue;
                    };
                    let entry = classes.entry(name.text().to_string()).or_default();
                    if entry.interface.is_none() {
                        entry.interface = Some((file.name.clone(), interface.clone()));
                    }
                }
                TopLevelItem::Implementation(implementation) => {
                    let Some(name) = implementation.identifier() else {
                        continue;
                    };
                    let entry = classes.entry(name.text().to_string()).or_default();
                    if entry.implementation.is_none() {
                        entry.implementation = Some((file.name.clone(), implementation.clone()));
                    }
                }
                TopLevelItem::Category(category) => {
                    let Some(name) = category.class_identifier() else {
                        continue;
                    };
                    let entry = classes.entry(name.text().to_string()).or_default();
                    entry.categories.push(category.clone());
                }
                TopLevelItem::Protocol(protocol) => {
                    if let Some(name) = protocol.identifier() {
                        protocols.push((file.name.clone(), name.text().to_string(), protocol.clone()));
                    }
                }
                TopLevelItem::ForwardClass(_) => {}
            }
        }
    }

    PairedDeclarations { classes, protocols }
}
