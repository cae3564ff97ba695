//! Folds the concrete trees of every input file into one `IntentionGraph` (§4.4).

use indexmap::{IndexMap, IndexSet};
use objcswift_core::{FileRange, SourceFile, SourceRange};

use crate::diagnostics::Diagnostics;
use crate::emit::type_map::{Nullability, map_return_type, map_type};
use crate::parser::{MethodSignature, ObjcType, PropertyDeclaration, SyntaxNode, lex};
use crate::parser::Parser as ObjcParser;

use super::graph::{IntentionGraph, IntentionHeader, IntentionId, IntentionKind, MethodParam, Selector};
use super::pairing::{ClassEntry, ParsedFile, pair_files};
use super::storage::{AccessLevel, Ownership, ValueStorage};

/// Converts a CST node's byte range into a `FileRange` tagged with which half of a
/// paired `.h`/`.m` file it came from (§4.4: "records source-of-origin per intention").
fn source_of(file: SourceFile, node: &SyntaxNode) -> FileRange {
    let range = node.text_range();
    FileRange::new(file, SourceRange::new(range.start().into(), range.end().into()))
}

/// Parses every named source and merges the results into one intention graph, collecting
/// diagnostics from every file in the order they were supplied (§5 ordering guarantee iii).
pub fn build(sources: &[(String, String)]) -> crate::Result<(IntentionGraph, Diagnostics)> {
    let mut diagnostics = Diagnostics::new();
    let mut files = Vec::with_capacity(sources.len());

    for (name, text) in sources {
        let tokens = lex(text);
        let result = ObjcParser::new(text, tokens).parse()?;
        diagnostics.extend(result.diagnostics);
        files.push(ParsedFile {
            name: name.clone(),
            items: result.root.items().collect(),
        });
    }

    let graph = build_graph(&files);
    Ok((graph, diagnostics))
}

fn build_graph(files: &[ParsedFile]) -> IntentionGraph {
    let mut graph = IntentionGraph::new();
    let mut file_roots: IndexMap<String, IntentionId> = IndexMap::new();
    let paired = pair_files(files);

    for (class_name, entry) in paired.classes {
        let Some(output_path) = entry.output_file().map(str::to_string) else {
            continue;
        };
        let file_id = *file_roots.entry(output_path.clone()).or_insert_with(|| {
            graph.add_root(
                IntentionHeader::default(),
                IntentionKind::File {
                    output_path: output_path.clone(),
                },
            )
        });

        let class_id = build_class(&mut graph, &class_name, &entry);
        graph.attach_child(file_id, class_id);
    }

    for (file_name, protocol_name, protocol) in &paired.protocols {
        let file_id = *file_roots.entry(file_name.clone()).or_insert_with(|| {
            graph.add_root(
                IntentionHeader::default(),
                IntentionKind::File {
                    output_path: file_name.clone(),
                },
            )
        });

        let conformances = protocol
            .protocol_list()
            .map(|list| list.protocols().map(|t| t.text().to_string()).collect())
            .unwrap_or_default();
        let mut protocol_header = IntentionHeader::default();
        protocol_header.source = Some(source_of(SourceFile::Header, protocol.as_cst()));
        let protocol_id = graph.add(
            protocol_header,
            IntentionKind::Protocol {
                name: protocol_name.clone(),
                conformances,
            },
        );
        graph.attach_child(file_id, protocol_id);

        for (method, is_optional) in protocol.methods_with_optionality() {
            let method_id = build_method_from_signature(&mut graph, &method);
            if is_optional {
                graph
                    .get_mut(method_id)
                    .header
                    .known_attributes
                    .insert("optional".to_string());
            }
            graph.attach_child(protocol_id, method_id);
        }
    }

    graph
}

fn selector_of(sig: &MethodSignature) -> Selector {
    if let Some(bare) = sig.bare_selector() {
        return Selector::bare(bare.text());
    }
    Selector::keyword_parts(
        sig.selector_parts()
            .map(|part| part.keyword().map(|t| t.text().to_string()).unwrap_or_default()),
    )
}

fn params_of(sig: &MethodSignature) -> Vec<MethodParam> {
    sig.selector_parts()
        .map(|part| {
            let label = part.keyword().map(|t| t.text().to_string()).unwrap_or_default();
            let name = part.param_name().map(|t| t.text().to_string()).unwrap_or_default();
            let swift_type = part
                .param_type()
                .map(|t| map_type(&t.resolve(), Nullability::Unspecified))
                .unwrap_or_else(|| "Any".to_string());
            MethodParam { label, name, swift_type }
        })
        .collect()
}

fn return_type_of(sig: &MethodSignature) -> String {
    map_return_type(sig.return_type().map(|t| t.resolve()).as_ref()).unwrap_or_default()
}

struct MergedMethod {
    return_type: String,
    params: Vec<MethodParam>,
    has_body: bool,
    is_static: bool,
    source: FileRange,
}

/// Merges interface, implementation, and category method signatures by selector equality
/// (§4.4): a method declared in the interface and defined in the implementation is one
/// entry; a method appearing only in the implementation becomes a member too.
fn merge_methods(entry: &ClassEntry) -> IndexMap<Selector, MergedMethod> {
    let mut merged: IndexMap<Selector, MergedMethod> = IndexMap::new();

    let declared = entry.interface.iter().flat_map(|(_, i)| i.methods());
    for sig in declared {
        merged.insert(
            selector_of(&sig),
            MergedMethod {
                return_type: return_type_of(&sig),
                params: params_of(&sig),
                has_body: sig.body().is_some(),
                is_static: sig.is_class_method(),
                source: source_of(SourceFile::Header, sig.as_cst()),
            },
        );
    }

    let defined = entry
        .implementation
        .iter()
        .flat_map(|(_, i)| i.methods())
        .chain(entry.categories.iter().flat_map(|c| c.methods()));
    for sig in defined {
        let selector = selector_of(&sig);
        let has_body = sig.body().is_some();
        match merged.get_mut(&selector) {
            Some(existing) => existing.has_body = existing.has_body || has_body,
            None => {
                merged.insert(
                    selector,
                    MergedMethod {
                        return_type: return_type_of(&sig),
                        params: params_of(&sig),
                        has_body,
                        is_static: sig.is_class_method(),
                        source: source_of(SourceFile::Implementation, sig.as_cst()),
                    },
                );
            }
        }
    }

    merged
}

fn build_class(graph: &mut IntentionGraph, name: &str, entry: &ClassEntry) -> IntentionId {
    let superclass = entry
        .interface
        .as_ref()
        .and_then(|(_, i)| i.superclass())
        .map(|t| t.text().to_string())
        .unwrap_or_else(|| "NSObject".to_string());

    let conformances = entry
        .interface
        .as_ref()
        .and_then(|(_, i)| i.protocol_list())
        .map(|list| list.protocols().map(|t| t.text().to_string()).collect())
        .unwrap_or_default();

    let class_source = entry
        .interface
        .as_ref()
        .map(|(_, i)| source_of(SourceFile::Header, i.as_cst()))
        .or_else(|| entry.implementation.as_ref().map(|(_, i)| source_of(SourceFile::Implementation, i.as_cst())));
    let mut class_header = IntentionHeader::default();
    class_header.source = class_source;

    let class_id = graph.add(
        class_header,
        IntentionKind::ClassGeneration {
            name: name.to_string(),
            superclass: Some(superclass),
            conformances,
        },
    );

    let mut property_names: IndexSet<String> = IndexSet::new();
    if let Some((_, interface)) = &entry.interface {
        for property in interface.properties() {
            if let Some(name) = property.identifier() {
                property_names.insert(name.text().to_string());
            }
            let property_id = build_property(graph, &property);
            graph.attach_child(class_id, property_id);
        }
    }

    for ivar_id in promote_ivars(graph, entry, &property_names) {
        graph.attach_child(class_id, ivar_id);
    }

    for (selector, method) in merge_methods(entry) {
        let is_init = selector
            .0
            .first()
            .is_some_and(|first| first.starts_with("init"));
        let mut header = IntentionHeader::default();
        header.source = Some(method.source);
        let kind = if is_init {
            IntentionKind::Init {
                params: method.params,
                has_body: method.has_body,
                is_convenience: false,
            }
        } else {
            IntentionKind::Method {
                selector,
                return_type: method.return_type,
                params: method.params,
                has_body: method.has_body,
                is_static: method.is_static,
                is_override: false,
                is_convenience: false,
                is_mutating: false,
                is_optional: false,
            }
        };
        let method_id = graph.add(header, kind);
        graph.attach_child(class_id, method_id);
    }

    class_id
}

fn build_method_from_signature(graph: &mut IntentionGraph, sig: &MethodSignature) -> IntentionId {
    let selector = selector_of(sig);
    let params = params_of(sig);
    let is_init = selector.0.first().is_some_and(|first| first.starts_with("init"));
    let kind = if is_init {
        IntentionKind::Init {
            params,
            has_body: false,
            is_convenience: false,
        }
    } else {
        IntentionKind::Method {
            selector,
            return_type: return_type_of(sig),
            params,
            has_body: false,
            is_static: sig.is_class_method(),
            is_override: false,
            is_convenience: false,
            is_mutating: false,
            is_optional: false,
        }
    };
    let mut header = IntentionHeader::default();
    header.source = Some(source_of(SourceFile::Header, sig.as_cst()));
    graph.add(header, kind)
}

/// Property ownership/access derivation (§4.4): `weak` → `weak`; `assign`/
/// `unsafe_unretained` → `unownedUnsafe`; absence of either on an object type → `strong`.
/// `readonly` narrows the setter's access level.
fn build_property(graph: &mut IntentionGraph, prop: &PropertyDeclaration) -> IntentionId {
    let name = prop
        .identifier()
        .map(|t| t.text().to_string())
        .unwrap_or_default();
    let objc_type = prop.objc_type().map(|t| t.resolve()).unwrap_or(ObjcType::Struct(String::new()));
    let swift_type = map_type(&objc_type, Nullability::Unspecified);

    let attribute_names: IndexSet<String> = prop
        .attributes()
        .map(|list| list.attributes().filter_map(|a| a.name()).map(|t| t.text().to_string()).collect())
        .unwrap_or_default();

    let is_object_type = !matches!(objc_type, ObjcType::Struct(ref s) if matches!(s.as_str(), "BOOL" | "NSInteger" | "NSUInteger" | "void" | "" | "Int" | "UInt" | "Bool" | "Double" | "Float"));

    let ownership = if attribute_names.contains("weak") {
        Ownership::Weak
    } else if is_object_type && (attribute_names.contains("unsafe_unretained") || attribute_names.contains("assign")) {
        Ownership::UnownedUnsafe
    } else {
        Ownership::Strong
    };

    let is_constant = attribute_names.contains("readonly");
    let setter_access = is_constant.then_some(AccessLevel::Private);

    let storage = ValueStorage::new(swift_type, ownership, is_constant);
    let mut header = IntentionHeader::default();
    header.known_attributes = attribute_names;
    header.source = Some(source_of(SourceFile::Header, prop.as_cst()));

    graph.add(
        header,
        IntentionKind::Property {
            name,
            storage,
            setter_access,
            is_static: false,
            is_override: false,
        },
    )
}

/// Ivars not claimed as another property's backing storage — via an explicit
/// `@synthesize name=ivar`, the `@synthesize name` → `_name` convention, or simply
/// sharing a declared property's `_name` — are promoted to stored properties in their
/// own right (§2 step 4: "promotes ivars to stored properties where appropriate").
fn promote_ivars(
    graph: &mut IntentionGraph,
    entry: &ClassEntry,
    property_names: &IndexSet<String>,
) -> Vec<IntentionId> {
    let Some((_, interface)) = &entry.interface else {
        return Vec::new();
    };
    let Some(ivars) = interface.ivars() else {
        return Vec::new();
    };

    let mut claimed: IndexSet<String> = property_names.iter().map(|name| format!("_{name}")).collect();
    if let Some((_, implementation)) = &entry.implementation {
        for property_impl in implementation.property_implementations() {
            for item in property_impl.items() {
                let property_name = item.property_name().map(|t| t.text().to_string());
                let ivar_name = item
                    .ivar_name()
                    .map(|t| t.text().to_string())
                    .or_else(|| property_name.map(|p| format!("_{p}")));
                if let Some(ivar_name) = ivar_name {
                    claimed.insert(ivar_name);
                }
            }
        }
    }

    ivars
        .ivars_with_visibility()
        .into_iter()
        .filter_map(|(ivar, visibility)| {
            let name = ivar.identifier()?.text().to_string();
            if claimed.contains(&name) {
                return None;
            }
            let objc_type = ivar
                .objc_type()
                .map(|t| t.resolve())
                .unwrap_or(ObjcType::Struct(String::new()));
            let swift_type = map_type(&objc_type, Nullability::Unspecified);
            let mut header = IntentionHeader::default();
            header.access_level = AccessLevel::from_ivar_visibility(visibility);
            header.source = Some(source_of(SourceFile::Header, ivar.as_cst()));
            Some(graph.add(
                header,
                IntentionKind::Property {
                    name,
                    storage: ValueStorage::new(swift_type, ownership_of(&objc_type), false),
                    setter_access: None,
                    is_static: false,
                    is_override: false,
                },
            ))
        })
        .collect()
}

fn ownership_of(ty: &ObjcType) -> Ownership {
    if let ObjcType::Specified(specifiers, _) = ty {
        if specifiers.iter().any(|s| s == "__weak") {
            return Ownership::Weak;
        }
        if specifiers.iter().any(|s| s == "__unsafe_unretained") {
            return Ownership::UnownedUnsafe;
        }
    }
    Ownership::Strong
}
