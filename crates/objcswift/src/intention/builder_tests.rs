use super::build;
use super::graph::IntentionKind;
use super::storage::{AccessLevel, Ownership};

fn graph_of(sources: &[(&str, &str)]) -> super::IntentionGraph {
    let owned: Vec<(String, String)> = sources
        .iter()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect();
    build(&owned).expect("build succeeds").0
}

fn only_file(graph: &super::IntentionGraph) -> super::IntentionId {
    let mut roots = graph.roots();
    let file_id = roots.next().expect("one file root");
    assert!(roots.next().is_none(), "expected exactly one file root");
    file_id
}

#[test]
fn weak_property_gets_weak_ownership() {
    let graph = graph_of(&[(
        "objc.h",
        "@interface MyClass\n@property (nonatomic, weak) id<MyDelegate> delegate;\n@end",
    )]);
    let file_id = only_file(&graph);
    let class_id = graph.children(file_id).next().expect("class");
    let property_id = graph.children(class_id).next().expect("property");
    let IntentionKind::Property { name, storage, .. } = &graph.get(property_id).kind else {
        panic!("expected property");
    };
    assert_eq!(name, "delegate");
    assert_eq!(storage.ownership, Ownership::Weak);
}

#[test]
fn readonly_property_narrows_setter_access() {
    let graph = graph_of(&[(
        "objc.h",
        "@interface MyClass\n@property (nonatomic, readonly) NSString *name;\n@end",
    )]);
    let file_id = only_file(&graph);
    let class_id = graph.children(file_id).next().expect("class");
    let property_id = graph.children(class_id).next().expect("property");
    let IntentionKind::Property { storage, setter_access, .. } = &graph.get(property_id).kind else {
        panic!("expected property");
    };
    assert!(storage.is_constant);
    assert_eq!(*setter_access, Some(AccessLevel::Private));
}

#[test]
fn interface_and_implementation_methods_merge_by_selector() {
    let graph = graph_of(&[
        ("objc.h", "@interface MyClass\n- (void)run;\n@end"),
        (
            "objc.m",
            "@implementation MyClass\n- (void)run {\n}\n@end",
        ),
    ]);
    let file_id = only_file(&graph);
    let class_id = graph.children(file_id).next().expect("class");
    let methods: Vec<_> = graph.children(class_id).collect();
    assert_eq!(methods.len(), 1, "interface and implementation declarations of the same selector merge into one member");
    let IntentionKind::Method { has_body, .. } = &graph.get(methods[0]).kind else {
        panic!("expected method");
    };
    assert!(*has_body, "body from the implementation attaches to the merged method");
}

#[test]
fn implementation_only_method_becomes_a_member() {
    let graph = graph_of(&[(
        "objc.m",
        "@implementation MyClass\n- (void)helper {\n}\n@end",
    )]);
    let file_id = only_file(&graph);
    let class_id = graph.children(file_id).next().expect("class");
    assert_eq!(graph.children(class_id).count(), 1);
}

#[test]
fn header_and_implementation_collapse_to_implementation_file() {
    let graph = graph_of(&[
        ("objc.h", "@interface MyClass\n- (void)run;\n@end"),
        ("objc.m", "@implementation MyClass\n- (void)run {\n}\n@end"),
    ]);
    assert_eq!(graph.roots().count(), 1, "one class across two files produces one output file");
    let file_id = only_file(&graph);
    let IntentionKind::File { output_path } = &graph.get(file_id).kind else {
        panic!("expected file");
    };
    assert_eq!(output_path, "objc.m");
}

#[test]
fn header_only_class_outputs_to_the_header() {
    let graph = graph_of(&[("objc.h", "@interface MyClass\n- (void)run;\n@end")]);
    let file_id = only_file(&graph);
    let IntentionKind::File { output_path } = &graph.get(file_id).kind else {
        panic!("expected file");
    };
    assert_eq!(output_path, "objc.h");
}

#[test]
fn protocol_method_under_optional_is_tagged() {
    let graph = graph_of(&[(
        "objc.h",
        "@protocol MyDelegate\n- (void)required;\n@optional\n- (void)maybe;\n@end",
    )]);
    let file_id = only_file(&graph);
    let protocol_id = graph.children(file_id).next().expect("protocol");
    let methods: Vec<_> = graph.children(protocol_id).collect();
    assert_eq!(methods.len(), 2);
    assert!(!graph.get(methods[0]).header.known_attributes.contains("optional"));
    assert!(graph.get(methods[1]).header.known_attributes.contains("optional"));
}

#[test]
fn unclaimed_ivar_is_promoted_to_a_property() {
    let graph = graph_of(&[(
        "objc.h",
        "@interface MyClass {\n@private\n    NSString *_cache;\n}\n@end",
    )]);
    let file_id = only_file(&graph);
    let class_id = graph.children(file_id).next().expect("class");
    let property_id = graph.children(class_id).next().expect("promoted ivar");
    let IntentionKind::Property { name, .. } = &graph.get(property_id).kind else {
        panic!("expected property");
    };
    assert_eq!(name, "_cache");
    assert_eq!(graph.get(property_id).header.access_level, AccessLevel::Private);
}

#[test]
fn ivar_backing_a_declared_property_is_not_promoted() {
    let graph = graph_of(&[(
        "objc.h",
        "@interface MyClass {\n    NSString *_name;\n}\n@property (nonatomic) NSString *name;\n@end",
    )]);
    let file_id = only_file(&graph);
    let class_id = graph.children(file_id).next().expect("class");
    let members: Vec<_> = graph.children(class_id).collect();
    assert_eq!(members.len(), 1, "_name backs the declared name property and is not promoted separately");
}

#[test]
fn ivar_explicitly_synthesized_to_a_different_name_is_not_promoted() {
    let graph = graph_of(&[
        (
            "objc.h",
            "@interface MyClass {\n    NSString *_storage;\n}\n@property (nonatomic) NSString *name;\n@end",
        ),
        (
            "objc.m",
            "@implementation MyClass\n@synthesize name = _storage;\n@end",
        ),
    ]);
    let file_id = only_file(&graph);
    let class_id = graph.children(file_id).next().expect("class");
    let members: Vec<_> = graph.children(class_id).collect();
    assert_eq!(members.len(), 1, "_storage is claimed by the explicit @synthesize binding");
}

#[test]
fn forward_declaration_produces_no_class() {
    let graph = graph_of(&[("objc.h", "@class MyClass;")]);
    assert!(graph.is_empty());
    assert_eq!(graph.roots().count(), 0);
}
