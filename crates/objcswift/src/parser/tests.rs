use super::ast::{ObjcType, PropertyImplementationKind, TopLevelItem};
use super::lexer::lex;
use super::{Parser, SyntaxKind};

fn parse(source: &str) -> super::ParseResult {
    Parser::new(source, lex(source)).parse().expect("parse")
}

#[test]
fn forward_declaration_only_produces_no_errors() {
    let result = parse("@class MyClass;");
    assert_eq!(result.diagnostics.error_count(), 0);
    let items: Vec<_> = result.root.items().collect();
    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], TopLevelItem::ForwardClass(_)));
}

#[test]
fn empty_interface_has_identifier_and_keyword_nodes() {
    let result = parse("@interface MyClass\n@end");
    assert_eq!(result.diagnostics.error_count(), 0);
    let items: Vec<_> = result.root.items().collect();
    let TopLevelItem::Interface(interface) = &items[0] else {
        panic!("expected ClassInterface");
    };
    assert_eq!(interface.identifier().unwrap().text(), "MyClass");
    assert!(interface.ivars().is_none());

    let keywords: Vec<_> = interface.keywords().map(|t| t.kind()).collect();
    assert!(keywords.contains(&SyntaxKind::AtInterface));
    assert!(keywords.contains(&SyntaxKind::AtEnd));
}

#[test]
fn ivars_resolve_ownership_types() {
    let source = "@interface MyClass {\n  NSString *_myString;\n  __weak id _delegate;\n}\n@end";
    let result = parse(source);
    assert_eq!(result.diagnostics.error_count(), 0);
    let items: Vec<_> = result.root.items().collect();
    let TopLevelItem::Interface(interface) = &items[0] else {
        panic!("expected ClassInterface");
    };
    let ivars: Vec<_> = interface.ivars().unwrap().ivars().collect();
    assert_eq!(ivars.len(), 2);

    assert_eq!(ivars[0].identifier().unwrap().text(), "_myString");
    assert_eq!(
        ivars[0].objc_type().unwrap().resolve(),
        ObjcType::Pointer(Box::new(ObjcType::Struct("NSString".to_string())))
    );

    assert_eq!(ivars[1].identifier().unwrap().text(), "_delegate");
    assert_eq!(
        ivars[1].objc_type().unwrap().resolve(),
        ObjcType::Specified(vec!["__weak".to_string()], Box::new(ObjcType::Id(vec![])))
    );
}

#[test]
fn property_implementations_parse_synthesize_and_dynamic() {
    let source = "@implementation MyClass\n@synthesize abc;\n@dynamic def, ghi=jlm;\n@end";
    let result = parse(source);
    assert_eq!(result.diagnostics.error_count(), 0);
    let items: Vec<_> = result.root.items().collect();
    let TopLevelItem::Implementation(implementation) = &items[0] else {
        panic!("expected ClassImplementation");
    };

    let impls: Vec<_> = implementation.property_implementations().collect();
    assert_eq!(impls.len(), 2);

    assert_eq!(impls[0].kind(), Some(PropertyImplementationKind::Synthesize));
    let items0: Vec<_> = impls[0].items().collect();
    assert_eq!(items0.len(), 1);
    assert_eq!(items0[0].property_name().unwrap().text(), "abc");
    assert!(items0[0].ivar_name().is_none());

    assert_eq!(impls[1].kind(), Some(PropertyImplementationKind::Dynamic));
    let items1: Vec<_> = impls[1].items().collect();
    assert_eq!(items1.len(), 2);
    assert_eq!(items1[0].property_name().unwrap().text(), "def");
    assert!(items1[0].ivar_name().is_none());
    assert_eq!(items1[1].property_name().unwrap().text(), "ghi");
    assert_eq!(items1[1].ivar_name().unwrap().text(), "jlm");
}

#[test]
fn protocol_list_recovers_from_stray_comma() {
    let source = "@interface MyClass : Superclass <MyProtocol1, >\n@end";
    let result = parse(source);
    assert!(result.diagnostics.error_count() > 0);

    let items: Vec<_> = result.root.items().collect();
    let TopLevelItem::Interface(interface) = &items[0] else {
        panic!("expected ClassInterface");
    };
    let list = interface.protocol_list().expect("protocol list");
    let protocols: Vec<_> = list.protocols().map(|t| t.text().to_string()).collect();
    assert_eq!(protocols, vec!["MyProtocol1".to_string()]);
    assert!(list.open_angle().is_some());
    assert!(list.close_angle().is_some());
}

#[test]
fn method_signature_with_keyword_parts() {
    let source = "@interface MyClass\n- (instancetype)initWithThing:(NSString *)thing;\n@end";
    let result = parse(source);
    assert_eq!(result.diagnostics.error_count(), 0);
    let items: Vec<_> = result.root.items().collect();
    let TopLevelItem::Interface(interface) = &items[0] else {
        panic!("expected ClassInterface");
    };
    let methods: Vec<_> = interface.methods().collect();
    assert_eq!(methods.len(), 1);
    let parts: Vec<_> = methods[0].selector_parts().collect();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].keyword().unwrap().text(), "initWithThing");
    assert_eq!(parts[0].param_name().unwrap().text(), "thing");
}

#[test]
fn unrecognized_top_level_token_recovers_to_next_interface() {
    let source = "&&&\n@interface MyClass\n@end";
    let result = parse(source);
    assert!(result.diagnostics.error_count() > 0);
    let items: Vec<_> = result.root.items().collect();
    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], TopLevelItem::Interface(_)));
}
