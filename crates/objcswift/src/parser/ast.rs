//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(GlobalContext, GlobalContext);
ast_node!(ClassInterface, ClassInterface);
ast_node!(ClassImplementation, ClassImplementation);
ast_node!(ClassCategory, ClassCategory);
ast_node!(ProtocolDeclaration, ProtocolDeclaration);
ast_node!(ProtocolReferenceList, ProtocolReferenceList);
ast_node!(ForwardClassDeclaration, ForwardClassDeclaration);
ast_node!(IVarsList, IVarsList);
ast_node!(IVarDecl, IVarDecl);
ast_node!(PropertyDeclaration, PropertyDeclaration);
ast_node!(PropertyAttributeList, PropertyAttributeList);
ast_node!(PropertyAttribute, PropertyAttribute);
ast_node!(PropertyImplementation, PropertyImplementation);
ast_node!(PropertyImplementationItem, PropertyImplementationItem);
ast_node!(MethodSignature, MethodSignature);
ast_node!(MethodSelectorPart, MethodSelectorPart);
ast_node!(MethodBody, MethodBody);
ast_node!(ObjcTypeNode, ObjcType);
ast_node!(TypeSpecifierList, TypeSpecifierList);
ast_node!(TypeArgumentList, TypeArgumentList);

/// Resolved form of an `ObjcTypeNode`, mirroring the sum type in §3: pointer, generic,
/// and specifier wrapping are peeled off recursively from the CST shape the type grammar
/// produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjcType {
    Struct(String),
    Id(Vec<String>),
    Pointer(Box<ObjcType>),
    Generic(String, Vec<ObjcType>),
    Specified(Vec<String>, Box<ObjcType>),
}

impl ObjcTypeNode {
    /// Resolves the CST shape into the `ObjcType` sum.
    pub fn resolve(&self) -> ObjcType {
        let node = &self.0;

        if let Some(specifiers) = node.children().find_map(TypeSpecifierList::cast) {
            let names: Vec<String> = specifiers
                .as_cst()
                .children_with_tokens()
                .filter_map(|it| it.into_token())
                .filter(|t| t.kind() == SyntaxKind::Id)
                .map(|t| t.text().to_string())
                .collect();
            let inner = node
                .children()
                .find_map(ObjcTypeNode::cast)
                .map(|n| n.resolve())
                .unwrap_or_else(|| ObjcType::Struct(String::new()));
            return ObjcType::Specified(names, Box::new(inner));
        }

        let star_count = node
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind() == SyntaxKind::Star)
            .count();

        let base = self.resolve_base();

        (0..star_count).fold(base, |acc, _| ObjcType::Pointer(Box::new(acc)))
    }

    fn resolve_base(&self) -> ObjcType {
        let node = &self.0;
        let base_name = node
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::Id)
            .map(|t| t.text().to_string());

        match base_name.as_deref() {
            Some("id") => {
                let protocols = node
                    .children()
                    .find_map(ProtocolReferenceList::cast)
                    .map(|list| list.protocols().map(|t| t.text().to_string()).collect())
                    .unwrap_or_default();
                ObjcType::Id(protocols)
            }
            Some(name) => {
                if let Some(args) = node.children().find_map(TypeArgumentList::cast) {
                    let args = args
                        .as_cst()
                        .children()
                        .filter_map(ObjcTypeNode::cast)
                        .map(|n| n.resolve())
                        .collect();
                    ObjcType::Generic(name.to_string(), args)
                } else {
                    ObjcType::Struct(name.to_string())
                }
            }
            None => ObjcType::Struct(String::new()),
        }
    }
}

/// Any declaration directly inside a `GlobalContext`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopLevelItem {
    Interface(ClassInterface),
    Implementation(ClassImplementation),
    Category(ClassCategory),
    Protocol(ProtocolDeclaration),
    ForwardClass(ForwardClassDeclaration),
}

impl TopLevelItem {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::ClassInterface => ClassInterface::cast(node).map(TopLevelItem::Interface),
            SyntaxKind::ClassImplementation => {
                ClassImplementation::cast(node).map(TopLevelItem::Implementation)
            }
            SyntaxKind::ClassCategory => ClassCategory::cast(node).map(TopLevelItem::Category),
            SyntaxKind::ProtocolDeclaration => {
                ProtocolDeclaration::cast(node).map(TopLevelItem::Protocol)
            }
            SyntaxKind::ForwardClassDeclaration => {
                ForwardClassDeclaration::cast(node).map(TopLevelItem::ForwardClass)
            }
            _ => None,
        }
    }
}

/// Kind of a `@property` implementation node: which keyword introduced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyImplementationKind {
    Synthesize,
    Dynamic,
}

fn find_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

fn identifier_children(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| t.kind() == SyntaxKind::Id)
}

/// The inner token of each direct `KeywordNode` child (§4.2: at-keywords are attached as
/// first-class `KeywordNode` children, not bare tokens).
fn keyword_children(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children()
        .filter(|n| n.kind() == SyntaxKind::KeywordNode)
        .filter_map(|n| {
            n.children_with_tokens()
                .filter_map(|it| it.into_token())
                .next()
        })
}

fn find_keyword(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    keyword_children(node).find(|t| t.kind() == kind)
}

impl GlobalContext {
    pub fn items(&self) -> impl Iterator<Item = TopLevelItem> + '_ {
        self.0.children().filter_map(TopLevelItem::cast)
    }

    pub fn keywords(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        keyword_children(&self.0)
    }
}

impl ClassInterface {
    /// The class identifier. §3 invariant: exactly one, always present on success.
    pub fn identifier(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).next()
    }

    /// The superclass identifier, if a `: Superclass` clause is present.
    pub fn superclass(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).nth(1)
    }

    pub fn protocol_list(&self) -> Option<ProtocolReferenceList> {
        self.0.children().find_map(ProtocolReferenceList::cast)
    }

    pub fn ivars(&self) -> Option<IVarsList> {
        self.0.children().find_map(IVarsList::cast)
    }

    pub fn properties(&self) -> impl Iterator<Item = PropertyDeclaration> + '_ {
        self.0.children().filter_map(PropertyDeclaration::cast)
    }

    pub fn methods(&self) -> impl Iterator<Item = MethodSignature> + '_ {
        self.0.children().filter_map(MethodSignature::cast)
    }

    pub fn keywords(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        keyword_children(&self.0)
    }
}

impl ClassImplementation {
    pub fn identifier(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).next()
    }

    pub fn methods(&self) -> impl Iterator<Item = MethodSignature> + '_ {
        self.0.children().filter_map(MethodSignature::cast)
    }

    pub fn property_implementations(&self) -> impl Iterator<Item = PropertyImplementation> + '_ {
        self.0.children().filter_map(PropertyImplementation::cast)
    }

    pub fn keywords(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        keyword_children(&self.0)
    }
}

impl ClassCategory {
    pub fn class_identifier(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).next()
    }

    /// The parenthesized category name; absent for a class extension `()`.
    pub fn category_name(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).nth(1)
    }

    pub fn protocol_list(&self) -> Option<ProtocolReferenceList> {
        self.0.children().find_map(ProtocolReferenceList::cast)
    }

    pub fn methods(&self) -> impl Iterator<Item = MethodSignature> + '_ {
        self.0.children().filter_map(MethodSignature::cast)
    }
}

impl ProtocolDeclaration {
    pub fn identifier(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).next()
    }

    pub fn protocol_list(&self) -> Option<ProtocolReferenceList> {
        self.0.children().find_map(ProtocolReferenceList::cast)
    }

    pub fn methods(&self) -> impl Iterator<Item = MethodSignature> + '_ {
        self.0.children().filter_map(MethodSignature::cast)
    }

    /// Methods paired with whether they fall under an `@optional` marker: the last
    /// `@optional`/`@required` keyword seen so far, defaulting to required.
    pub fn methods_with_optionality(&self) -> Vec<(MethodSignature, bool)> {
        let mut optional = false;
        let mut out = Vec::new();
        for child in self.0.children_with_tokens() {
            let rowan::NodeOrToken::Node(n) = child else {
                continue;
            };
            if n.kind() == SyntaxKind::KeywordNode {
                if let Some(t) = n
                    .children_with_tokens()
                    .filter_map(|it| it.into_token())
                    .next()
                {
                    match t.kind() {
                        SyntaxKind::AtOptional => optional = true,
                        SyntaxKind::AtRequired => optional = false,
                        _ => {}
                    }
                }
                continue;
            }
            if let Some(method) = MethodSignature::cast(n) {
                out.push((method, optional));
            }
        }
        out
    }
}

impl ForwardClassDeclaration {
    pub fn identifiers(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        identifier_children(&self.0)
    }
}

impl ProtocolReferenceList {
    /// Ordered list of protocol identifiers. Recovery guarantees this is never empty on
    /// a tree that contains at least one valid identifier before the error (§4.2).
    pub fn protocols(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        identifier_children(&self.0)
    }

    pub fn open_angle(&self) -> Option<SyntaxToken> {
        find_token(&self.0, SyntaxKind::Lt)
    }

    pub fn close_angle(&self) -> Option<SyntaxToken> {
        find_token(&self.0, SyntaxKind::Gt)
    }
}

impl IVarsList {
    pub fn ivars(&self) -> impl Iterator<Item = IVarDecl> + '_ {
        self.0.children().filter_map(IVarDecl::cast)
    }

    /// Ivars paired with their resolved visibility: the last `@private`/`@protected`/
    /// `@package`/`@public` keyword seen so far, defaulting to `@protected` (§3).
    pub fn ivars_with_visibility(&self) -> Vec<(IVarDecl, IVarVisibility)> {
        let mut visibility = IVarVisibility::Protected;
        let mut out = Vec::new();
        for child in self.0.children_with_tokens() {
            match child {
                rowan::NodeOrToken::Token(t) => {
                    visibility = match t.kind() {
                        SyntaxKind::AtPrivate => IVarVisibility::Private,
                        SyntaxKind::AtProtected => IVarVisibility::Protected,
                        SyntaxKind::AtPackage => IVarVisibility::Package,
                        SyntaxKind::AtPublic => IVarVisibility::Public,
                        _ => visibility,
                    };
                }
                rowan::NodeOrToken::Node(n) => {
                    if let Some(ivar) = IVarDecl::cast(n) {
                        out.push((ivar, visibility));
                    }
                }
            }
        }
        out
    }
}

/// Visibility of an ivar, per the last visibility keyword preceding it (defaults to
/// `@protected` per §3's invariant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IVarVisibility {
    Private,
    Protected,
    Package,
    Public,
}

impl IVarDecl {
    pub fn identifier(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).last()
    }

    pub fn objc_type(&self) -> Option<ObjcTypeNode> {
        self.0.children().find_map(ObjcTypeNode::cast)
    }
}

impl PropertyDeclaration {
    pub fn at_property_keyword(&self) -> Option<SyntaxToken> {
        find_keyword(&self.0, SyntaxKind::AtProperty)
    }

    pub fn attributes(&self) -> Option<PropertyAttributeList> {
        self.0.children().find_map(PropertyAttributeList::cast)
    }

    pub fn objc_type(&self) -> Option<ObjcTypeNode> {
        self.0.children().find_map(ObjcTypeNode::cast)
    }

    pub fn identifier(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).last()
    }
}

impl PropertyAttributeList {
    pub fn attributes(&self) -> impl Iterator<Item = PropertyAttribute> + '_ {
        self.0.children().filter_map(PropertyAttribute::cast)
    }
}

impl PropertyAttribute {
    /// The attribute keyword (`nonatomic`, `copy`, `getter`, …).
    pub fn name(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).next()
    }

    /// The value of a key-value attribute (`getter=value`), if present.
    pub fn value(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).nth(1)
    }
}

impl PropertyImplementation {
    pub fn kind(&self) -> Option<PropertyImplementationKind> {
        let keyword = keyword_children(&self.0)
            .find(|t| matches!(t.kind(), SyntaxKind::AtSynthesize | SyntaxKind::AtDynamic))?;
        Some(match keyword.kind() {
            SyntaxKind::AtSynthesize => PropertyImplementationKind::Synthesize,
            _ => PropertyImplementationKind::Dynamic,
        })
    }

    pub fn items(&self) -> impl Iterator<Item = PropertyImplementationItem> + '_ {
        self.0.children().filter_map(PropertyImplementationItem::cast)
    }
}

impl PropertyImplementationItem {
    pub fn property_name(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).next()
    }

    /// The explicit backing ivar name after `=`, if present.
    pub fn ivar_name(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).nth(1)
    }
}

impl MethodSignature {
    pub fn return_type(&self) -> Option<ObjcTypeNode> {
        self.0.children().find_map(ObjcTypeNode::cast)
    }

    /// `+` for a class method, `-` for an instance method.
    pub fn is_class_method(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .next()
            .map(|t| t.text() == "+")
            .unwrap_or(false)
    }

    pub fn selector_parts(&self) -> impl Iterator<Item = MethodSelectorPart> + '_ {
        self.0.children().filter_map(MethodSelectorPart::cast)
    }

    /// The bare-identifier selector of a zero-argument method, if there are no
    /// `MethodSelectorPart` children.
    pub fn bare_selector(&self) -> Option<SyntaxToken> {
        if self.selector_parts().next().is_some() {
            return None;
        }
        identifier_children(&self.0).next()
    }

    pub fn body(&self) -> Option<MethodBody> {
        self.0.children().find_map(MethodBody::cast)
    }
}

impl MethodSelectorPart {
    /// The keyword before `:` (e.g. `initWithThing` in `initWithThing:thing:`).
    pub fn keyword(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).next()
    }

    pub fn param_type(&self) -> Option<ObjcTypeNode> {
        self.0.children().find_map(ObjcTypeNode::cast)
    }

    /// The parameter's local name.
    pub fn param_name(&self) -> Option<SyntaxToken> {
        identifier_children(&self.0).nth(1)
    }
}
