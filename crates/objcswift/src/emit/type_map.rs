//! Pure Objective-C → Swift type mapping (§6.3).

use crate::parser::ObjcType;

/// Nullability in force for a type occurrence: an explicit specifier/attribute, an
/// `NS_ASSUME_NONNULL` region, or neither (§6.3). Region-marker tracking itself is out of
/// scope for this front-end, so callers that have no better information pass
/// `Unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nullability {
    NonNull,
    Nullable,
    Unspecified,
}

impl Nullability {
    fn from_specifiers(specifiers: &[String]) -> Option<Self> {
        specifiers.iter().find_map(|s| match s.as_str() {
            "nullable" | "_Nullable" => Some(Nullability::Nullable),
            "nonnull" | "_Nonnull" => Some(Nullability::NonNull),
            _ => None,
        })
    }
}

/// Maps a resolved `ObjcType` to its Swift spelling, given the nullability in force at
/// this occurrence (§6.3's table plus the "absent all three" unspecified-optional rule).
pub fn map_type(ty: &ObjcType, ambient_nullability: Nullability) -> String {
    match ty {
        ObjcType::Specified(specifiers, inner) => {
            let nullability =
                Nullability::from_specifiers(specifiers).unwrap_or(ambient_nullability);
            map_type(inner, nullability)
        }
        ObjcType::Pointer(inner) => map_pointer(inner, ambient_nullability),
        ObjcType::Id(protocols) => match protocols.first() {
            Some(protocol) => protocol.clone(),
            None => "AnyObject".to_string(),
        },
        ObjcType::Generic(name, args) => map_generic(name, args),
        ObjcType::Struct(name) => map_struct(name),
    }
}

fn map_struct(name: &str) -> String {
    match name {
        "BOOL" => "Bool".to_string(),
        "NSInteger" => "Int".to_string(),
        "NSUInteger" => "UInt".to_string(),
        "instancetype" => "Self".to_string(),
        "id" => "AnyObject".to_string(),
        "NSString" => "String".to_string(),
        "void" => String::new(),
        "" => "Any".to_string(),
        other => other.to_string(),
    }
}

fn map_pointer(inner: &ObjcType, nullability: Nullability) -> String {
    let base = map_type(inner, Nullability::NonNull);
    match nullability {
        Nullability::NonNull => base,
        Nullability::Nullable => format!("{base}?"),
        Nullability::Unspecified => format!("{base}!"),
    }
}

/// `NSArray<T*>*`/`NSDictionary<K*,V*>*` collapse to Swift collection sugar; any other
/// generic spells out as `Name<Args>`.
fn map_generic(name: &str, args: &[ObjcType]) -> String {
    match (name, args) {
        ("NSArray", [element]) => format!("[{}]", map_type(element, Nullability::NonNull)),
        ("NSDictionary", [key, value]) => format!(
            "[{}: {}]",
            map_type(key, Nullability::NonNull),
            map_type(value, Nullability::NonNull)
        ),
        _ => {
            let args: Vec<String> = args.iter().map(|a| map_type(a, Nullability::NonNull)).collect();
            format!("{name}<{}>", args.join(", "))
        }
    }
}

/// Maps a method's return type, honoring `void` → omitted (§6.3). `None` means the
/// declaration has no `->` clause at all.
pub fn map_return_type(ty: Option<&ObjcType>) -> Option<String> {
    match ty? {
        ObjcType::Struct(name) if name == "void" => None,
        other => Some(map_type(other, Nullability::Unspecified)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_bool_and_integer_aliases() {
        assert_eq!(
            map_type(&ObjcType::Struct("BOOL".into()), Nullability::Unspecified),
            "Bool"
        );
        assert_eq!(
            map_type(&ObjcType::Struct("NSInteger".into()), Nullability::Unspecified),
            "Int"
        );
    }

    #[test]
    fn maps_nonnull_nsstring_pointer_to_string() {
        let ty = ObjcType::Pointer(Box::new(ObjcType::Struct("NSString".into())));
        assert_eq!(map_type(&ty, Nullability::NonNull), "String");
        assert_eq!(map_type(&ty, Nullability::Nullable), "String?");
        assert_eq!(map_type(&ty, Nullability::Unspecified), "String!");
    }

    #[test]
    fn maps_nonnull_nsarray_to_swift_array() {
        let ty = ObjcType::Pointer(Box::new(ObjcType::Generic(
            "NSArray".into(),
            vec![ObjcType::Pointer(Box::new(ObjcType::Struct("NSString".into())))],
        )));
        assert_eq!(map_type(&ty, Nullability::NonNull), "[String]");
    }

    #[test]
    fn maps_id_with_and_without_protocols() {
        assert_eq!(map_type(&ObjcType::Id(vec![]), Nullability::Unspecified), "AnyObject");
        assert_eq!(
            map_type(&ObjcType::Id(vec!["MyProtocol".into()]), Nullability::Unspecified),
            "MyProtocol"
        );
    }

    #[test]
    fn void_return_type_is_omitted() {
        assert_eq!(map_return_type(Some(&ObjcType::Struct("void".into()))), None);
        assert_eq!(map_return_type(None), None);
    }
}
