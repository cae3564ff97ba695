//! The modifier-decorator chain (§4.5).
//!
//! Decorators are composable, pure functions of one `DecoratableElement`. The chain's
//! *registration order* is itself part of the specification (§9: "not derivable from the
//! decorators themselves") — reordering `CHAIN` changes emitted output.

use crate::intention::{AccessLevel, Intention, IntentionKind, Ownership};

/// The decoratable facts of one member or local declaration, independent of which
/// `IntentionKind` produced them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoratableElement {
    pub access_level: AccessLevel,
    pub setter_access: Option<AccessLevel>,
    pub is_protocol_optional: bool,
    pub is_static: bool,
    pub is_override: bool,
    pub is_convenience: bool,
    pub is_mutating: bool,
    pub ownership: Option<Ownership>,
}

impl DecoratableElement {
    /// Derives the decoratable facts from one intention. `is_protocol_optional` must be
    /// supplied by the caller since optionality is a property of the enclosing
    /// `@protocol`'s member sequence, not of the method intention itself.
    pub fn from_intention(intention: &Intention, is_protocol_optional: bool) -> Self {
        let mut element = Self {
            access_level: intention.header.access_level,
            is_protocol_optional,
            ..Self::default()
        };
        match &intention.kind {
            IntentionKind::Property {
                storage,
                setter_access,
                is_static,
                is_override,
                ..
            } => {
                element.setter_access = *setter_access;
                element.is_static = *is_static;
                element.is_override = *is_override;
                element.ownership = Some(storage.ownership);
            }
            IntentionKind::Method {
                is_static,
                is_override,
                is_mutating,
                ..
            } => {
                element.is_static = *is_static;
                element.is_override = *is_override;
                element.is_mutating = *is_mutating;
            }
            IntentionKind::Init { is_convenience, .. } => {
                element.is_convenience = *is_convenience;
            }
            _ => {}
        }
        element
    }
}

/// A single emitted modifier token, carrying the leading trivia threaded to it (§4.5:
/// "subsequent modifiers take no leading trivia").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub token: String,
    pub leading_trivia: String,
}

type DecoratorFn = fn(&DecoratableElement) -> Vec<String>;

fn access_level_decorator(el: &DecoratableElement) -> Vec<String> {
    el.access_level.keyword().map(str::to_string).into_iter().collect()
}

fn setter_access_decorator(el: &DecoratableElement) -> Vec<String> {
    el.setter_access
        .and_then(AccessLevel::keyword)
        .map(|k| format!("{k}(set)"))
        .into_iter()
        .collect()
}

fn optional_decorator(el: &DecoratableElement) -> Vec<String> {
    if el.is_protocol_optional {
        vec!["optional".to_string()]
    } else {
        Vec::new()
    }
}

fn static_decorator(el: &DecoratableElement) -> Vec<String> {
    if el.is_static {
        vec!["static".to_string()]
    } else {
        Vec::new()
    }
}

fn override_decorator(el: &DecoratableElement) -> Vec<String> {
    if el.is_override {
        vec!["override".to_string()]
    } else {
        Vec::new()
    }
}

fn convenience_decorator(el: &DecoratableElement) -> Vec<String> {
    if el.is_convenience {
        vec!["convenience".to_string()]
    } else {
        Vec::new()
    }
}

fn mutating_decorator(el: &DecoratableElement) -> Vec<String> {
    if el.is_mutating {
        vec!["mutating".to_string()]
    } else {
        Vec::new()
    }
}

fn ownership_decorator(el: &DecoratableElement) -> Vec<String> {
    el.ownership
        .and_then(Ownership::keyword)
        .map(str::to_string)
        .into_iter()
        .collect()
}

/// The default decorator order (§4.5). Registration order here, not the decorators
/// themselves, determines emitted modifier order.
const CHAIN: &[DecoratorFn] = &[
    access_level_decorator,
    setter_access_decorator,
    optional_decorator,
    static_decorator,
    override_decorator,
    convenience_decorator,
    mutating_decorator,
    ownership_decorator,
];

/// Runs the full chain and returns the modifier tokens in emission order, threading
/// `leading_trivia` through the first modifier only.
pub fn decorate(element: &DecoratableElement, leading_trivia: &str) -> Vec<Modifier> {
    CHAIN
        .iter()
        .flat_map(|decorator| decorator(element))
        .enumerate()
        .map(|(i, token)| Modifier {
            token,
            leading_trivia: if i == 0 { leading_trivia.to_string() } else { String::new() },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_access_is_omitted() {
        let element = DecoratableElement {
            access_level: AccessLevel::Internal,
            ..Default::default()
        };
        assert!(decorate(&element, "").is_empty());
    }

    #[test]
    fn order_matches_default_chain() {
        let element = DecoratableElement {
            access_level: AccessLevel::Public,
            is_static: true,
            is_override: true,
            ownership: Some(Ownership::Weak),
            ..Default::default()
        };
        let tokens: Vec<String> = decorate(&element, "").into_iter().map(|m| m.token).collect();
        assert_eq!(tokens, vec!["public", "static", "override", "weak"]);
    }

    #[test]
    fn only_first_modifier_carries_leading_trivia() {
        let element = DecoratableElement {
            access_level: AccessLevel::Public,
            is_static: true,
            ..Default::default()
        };
        let modifiers = decorate(&element, "// a comment\n");
        assert_eq!(modifiers[0].leading_trivia, "// a comment\n");
        assert_eq!(modifiers[1].leading_trivia, "");
    }

    #[test]
    fn strong_ownership_emits_nothing() {
        let element = DecoratableElement {
            ownership: Some(Ownership::Strong),
            ..Default::default()
        };
        assert!(decorate(&element, "").is_empty());
    }
}
