//! Indentation-tracked Swift-text serialiser that walks an `IntentionGraph` (§4.5).

use crate::intention::{IntentionGraph, IntentionId, IntentionKind, MethodParam};

use super::decorators::{DecoratableElement, decorate};

const INDENT_UNIT: &str = "    ";

/// A scoped indent level. Mirrors the parser's `TemporaryContext`: the guard's `Drop`
/// guarantees `deindent()` runs on every exit path, not just the happy one (§5).
struct BlockGuard<'p> {
    printer: &'p mut Printer,
}

impl Drop for BlockGuard<'_> {
    fn drop(&mut self) {
        self.printer.indent_level = self.printer.indent_level.saturating_sub(1);
    }
}

struct Printer {
    buffer: String,
    indent_level: u32,
}

impl Printer {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&mut self) -> BlockGuard<'_> {
        self.indent_level += 1;
        BlockGuard { printer: self }
    }

    fn write_line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT_UNIT);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn write_modifiers_prefixed(&mut self, modifiers: &[super::decorators::Modifier], rest: &str) {
        let mut line = String::new();
        for modifier in modifiers {
            line.push_str(&modifier.leading_trivia);
            line.push_str(&modifier.token);
            line.push(' ');
        }
        line.push_str(rest);
        self.write_line(&line);
    }
}

fn format_params(params: &[MethodParam]) -> String {
    params
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == 0 {
                format!("_ {}: {}", p.name, p.swift_type)
            } else {
                format!("{} {}: {}", p.label, p.name, p.swift_type)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_method(
    printer: &mut Printer,
    graph: &IntentionGraph,
    id: IntentionId,
    in_protocol: bool,
    is_protocol_optional: bool,
) {
    let intention = graph.get(id);
    let element = DecoratableElement::from_intention(intention, is_protocol_optional);
    let modifiers = decorate(&element, "");

    match &intention.kind {
        IntentionKind::Method {
            selector,
            return_type,
            params,
            ..
        } => {
            let name = selector.0.first().map(String::as_str).unwrap_or_default();
            let mut signature = format!("func {name}({})", format_params(params));
            if !return_type.is_empty() {
                signature.push_str(" -> ");
                signature.push_str(return_type);
            }
            if in_protocol {
                printer.write_modifiers_prefixed(&modifiers, &signature);
            } else {
                printer.write_modifiers_prefixed(&modifiers, &format!("{signature} {{"));
                {
                    let _block = printer.indent();
                }
                printer.write_line("}");
            }
        }
        IntentionKind::Init { params, .. } => {
            let signature = format!("init({})", format_params(params));
            if in_protocol {
                printer.write_modifiers_prefixed(&modifiers, &signature);
            } else {
                printer.write_modifiers_prefixed(&modifiers, &format!("{signature} {{"));
                {
                    let _block = printer.indent();
                }
                printer.write_line("}");
            }
        }
        _ => unreachable!("print_method called on a non-method intention"),
    }
}

fn print_property(printer: &mut Printer, graph: &IntentionGraph, id: IntentionId) {
    let intention = graph.get(id);
    let IntentionKind::Property { name, storage, .. } = &intention.kind else {
        unreachable!("print_property called on a non-property intention");
    };
    let element = DecoratableElement::from_intention(intention, false);
    let modifiers = decorate(&element, "");
    let keyword = if storage.is_constant { "let" } else { "var" };
    printer.write_modifiers_prefixed(&modifiers, &format!("{keyword} {name}: {}", storage.swift_type));
}

fn print_class(printer: &mut Printer, graph: &IntentionGraph, id: IntentionId) {
    let intention = graph.get(id);
    let IntentionKind::ClassGeneration {
        name,
        superclass,
        conformances,
    } = &intention.kind
    else {
        unreachable!("print_class called on a non-class intention");
    };

    let element = DecoratableElement::from_intention(intention, false);
    let modifiers = decorate(&element, "");

    let mut heritage: Vec<String> = superclass.iter().cloned().collect();
    heritage.extend(conformances.iter().cloned());
    let header = if heritage.is_empty() {
        format!("class {name} {{")
    } else {
        format!("class {name}: {} {{", heritage.join(", "))
    };
    printer.write_modifiers_prefixed(&modifiers, &header);

    {
        let _block = printer.indent();
        for child in graph.children(id) {
            match &graph.get(child).kind {
                IntentionKind::Property { .. } => print_property(printer, graph, child),
                IntentionKind::Method { .. } | IntentionKind::Init { .. } => {
                    print_method(printer, graph, child, false, false)
                }
                _ => {}
            }
        }
    }
    printer.write_line("}");
}

fn print_protocol(printer: &mut Printer, graph: &IntentionGraph, id: IntentionId) {
    let intention = graph.get(id);
    let IntentionKind::Protocol { name, conformances } = &intention.kind else {
        unreachable!("print_protocol called on a non-protocol intention");
    };

    let element = DecoratableElement::from_intention(intention, false);
    let modifiers = decorate(&element, "");

    let header = if conformances.is_empty() {
        format!("protocol {name} {{")
    } else {
        format!("protocol {name}: {} {{", conformances.join(", "))
    };
    printer.write_modifiers_prefixed(&modifiers, &header);

    {
        let _block = printer.indent();
        for child in graph.children(id) {
            let is_optional = graph
                .get(child)
                .header
                .known_attributes
                .contains("optional");
            match &graph.get(child).kind {
                IntentionKind::Method { .. } | IntentionKind::Init { .. } => {
                    print_method(printer, graph, child, true, is_optional)
                }
                _ => {}
            }
        }
    }
    printer.write_line("}");
}

/// Renders one `File` intention's subtree to Swift text (without the `// End of file`
/// trailer, which `FileOutput::close()` appends — §4.5).
pub fn print_file(graph: &IntentionGraph, file_id: IntentionId) -> String {
    let mut printer = Printer::new();
    for child in graph.children(file_id) {
        match &graph.get(child).kind {
            IntentionKind::ClassGeneration { .. } => print_class(&mut printer, graph, child),
            IntentionKind::Protocol { .. } => print_protocol(&mut printer, graph, child),
            _ => {}
        }
    }
    // Drop the single trailing newline; `write_line` always appends one.
    let mut text = printer.buffer;
    if text.ends_with('\n') {
        text.pop();
    }
    text
}
