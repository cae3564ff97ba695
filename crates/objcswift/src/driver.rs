//! The public entry point: `rewrite()` drives the whole staged pipeline (§2) from an
//! `InputSourcesProvider` to a `WriterOutput`.

use crate::diagnostics::Diagnostics;
use crate::emit::print_file;
use crate::intention::{IntentionKind, build};
use crate::io::{InputSourcesProvider, WriterOutput, load_all};

/// Reads every source the provider supplies, merges them into one intention graph, and
/// writes one Swift file per output path the graph's pairing rule produced (§4.4, §4.5,
/// §6). Recoverable parse errors never abort this; only fatal driver errors do (§7).
pub fn rewrite(
    provider: &dyn InputSourcesProvider,
    output: &mut dyn WriterOutput,
) -> crate::Result<Diagnostics> {
    let sources = load_all(provider)?;
    let (graph, diagnostics) = build(&sources)?;

    for file_id in graph.roots() {
        let IntentionKind::File { output_path } = &graph.get(file_id).kind else {
            continue;
        };
        let text = print_file(&graph, file_id);
        let mut file = output.create_file(output_path);
        file.write_str(&text);
        file.close();
    }

    Ok(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::rewrite;
    use crate::io::{MemoryInputSource, MemoryInputSourcesProvider, MemoryWriterOutput};

    #[test]
    fn interface_only_produces_swift_with_trailer() {
        let provider = MemoryInputSourcesProvider::new(vec![MemoryInputSource::new(
            "objc.h",
            "@interface MyClass\n- (void)myMethod;\n@end",
        )]);
        let mut output = MemoryWriterOutput::new();
        let diagnostics = rewrite(&provider, &mut output).expect("rewrite succeeds");
        assert_eq!(diagnostics.error_count(), 0);

        let files: Vec<_> = output.files().collect();
        assert_eq!(files.len(), 1);
        let (path, text) = files[0];
        assert_eq!(path, "objc.h");
        assert!(text.contains("class MyClass: NSObject {"));
        assert!(text.contains("func myMethod() {"));
        assert!(text.ends_with("// End of file objc.h"));
    }

    #[test]
    fn header_and_implementation_collapse_to_one_file() {
        let provider = MemoryInputSourcesProvider::new(vec![
            MemoryInputSource::new("objc.h", "@interface MyClass\n- (void)myMethod;\n@end"),
            MemoryInputSource::new(
                "objc.m",
                "@implementation MyClass\n- (void)myMethod {\n}\n@end",
            ),
        ]);
        let mut output = MemoryWriterOutput::new();
        let diagnostics = rewrite(&provider, &mut output).expect("rewrite succeeds");
        assert_eq!(diagnostics.error_count(), 0);

        let files: Vec<_> = output.files().collect();
        assert_eq!(files.len(), 1);
        let (path, text) = files[0];
        assert_eq!(path, "objc.m");
        assert!(text.ends_with("// End of file objc.m"));
    }

    #[test]
    fn forward_declaration_produces_no_output_file() {
        let provider =
            MemoryInputSourcesProvider::new(vec![MemoryInputSource::new("objc.h", "@class MyClass;")]);
        let mut output = MemoryWriterOutput::new();
        let diagnostics = rewrite(&provider, &mut output).expect("rewrite succeeds");
        assert_eq!(diagnostics.error_count(), 0);
        assert_eq!(output.files().count(), 0);
    }
}
