//! External collaborators (§6): the core never touches a filesystem directly.
//!
//! `InputSource`/`InputSourcesProvider` supply ordered source text; `WriterOutput`/
//! `FileOutput` receive emitted Swift text. Concrete file-backed implementations are out
//! of scope (§1 Non-goals) — only the interfaces, plus an in-memory implementation used
//! by tests and the crate-level doctest, live here.

use crate::Error;

/// A single named input (a `.h` or `.m` file, conceptually).
pub trait InputSource {
    /// The name used to derive output paths and diagnostic file references.
    fn source_name(&self) -> &str;

    /// Reads the full UTF-8 text of this source.
    fn load_source(&self) -> crate::Result<String>;
}

/// An ordered collection of `InputSource`s. Ordering determines visitation order (§5).
pub trait InputSourcesProvider {
    fn sources(&self) -> Vec<&dyn InputSource>;
}

/// A sink that receives incremental text for one output file.
pub trait FileOutput {
    /// Appends text to the file's buffer.
    fn write_str(&mut self, text: &str);

    /// Flushes the buffer and appends the `// End of file <path>` trailer (§4.5, §6.2).
    /// A contract violation to call more than once.
    fn close(&mut self);
}

/// Creates `FileOutput`s by path.
pub trait WriterOutput {
    fn create_file(&mut self, path: &str) -> Box<dyn FileOutput + '_>;
}

/// An in-memory `InputSource`, for tests and the crate doctest.
#[derive(Debug, Clone)]
pub struct MemoryInputSource {
    name: String,
    text: String,
}

impl MemoryInputSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl InputSource for MemoryInputSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn load_source(&self) -> crate::Result<String> {
        Ok(self.text.clone())
    }
}

/// An ordered, in-memory `InputSourcesProvider`.
#[derive(Debug, Clone)]
pub struct MemoryInputSourcesProvider {
    sources: Vec<MemoryInputSource>,
}

impl MemoryInputSourcesProvider {
    pub fn new(sources: Vec<MemoryInputSource>) -> Self {
        Self { sources }
    }
}

impl InputSourcesProvider for MemoryInputSourcesProvider {
    fn sources(&self) -> Vec<&dyn InputSource> {
        self.sources
            .iter()
            .map(|s| s as &dyn InputSource)
            .collect()
    }
}

struct MemoryFile<'a> {
    path: String,
    buffer: &'a mut String,
    closed: &'a mut bool,
}

impl FileOutput for MemoryFile<'_> {
    fn write_str(&mut self, text: &str) {
        assert!(!*self.closed, "write to a closed FileOutput");
        self.buffer.push_str(text);
    }

    fn close(&mut self) {
        assert!(!*self.closed, "FileOutput.close() called twice");
        self.buffer.push_str("\n// End of file ");
        self.buffer.push_str(&self.path);
        *self.closed = true;
    }
}

/// Collects every written file in memory, keyed by path, preserving creation order.
#[derive(Debug, Default)]
pub struct MemoryWriterOutput {
    files: indexmap::IndexMap<String, (String, bool)>,
}

impl MemoryWriterOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished text of every file that was closed, in creation order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files
            .iter()
            .map(|(path, (text, _))| (path.as_str(), text.as_str()))
    }
}

impl WriterOutput for MemoryWriterOutput {
    fn create_file(&mut self, path: &str) -> Box<dyn FileOutput + '_> {
        let entry = self
            .files
            .entry(path.to_string())
            .or_insert_with(|| (String::new(), false));
        let (buffer, closed) = entry;
        Box::new(MemoryFile {
            path: path.to_string(),
            buffer,
            closed,
        })
    }
}

pub(crate) fn load_all(provider: &dyn InputSourcesProvider) -> crate::Result<Vec<(String, String)>> {
    provider
        .sources()
        .into_iter()
        .map(|source| {
            let name = source.source_name().to_string();
            source
                .load_source()
                .map(|text| (name.clone(), text))
                .map_err(|e| Error::SourceLoadFailed {
                    name,
                    message: e.to_string(),
                })
        })
        .collect()
}
