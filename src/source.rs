use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::error::{Error, Result};

pub const DEFAULT_PREFIX: &str = "textbook_";
pub const DEFAULT_EXTENSION: &str = "txt";

/// A fixed-size corpus of raw documents addressed by index `0..len()`.
///
/// `Sync` so documents can be loaded from the rayon pool.
pub trait DocumentSource: Sync {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw text of document `index`, or [`Error::DocumentUnavailable`].
    fn load(&self, index: usize) -> Result<String>;

    /// Where document `index` comes from, for diagnostics.
    fn describe(&self, index: usize) -> String {
        format!("document {index}")
    }
}

/// Documents named `<prefix><index>.txt` inside one directory.
#[derive(Debug, Clone)]
pub struct NumberedFileSource {
    data_dir: PathBuf,
    prefix: String,
    count: usize,
}

impl NumberedFileSource {
    pub fn new(data_dir: impl Into<PathBuf>, prefix: impl Into<String>, count: usize) -> Self {
        Self {
            data_dir: data_dir.into(),
            prefix: prefix.into(),
            count,
        }
    }

    pub fn path(&self, index: usize) -> PathBuf {
        self.data_dir
            .join(format!("{}{index}.{DEFAULT_EXTENSION}", self.prefix))
    }
}

impl DocumentSource for NumberedFileSource {
    fn len(&self) -> usize {
        self.count
    }

    fn load(&self, index: usize) -> Result<String> {
        read_document(index, &self.path(index))
    }

    fn describe(&self, index: usize) -> String {
        self.path(index).display().to_string()
    }
}

/// Every regular file below a directory, ordered by path.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    paths: Vec<PathBuf>,
}

impl DirectorySource {
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(data_dir).follow_links(true) {
            let entry = entry?;
            if entry.file_type().is_file() {
                paths.push(entry.into_path());
            }
        }

        paths.sort();

        Ok(Self { paths })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl DocumentSource for DirectorySource {
    fn len(&self) -> usize {
        self.paths.len()
    }

    fn load(&self, index: usize) -> Result<String> {
        let path = self
            .paths
            .get(index)
            .ok_or_else(|| Error::Generic(format!("No document at index {index}")))?;

        read_document(index, path)
    }

    fn describe(&self, index: usize) -> String {
        self.paths
            .get(index)
            .map_or_else(|| format!("document {index}"), |path| path.display().to_string())
    }
}

/// Documents held in memory; `None` entries behave like unreadable files.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<Option<String>>,
}

impl MemorySource {
    pub fn new<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            documents: documents.into_iter().map(|doc| Some(doc.into())).collect(),
        }
    }

    pub fn push(&mut self, document: impl Into<String>) {
        self.documents.push(Some(document.into()));
    }

    pub fn push_unavailable(&mut self) {
        self.documents.push(None);
    }
}

impl DocumentSource for MemorySource {
    fn len(&self) -> usize {
        self.documents.len()
    }

    fn load(&self, index: usize) -> Result<String> {
        self.documents
            .get(index)
            .and_then(Clone::clone)
            .ok_or_else(|| Error::DocumentUnavailable {
                index,
                path: PathBuf::from(format!("memory:{index}")),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "document missing"),
            })
    }
}

/// Non-UTF-8 bytes are replaced rather than rejected; they never survive
/// normalization anyway.
fn read_document(index: usize, path: &Path) -> Result<String> {
    fs::read(path)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .map_err(|source| Error::DocumentUnavailable {
            index,
            path: path.to_path_buf(),
            source,
        })
}
