//! Plain-text document directory.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use pagewise_core::content::DocumentLibrary;

use super::StoreError;

const TEXT_EXTENSION: &str = "txt";

#[derive(Clone, Debug, Eq, PartialEq)]
struct TextEntry {
    name: String,
    path: PathBuf,
}

/// Every `.txt` file directly inside one directory, ordered by name.
///
/// The listing is taken once when the directory is opened.
#[derive(Clone, Debug)]
pub struct TextDirectory {
    root: PathBuf,
    entries: Vec<TextEntry>,
}

impl TextDirectory {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        let mut entries = Vec::new();

        for entry in fs::read_dir(&root)? {
            let path = entry?.path();
            if !path.is_file() || !has_text_extension(&path) {
                continue;
            }

            let Some(name) = path.file_stem().and_then(OsStr::to_str) else {
                warn!("library: skipping non-utf8 file name {:?}", path);
                continue;
            };

            entries.push(TextEntry {
                name: name.to_string(),
                path,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        info!(
            "library: {} document(s) in {}",
            entries.len(),
            root.display()
        );

        Ok(Self { root, entries })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TEXT_EXTENSION))
}

impl DocumentLibrary for TextDirectory {
    type Error = StoreError;

    fn document_count(&self) -> usize {
        self.entries.len()
    }

    fn document_name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.name.as_str())
    }

    fn load_text(&mut self, index: usize) -> Result<String, Self::Error> {
        let entry = self.entries.get(index).ok_or_else(|| {
            StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no document at index {index}"),
            ))
        })?;

        let bytes = fs::read(&entry.path)?;
        debug!("library: read {:?} bytes={}", entry.name, bytes.len());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
