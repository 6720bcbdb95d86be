use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use super::DocumentLibrary;

/// Errors reported by [`StaticLibrary`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StaticLibraryError {
    InvalidIndex,
    /// Document registered with [`StaticLibrary::with_unreadable`].
    Unreadable,
}

#[derive(Clone, Debug)]
struct StaticDocument {
    name: String,
    text: Option<String>,
}

/// In-memory document library.
#[derive(Clone, Debug, Default)]
pub struct StaticLibrary {
    documents: Vec<StaticDocument>,
    loads: usize,
}

impl StaticLibrary {
    pub fn new<N, T>(documents: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            documents: documents
                .into_iter()
                .map(|(name, text)| StaticDocument {
                    name: name.into(),
                    text: Some(text.into()),
                })
                .collect(),
            loads: 0,
        }
    }

    /// Adds a document whose text can never be read.
    pub fn with_unreadable(mut self, name: &str) -> Self {
        self.documents.push(StaticDocument {
            name: name.to_string(),
            text: None,
        });
        self
    }

    /// Number of successful and failed `load_text` calls so far.
    pub fn loads(&self) -> usize {
        self.loads
    }
}

impl DocumentLibrary for StaticLibrary {
    type Error = StaticLibraryError;

    fn document_count(&self) -> usize {
        self.documents.len()
    }

    fn document_name(&self, index: usize) -> Option<&str> {
        self.documents.get(index).map(|doc| doc.name.as_str())
    }

    fn load_text(&mut self, index: usize) -> Result<String, Self::Error> {
        self.loads += 1;
        let doc = self
            .documents
            .get(index)
            .ok_or(StaticLibraryError::InvalidIndex)?;
        doc.text.clone().ok_or(StaticLibraryError::Unreadable)
    }
}
