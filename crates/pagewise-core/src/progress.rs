//! Per-document reading progress.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
};

use serde::{Deserialize, Serialize};

/// Last viewed zero-based page per document name.
///
/// Entries for documents that have since disappeared are kept as-is.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressRecord {
    pages: BTreeMap<String, usize>,
}

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self, document: &str) -> Option<usize> {
        self.pages.get(document).copied()
    }

    pub fn set_page(&mut self, document: &str, page: usize) {
        self.pages.insert(document.to_string(), page);
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.pages.iter().map(|(name, page)| (name.as_str(), *page))
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for ProgressRecord {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().map(|(name, page)| (name.into(), page)).collect(),
        }
    }
}

/// Abstract progress persistence backend.
///
/// `load` never fails: a missing or unreadable record is an empty one.
/// `save` always writes the whole record.
pub trait ProgressStore {
    type Error: core::fmt::Debug;

    fn load(&mut self) -> ProgressRecord;
    fn save(&mut self, record: &ProgressRecord) -> Result<(), Self::Error>;
}
