//! Wrapped-line cache keyed by document and layout.
//!
//! Wrapping a long document is the slowest step between pressing a button and
//! seeing a page, so results are memoised in a durable [`LineStore`]. Entries
//! are keyed by `(document, LayoutKey)`: a change of font, font size, display
//! width or margin is a different entry, never a stale hit.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
};
use core::fmt;

use log::{debug, warn};

use crate::{
    measure::{LayoutKey, TextMeasurer},
    wrap::{WrappedLines, wrap_text},
};

/// Durable backing store for wrapped lines.
pub trait LineStore {
    type Error: fmt::Debug;

    /// Returns the stored lines, `Ok(None)` when no entry exists.
    fn read(&mut self, document: &str, key: &LayoutKey)
    -> Result<Option<WrappedLines>, Self::Error>;

    /// Creates or replaces the entry for `(document, key)`.
    fn write(
        &mut self,
        document: &str,
        key: &LayoutKey,
        lines: &WrappedLines,
    ) -> Result<(), Self::Error>;
}

/// Read-through cache in front of a [`LineStore`].
#[derive(Debug)]
pub struct LineCache<S> {
    store: S,
}

impl<S: LineStore> LineCache<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Returns the wrapped lines of `document` for `key`.
    ///
    /// On a hit neither `load_text` nor `measurer` is touched. An unreadable
    /// entry counts as a miss and is overwritten. A failed write is logged;
    /// the freshly wrapped lines are returned regardless.
    pub fn get<M, F, E>(
        &mut self,
        document: &str,
        key: &LayoutKey,
        measurer: &M,
        load_text: F,
    ) -> Result<WrappedLines, E>
    where
        M: TextMeasurer + ?Sized,
        F: FnOnce() -> Result<String, E>,
    {
        match self.store.read(document, key) {
            Ok(Some(lines)) => {
                debug!(
                    "line-cache: hit document={:?} lines={} font={} size={} width={}",
                    document,
                    lines.len(),
                    key.font,
                    key.font_size,
                    key.display_width
                );
                return Ok(lines);
            }
            Ok(None) => {
                debug!("line-cache: miss document={:?}", document);
            }
            Err(err) => {
                warn!(
                    "line-cache: unreadable entry document={:?} err={:?}, regenerating",
                    document, err
                );
            }
        }

        let text = load_text()?;
        let lines = wrap_text(&text, key.wrap_width(), measurer);
        debug!(
            "line-cache: wrapped document={:?} bytes={} lines={} wrap_width={}",
            document,
            text.len(),
            lines.len(),
            key.wrap_width()
        );

        if let Err(err) = self.store.write(document, key, &lines) {
            warn!(
                "line-cache: write failed document={:?} err={:?}",
                document, err
            );
        }

        Ok(lines)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum MemoryEntry {
    Lines(WrappedLines),
    Corrupt,
}

/// Errors reported by [`MemoryLineStore`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemoryStoreError {
    Corrupt,
}

/// In-memory [`LineStore`] that counts traffic.
#[derive(Debug, Default)]
pub struct MemoryLineStore {
    entries: BTreeMap<(String, LayoutKey), MemoryEntry>,
    reads: usize,
    writes: usize,
}

impl MemoryLineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the entry with one that fails to read.
    pub fn corrupt(&mut self, document: &str, key: &LayoutKey) {
        self.entries
            .insert((document.to_string(), key.clone()), MemoryEntry::Corrupt);
    }
}

impl LineStore for MemoryLineStore {
    type Error = MemoryStoreError;

    fn read(
        &mut self,
        document: &str,
        key: &LayoutKey,
    ) -> Result<Option<WrappedLines>, Self::Error> {
        self.reads += 1;
        match self.entries.get(&(document.to_string(), key.clone())) {
            Some(MemoryEntry::Lines(lines)) => Ok(Some(lines.clone())),
            Some(MemoryEntry::Corrupt) => Err(MemoryStoreError::Corrupt),
            None => Ok(None),
        }
    }

    fn write(
        &mut self,
        document: &str,
        key: &LayoutKey,
        lines: &WrappedLines,
    ) -> Result<(), Self::Error> {
        self.writes += 1;
        self.entries.insert(
            (document.to_string(), key.clone()),
            MemoryEntry::Lines(lines.clone()),
        );
        Ok(())
    }
}
