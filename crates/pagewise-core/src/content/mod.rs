//! Document sources.

pub mod static_source;

/// Read-only catalog of plain-text documents.
///
/// Documents are addressed by their position in the catalog; the name is the
/// stable identity used for progress and cache entries.
pub trait DocumentLibrary {
    type Error: core::fmt::Debug;

    fn document_count(&self) -> usize;

    /// Stable document name (file name without extension).
    fn document_name(&self, index: usize) -> Option<&str>;

    /// Raw text of the document, read on demand.
    fn load_text(&mut self, index: usize) -> Result<alloc::string::String, Self::Error>;

    fn is_empty(&self) -> bool {
        self.document_count() == 0
    }
}
