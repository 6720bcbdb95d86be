//! Fixed-size paging over a wrapped-line sequence.
//!
//! The vertical budget of a page is the display height minus the footer band
//! and a margin above and below the body. The footer band sits at the very
//! bottom and always carries a `"{page}/{total}"` indicator.

use core::{fmt, fmt::Write as _, ops::Range};

use heapless::String as HeaplessString;

/// Longest footer label: two `usize` values and a slash.
pub const FOOTER_LABEL_BYTES: usize = 41;

/// Vertical geometry of a page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageLayout {
    pub display_height: u32,
    pub line_height: u32,
    pub footer_height: u32,
    pub margin: u32,
}

impl PageLayout {
    /// Geometry for a font of `font_size` pixels: 4px leading, and a footer
    /// band one line plus 5px tall.
    pub const fn for_font(display_height: u32, font_size: u32, margin: u32) -> Self {
        let line_height = font_size + 4;
        Self {
            display_height,
            line_height,
            footer_height: line_height + 5,
            margin,
        }
    }

    /// Lines that fit in the page body, never less than one.
    pub fn lines_per_page(&self) -> usize {
        let body = self
            .display_height
            .saturating_sub(self.footer_height)
            .saturating_sub(self.margin.saturating_mul(2));
        (body / self.line_height.max(1)).max(1) as usize
    }

    /// Pages needed for `line_count` lines. An empty document still has one
    /// (empty) page.
    pub fn page_count(&self, line_count: usize) -> usize {
        line_count.div_ceil(self.lines_per_page()).max(1)
    }

    /// Index range into the line sequence covered by page `index`.
    pub fn page_range(&self, line_count: usize, index: usize) -> Result<Range<usize>, PageError> {
        let total_pages = self.page_count(line_count);
        if index >= total_pages {
            return Err(PageError::OutOfRange { index, total_pages });
        }

        let per_page = self.lines_per_page();
        let start = index * per_page;
        let end = (start + per_page).min(line_count);
        Ok(start.min(end)..end)
    }

    /// Lines shown on page `index`.
    pub fn page<'a, T>(&self, lines: &'a [T], index: usize) -> Result<&'a [T], PageError> {
        let range = self.page_range(lines.len(), index)?;
        Ok(&lines[range])
    }

    /// Nearest valid page for a possibly stale index.
    pub fn clamp_page(&self, line_count: usize, index: usize) -> usize {
        index.min(self.page_count(line_count) - 1)
    }

    /// Vertical position of the first body line.
    pub fn body_top(&self) -> u32 {
        self.margin
    }

    /// Vertical position of the footer indicator.
    pub fn footer_top(&self) -> u32 {
        self.display_height.saturating_sub(self.footer_height)
    }
}

/// Paging requests the layout cannot satisfy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageError {
    /// Requested page does not exist. Callers are expected to clamp first.
    OutOfRange { index: usize, total_pages: usize },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, total_pages } => {
                write!(f, "page {index} out of range (document has {total_pages})")
            }
        }
    }
}

impl core::error::Error for PageError {}

/// Footer indicator for zero-based `page_index`, e.g. `"3/12"`.
pub fn footer_label(page_index: usize, total_pages: usize) -> HeaplessString<FOOTER_LABEL_BYTES> {
    let mut out = HeaplessString::new();
    let _ = write!(out, "{}/{}", page_index.saturating_add(1), total_pages);
    out
}
