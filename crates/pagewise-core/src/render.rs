//! App-level view models and the display contract they are shown on.

use alloc::string::String;

use crate::paginate::PageLayout;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuItemKind {
    Document,
    Exit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuItemView<'a> {
    pub label: &'a str,
    pub kind: MenuItemKind,
}

/// App-level view model consumed by the display.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen<'a> {
    Library {
        title: &'a str,
        /// Every document followed by the exit entry.
        items: &'a [MenuItemView<'a>],
        cursor: usize,
    },
    Page {
        title: &'a str,
        lines: &'a [String],
        /// Zero-based.
        page_index: usize,
        total_pages: usize,
        layout: PageLayout,
    },
}

/// Monochrome output surface injected into the reader.
///
/// Lifecycle is `init` once, any number of `show` calls, then `shutdown`,
/// which blanks the surface and puts it to sleep.
pub trait Display {
    type Error: core::fmt::Debug;

    /// Surface size as `(width, height)` in pixels, fixed for its lifetime.
    fn dimensions(&self) -> (u32, u32);

    fn init(&mut self) -> Result<(), Self::Error>;

    fn show(&mut self, screen: Screen<'_>) -> Result<(), Self::Error>;

    fn shutdown(&mut self) -> Result<(), Self::Error>;
}
