//! Navigation state machine for document selection and page reading.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use log::{debug, info, warn};

use crate::{
    cache::{LineCache, LineStore},
    content::DocumentLibrary,
    input::{InputEvent, InputProvider},
    measure::{LayoutKey, TextMeasurer},
    paginate::{PageError, PageLayout},
    progress::{ProgressRecord, ProgressStore},
    render::{Display, MenuItemKind, MenuItemView, Screen},
    wrap::WrappedLines,
};

const EXIT_LABEL: &str = "Exit";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    Rendered,
    /// The exit entry was chosen or input closed; call [`ReaderApp::shutdown`].
    Exit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub title: &'static str,
    /// Horizontal and vertical page margin in pixels.
    pub margin: u32,
    /// Extra pixels between consecutive text lines.
    pub line_spacing: u32,
    /// Gap between the footer indicator and the bottom edge.
    pub footer_gap: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            title: "Library",
            margin: 10,
            line_spacing: 4,
            footer_gap: 5,
        }
    }
}

impl ReaderConfig {
    pub fn page_layout(&self, display_height: u32, font_size: u32) -> PageLayout {
        let line_height = font_size + self.line_spacing;
        PageLayout {
            display_height,
            line_height,
            footer_height: line_height + self.footer_gap,
            margin: self.margin,
        }
    }

    pub fn layout_key(&self, display_width: u32, measurer: &impl TextMeasurer) -> LayoutKey {
        LayoutKey::new(display_width, self.margin, measurer)
    }
}

/// Externally observable navigation state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavigationState<'a> {
    /// `cursor == document_count` is the exit entry.
    SelectingDocument {
        cursor: usize,
    },
    ViewingDocument {
        document: &'a str,
        current_page: usize,
        total_pages: usize,
    },
    Terminated,
}

/// Failures the reader cannot recover from on its own.
#[derive(Debug)]
pub enum AppError<InErr, DispErr> {
    Input(InErr),
    Display(DispErr),
    /// A page outside the open document was requested.
    Page(PageError),
}

impl<InErr: fmt::Debug, DispErr: fmt::Debug> fmt::Display for AppError<InErr, DispErr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => write!(f, "input provider failed: {err:?}"),
            Self::Display(err) => write!(f, "display failed: {err:?}"),
            Self::Page(err) => write!(f, "{err}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Library { cursor: usize },
    Reading { cursor: usize, page: usize },
    Terminated,
}

/// What the display currently shows; a tick only redraws when this changes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RenderedView {
    Library { cursor: usize },
    Page { document: usize, page: usize },
}

#[derive(Debug)]
struct OpenDocument {
    name: String,
    lines: WrappedLines,
    total_pages: usize,
}

type TickOutcome<IN, D> =
    Result<TickResult, AppError<<IN as InputProvider>::Error, <D as Display>::Error>>;

pub struct ReaderApp<DL, IN, LS, PS, M, D>
where
    DL: DocumentLibrary,
    IN: InputProvider,
    LS: LineStore,
    PS: ProgressStore,
    M: TextMeasurer,
    D: Display,
{
    library: DL,
    input: IN,
    lines: LineCache<LS>,
    progress_store: PS,
    progress: ProgressRecord,
    measurer: M,
    display: D,
    config: ReaderConfig,
    layout_key: LayoutKey,
    page_layout: PageLayout,
    ui: UiState,
    open: Option<OpenDocument>,
    last_rendered: Option<RenderedView>,
}

include!("view.rs");
include!("input.rs");
include!("navigation.rs");

fn rotate_next(current: usize, total: usize) -> usize {
    if total == 0 { 0 } else { (current + 1) % total }
}

fn rotate_prev(current: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}

fn compose_screen<DL, R>(
    ui: UiState,
    library: &DL,
    open: Option<&OpenDocument>,
    config: &ReaderConfig,
    page_layout: PageLayout,
    f: impl FnOnce(Screen<'_>) -> R,
) -> Result<Option<R>, PageError>
where
    DL: DocumentLibrary,
{
    match ui {
        UiState::Library { cursor } => {
            let mut items: Vec<MenuItemView<'_>> = (0..library.document_count())
                .map(|index| MenuItemView {
                    label: library.document_name(index).unwrap_or("Untitled"),
                    kind: MenuItemKind::Document,
                })
                .collect();
            items.push(MenuItemView {
                label: EXIT_LABEL,
                kind: MenuItemKind::Exit,
            });

            Ok(Some(f(Screen::Library {
                title: config.title,
                items: &items,
                cursor,
            })))
        }
        UiState::Reading { page, .. } => {
            let Some(open) = open else {
                return Ok(None);
            };
            let lines = page_layout.page(open.lines.as_slice(), page)?;
            Ok(Some(f(Screen::Page {
                title: &open.name,
                lines,
                page_index: page,
                total_pages: open.total_pages,
                layout: page_layout,
            })))
        }
        UiState::Terminated => Ok(None),
    }
}

#[cfg(test)]
mod tests;
