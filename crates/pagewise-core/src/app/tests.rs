use alloc::{format, vec, vec::Vec};
use core::convert::Infallible;

use super::*;
use crate::{
    cache::MemoryLineStore,
    content::static_source::StaticLibrary,
    input::mock::ScriptedInput,
    measure::FixedAdvanceMeasurer,
    paginate::footer_label,
};

// 140px wide with 10px margins wraps at 120px: two of the test words per line.
// 80px tall with 16px lines and a 21px footer leaves room for two lines.
const WIDTH: u32 = 140;
const HEIGHT: u32 = 80;
const GREEK: &str = "alpha beta\ngamma   delta\n\nepsilon";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Shown {
    Library {
        labels: Vec<String>,
        cursor: usize,
    },
    Page {
        title: String,
        lines: Vec<String>,
        footer: String,
    },
}

#[derive(Debug, Default)]
struct RecordingDisplay {
    frames: Vec<Shown>,
    shut_down: bool,
}

impl Display for RecordingDisplay {
    type Error = Infallible;

    fn dimensions(&self) -> (u32, u32) {
        (WIDTH, HEIGHT)
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn show(&mut self, screen: Screen<'_>) -> Result<(), Self::Error> {
        let shown = match screen {
            Screen::Library { items, cursor, .. } => Shown::Library {
                labels: items.iter().map(|item| item.label.to_string()).collect(),
                cursor,
            },
            Screen::Page {
                title,
                lines,
                page_index,
                total_pages,
                ..
            } => Shown::Page {
                title: title.to_string(),
                lines: lines.to_vec(),
                footer: footer_label(page_index, total_pages).as_str().to_string(),
            },
        };
        self.frames.push(shown);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), Self::Error> {
        self.shut_down = true;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryProgress {
    stored: ProgressRecord,
    saves: usize,
    fail_saves: bool,
}

impl ProgressStore for MemoryProgress {
    type Error = &'static str;

    fn load(&mut self) -> ProgressRecord {
        self.stored.clone()
    }

    fn save(&mut self, record: &ProgressRecord) -> Result<(), Self::Error> {
        self.saves += 1;
        if self.fail_saves {
            return Err("disk full");
        }
        self.stored = record.clone();
        Ok(())
    }
}

type TestApp = ReaderApp<
    StaticLibrary,
    ScriptedInput,
    MemoryLineStore,
    MemoryProgress,
    FixedAdvanceMeasurer,
    RecordingDisplay,
>;

fn make_app(library: StaticLibrary, events: &[InputEvent], progress: MemoryProgress) -> TestApp {
    ReaderApp::new(
        library,
        ScriptedInput::new(events.iter().copied()),
        MemoryLineStore::new(),
        progress,
        FixedAdvanceMeasurer::new("fixed", 10, 12),
        RecordingDisplay::default(),
        ReaderConfig::default(),
    )
}

fn greek_library() -> StaticLibrary {
    StaticLibrary::new([("greek", GREEK), ("latin", "lorem ipsum")])
}

fn page(title: &str, lines: &[&str], footer: &str) -> Shown {
    Shown::Page {
        title: title.to_string(),
        lines: lines.iter().map(|line| line.to_string()).collect(),
        footer: footer.to_string(),
    }
}

fn library_frame(cursor: usize) -> Shown {
    Shown::Library {
        labels: vec!["greek".into(), "latin".into(), "Exit".into()],
        cursor,
    }
}

fn ticks(app: &mut TestApp, count: usize) -> Vec<TickResult> {
    (0..count).map(|_| app.tick().unwrap()).collect()
}

#[test]
fn layout_matches_test_geometry() {
    let app = make_app(greek_library(), &[], MemoryProgress::default());
    assert_eq!(app.page_layout().lines_per_page(), 2);
    assert_eq!(app.layout_key().wrap_width(), 120);
}

#[test]
fn first_tick_paints_library_before_reading_input() {
    let mut app = make_app(greek_library(), &[InputEvent::Next], MemoryProgress::default());

    assert_eq!(app.tick().unwrap(), TickResult::Rendered);
    assert_eq!(app.display().frames, vec![library_frame(0)]);
    assert_eq!(
        app.navigation(),
        NavigationState::SelectingDocument { cursor: 0 }
    );

    assert_eq!(app.tick().unwrap(), TickResult::Rendered);
    assert_eq!(
        app.navigation(),
        NavigationState::SelectingDocument { cursor: 1 }
    );
}

#[test]
fn selection_cursor_wraps_through_exit_entry() {
    let mut app = make_app(greek_library(), &[], MemoryProgress::default());

    app.apply_input_event(InputEvent::Previous);
    assert_eq!(
        app.navigation(),
        NavigationState::SelectingDocument { cursor: 2 }
    );

    app.apply_input_event(InputEvent::Next);
    assert_eq!(
        app.navigation(),
        NavigationState::SelectingDocument { cursor: 0 }
    );
}

#[test]
fn reading_scenario_pages_clamp_and_save_progress() {
    let events = [
        InputEvent::Activate,
        InputEvent::Next,
        InputEvent::Next,
        InputEvent::Previous,
        InputEvent::Previous,
        InputEvent::Next,
        InputEvent::Activate,
    ];
    let mut app = make_app(greek_library(), &events, MemoryProgress::default());

    let results = ticks(&mut app, 8);
    assert_eq!(
        results,
        vec![
            TickResult::Rendered,
            TickResult::Rendered,
            TickResult::Rendered,
            TickResult::NoRender,
            TickResult::Rendered,
            TickResult::NoRender,
            TickResult::Rendered,
            TickResult::Rendered,
        ]
    );

    assert_eq!(
        app.display().frames,
        vec![
            library_frame(0),
            page("greek", &["alpha beta", "gamma delta"], "1/2"),
            page("greek", &["epsilon"], "2/2"),
            page("greek", &["alpha beta", "gamma delta"], "1/2"),
            page("greek", &["epsilon"], "2/2"),
            library_frame(0),
        ]
    );
    assert_eq!(app.progress().page("greek"), Some(1));
    assert_eq!(app.progress_store().saves, 1);
    assert_eq!(app.progress_store().stored.page("greek"), Some(1));

    assert_eq!(app.tick().unwrap(), TickResult::Exit);
    assert_eq!(app.navigation(), NavigationState::Terminated);
}

#[test]
fn saved_progress_is_restored() {
    let progress = MemoryProgress {
        stored: [("greek", 1)].into_iter().collect(),
        ..MemoryProgress::default()
    };
    let mut app = make_app(greek_library(), &[InputEvent::Activate], progress);

    ticks(&mut app, 2);
    assert_eq!(
        app.navigation(),
        NavigationState::ViewingDocument {
            document: "greek",
            current_page: 1,
            total_pages: 2
        }
    );
}

#[test]
fn stale_progress_past_the_end_is_clamped() {
    let progress = MemoryProgress {
        stored: [("greek", 9), ("vanished", 4)].into_iter().collect(),
        ..MemoryProgress::default()
    };
    let events = [InputEvent::Activate, InputEvent::Activate];
    let mut app = make_app(greek_library(), &events, progress);

    ticks(&mut app, 2);
    assert_eq!(
        app.display().frames.last(),
        Some(&page("greek", &["epsilon"], "2/2"))
    );

    ticks(&mut app, 1);
    assert_eq!(app.progress().page("greek"), Some(1));
    assert_eq!(app.progress().page("vanished"), Some(4));
}

#[test]
fn empty_document_shows_single_empty_page() {
    let library = StaticLibrary::new([("blank", " \n\t\n ")]);
    let events = [InputEvent::Activate, InputEvent::Next, InputEvent::Previous];
    let mut app = make_app(library, &events, MemoryProgress::default());

    let results = ticks(&mut app, 4);
    assert_eq!(
        results,
        vec![
            TickResult::Rendered,
            TickResult::Rendered,
            TickResult::NoRender,
            TickResult::NoRender,
        ]
    );
    assert_eq!(app.display().frames.last(), Some(&page("blank", &[], "1/1")));
    assert_eq!(
        app.navigation(),
        NavigationState::ViewingDocument {
            document: "blank",
            current_page: 0,
            total_pages: 1
        }
    );
}

#[test]
fn back_returns_to_the_same_cursor() {
    let events = [InputEvent::Next, InputEvent::Activate, InputEvent::Activate];
    let mut app = make_app(greek_library(), &events, MemoryProgress::default());

    ticks(&mut app, 4);
    assert_eq!(
        app.navigation(),
        NavigationState::SelectingDocument { cursor: 1 }
    );
    assert_eq!(app.display().frames.last(), Some(&library_frame(1)));
    assert_eq!(app.progress().page("latin"), Some(0));
}

#[test]
fn exit_entry_terminates_and_shutdown_sleeps_display() {
    let events = [InputEvent::Previous, InputEvent::Activate, InputEvent::Next];
    let mut app = make_app(greek_library(), &events, MemoryProgress::default());

    let results = ticks(&mut app, 4);
    assert_eq!(
        results,
        vec![
            TickResult::Rendered,
            TickResult::Rendered,
            TickResult::Exit,
            TickResult::Exit,
        ]
    );
    assert_eq!(app.navigation(), NavigationState::Terminated);
    assert_eq!(app.progress_store().saves, 0);

    let display = app.shutdown().unwrap();
    assert!(display.shut_down);
    assert_eq!(display.frames.len(), 2);
}

#[test]
fn closed_input_while_reading_keeps_progress() {
    let events = [InputEvent::Activate, InputEvent::Next];
    let mut app = make_app(greek_library(), &events, MemoryProgress::default());

    app.run().unwrap();

    assert_eq!(app.navigation(), NavigationState::Terminated);
    assert_eq!(app.progress_store().stored.page("greek"), Some(1));
}

#[test]
fn unreadable_document_stays_in_selection() {
    let library = StaticLibrary::new([("fine", "text")]).with_unreadable("broken");
    let events = [InputEvent::Next, InputEvent::Activate];
    let mut app = make_app(library, &events, MemoryProgress::default());

    let results = ticks(&mut app, 3);
    assert_eq!(results[2], TickResult::NoRender);
    assert_eq!(
        app.navigation(),
        NavigationState::SelectingDocument { cursor: 1 }
    );
    assert!(app.line_store().is_empty());
}

#[test]
fn reopening_a_document_hits_the_line_cache() {
    let events = [
        InputEvent::Activate,
        InputEvent::Activate,
        InputEvent::Activate,
    ];
    let mut app = make_app(greek_library(), &events, MemoryProgress::default());

    ticks(&mut app, 4);
    assert_eq!(app.library().loads(), 1);
    assert_eq!(app.line_store().writes(), 1);
    assert_eq!(app.line_store().reads(), 2);
    assert_eq!(
        app.display().frames.last(),
        Some(&page("greek", &["alpha beta", "gamma delta"], "1/2"))
    );
}

#[test]
fn failed_progress_save_still_returns_to_selection() {
    let progress = MemoryProgress {
        fail_saves: true,
        ..MemoryProgress::default()
    };
    let events = [InputEvent::Activate, InputEvent::Next, InputEvent::Activate];
    let mut app = make_app(greek_library(), &events, progress);

    ticks(&mut app, 4);
    assert_eq!(
        app.navigation(),
        NavigationState::SelectingDocument { cursor: 0 }
    );
    assert_eq!(app.progress().page("greek"), Some(1));
    assert!(app.progress_store().stored.is_empty());
}

#[test]
fn exit_only_menu_does_not_redraw_on_rotation() {
    let library = StaticLibrary::default();
    let events = [InputEvent::Next, InputEvent::Previous, InputEvent::Activate];
    let mut app = make_app(library, &events, MemoryProgress::default());

    let results = ticks(&mut app, 4);
    assert_eq!(
        results,
        vec![
            TickResult::Rendered,
            TickResult::NoRender,
            TickResult::NoRender,
            TickResult::Exit,
        ]
    );
}

#[test]
fn with_screen_reports_current_page() {
    let mut app = make_app(greek_library(), &[InputEvent::Activate], MemoryProgress::default());
    ticks(&mut app, 2);

    let mut footer = None;
    app.with_screen(|screen| {
        if let Screen::Page {
            page_index,
            total_pages,
            ..
        } = screen
        {
            footer = Some(format!("{}/{}", page_index + 1, total_pages));
        }
    })
    .unwrap();
    assert_eq!(footer.as_deref(), Some("1/2"));
}

/// Replays its script, then fails instead of reporting a closed source.
struct BrokenInput {
    script: ScriptedInput,
}

impl InputProvider for BrokenInput {
    type Error = &'static str;

    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        match self.script.next_event() {
            Ok(Some(event)) => Ok(Some(event)),
            _ => Err("bad byte"),
        }
    }
}

#[test]
fn input_failure_while_reading_saves_page_and_terminates() {
    let script = ScriptedInput::new([InputEvent::Activate, InputEvent::Next]);
    let mut app = ReaderApp::new(
        greek_library(),
        BrokenInput { script },
        MemoryLineStore::new(),
        MemoryProgress::default(),
        FixedAdvanceMeasurer::new("fixed", 10, 12),
        RecordingDisplay::default(),
        ReaderConfig::default(),
    );

    let err = app.run().unwrap_err();
    assert!(matches!(err, AppError::Input("bad byte")));
    assert!(app.input.script.remaining().is_empty());
    assert_eq!(app.navigation(), NavigationState::Terminated);
    assert_eq!(app.progress_store().saves, 1);
    assert_eq!(app.progress_store().stored.page("greek"), Some(1));

    let display = app.shutdown().unwrap();
    assert!(display.shut_down);
}
