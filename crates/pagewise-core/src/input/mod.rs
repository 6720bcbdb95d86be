//! Input abstraction layer.

pub mod mock;

/// Logical actions consumed by the reader app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Next,
    Previous,
    Activate,
}

/// Blocking input provider.
///
/// Each physical press yields exactly one event; debouncing happens below
/// this trait.
pub trait InputProvider {
    type Error;

    /// Waits for the next event. `Ok(None)` means the source is closed and no
    /// more events will arrive.
    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
