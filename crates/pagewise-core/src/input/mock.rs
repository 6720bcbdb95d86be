use alloc::{collections::VecDeque, vec::Vec};

use super::{InputEvent, InputProvider};

/// Replays a fixed list of events, then reports the source as closed.
#[derive(Default, Debug, Clone)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> Vec<InputEvent> {
        self.events.iter().copied().collect()
    }
}

impl InputProvider for ScriptedInput {
    type Error = core::convert::Infallible;

    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}
