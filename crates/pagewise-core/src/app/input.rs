impl<DL, IN, LS, PS, M, D> ReaderApp<DL, IN, LS, PS, M, D>
where
    DL: DocumentLibrary,
    IN: InputProvider,
    LS: LineStore,
    PS: ProgressStore,
    M: TextMeasurer,
    D: Display,
{
    /// Applies one event to the state machine without touching the display.
    pub fn apply_input_event(&mut self, event: InputEvent) {
        match self.ui {
            UiState::Library { cursor } => self.apply_library_input(cursor, event),
            UiState::Reading { cursor, page } => self.apply_reading_input(cursor, page, event),
            UiState::Terminated => {
                debug!("ui-nav: ignoring {:?} after termination", event);
            }
        }
    }

    fn apply_library_input(&mut self, cursor: usize, event: InputEvent) {
        let total_items = self.library_item_count();

        match event {
            InputEvent::Next => {
                self.ui = UiState::Library {
                    cursor: rotate_next(cursor, total_items),
                };
            }
            InputEvent::Previous => {
                self.ui = UiState::Library {
                    cursor: rotate_prev(cursor, total_items),
                };
            }
            InputEvent::Activate => {
                if cursor == self.exit_item_index() {
                    info!("ui-nav: exit selected");
                    self.terminate();
                } else {
                    self.open_document(cursor);
                }
            }
        }
    }

    fn apply_reading_input(&mut self, cursor: usize, page: usize, event: InputEvent) {
        let last_page = self
            .open
            .as_ref()
            .map_or(0, |open| open.total_pages.saturating_sub(1));

        match event {
            InputEvent::Next => {
                self.ui = UiState::Reading {
                    cursor,
                    page: (page + 1).min(last_page),
                };
            }
            InputEvent::Previous => {
                self.ui = UiState::Reading {
                    cursor,
                    page: page.saturating_sub(1),
                };
            }
            InputEvent::Activate => self.close_document(cursor, page),
        }
    }
}
