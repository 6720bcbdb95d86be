impl<DL, IN, LS, PS, M, D> ReaderApp<DL, IN, LS, PS, M, D>
where
    DL: DocumentLibrary,
    IN: InputProvider,
    LS: LineStore,
    PS: ProgressStore,
    M: TextMeasurer,
    D: Display,
{
    fn open_document(&mut self, index: usize) {
        let Some(name) = self.library.document_name(index).map(str::to_string) else {
            warn!("ui-nav: no document at cursor={}", index);
            return;
        };

        let library = &mut self.library;
        let lines = match self
            .lines
            .get(&name, &self.layout_key, &self.measurer, || library.load_text(index))
        {
            Ok(lines) => lines,
            Err(err) => {
                warn!("ui-nav: cannot open document={:?} err={:?}", name, err);
                return;
            }
        };

        let total_pages = self.page_layout.page_count(lines.len());
        let saved_page = self.progress.page(&name).unwrap_or(0);
        let page = self.page_layout.clamp_page(lines.len(), saved_page);
        if page != saved_page {
            debug!(
                "ui-nav: saved page {} past end of document={:?}, clamped to {}",
                saved_page, name, page
            );
        }

        info!(
            "ui-nav: open document={:?} lines={} pages={} page={}",
            name,
            lines.len(),
            total_pages,
            page
        );

        self.open = Some(OpenDocument {
            name,
            lines,
            total_pages,
        });
        self.ui = UiState::Reading {
            cursor: index,
            page,
        };
    }

    /// Records the page being left and returns to selection on the same entry.
    fn close_document(&mut self, cursor: usize, page: usize) {
        if let Some(open) = self.open.take() {
            self.progress.set_page(&open.name, page);
            match self.progress_store.save(&self.progress) {
                Ok(()) => debug!(
                    "progress: saved document={:?} page={}/{}",
                    open.name,
                    page.saturating_add(1),
                    open.total_pages
                ),
                Err(err) => warn!(
                    "progress: save failed document={:?} page={} err={:?}",
                    open.name, page, err
                ),
            }
        }

        self.ui = UiState::Library { cursor };
    }

    fn terminate(&mut self) {
        if let UiState::Reading { cursor, page } = self.ui {
            self.close_document(cursor, page);
        }
        self.ui = UiState::Terminated;
    }

    fn library_item_count(&self) -> usize {
        self.library.document_count().saturating_add(1)
    }

    fn exit_item_index(&self) -> usize {
        self.library.document_count()
    }
}
