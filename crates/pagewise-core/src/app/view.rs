impl<DL, IN, LS, PS, M, D> ReaderApp<DL, IN, LS, PS, M, D>
where
    DL: DocumentLibrary,
    IN: InputProvider,
    LS: LineStore,
    PS: ProgressStore,
    M: TextMeasurer,
    D: Display,
{
    /// Builds the reader in document selection with the cursor on the first
    /// entry. Progress is loaded once, here.
    pub fn new(
        library: DL,
        input: IN,
        line_store: LS,
        mut progress_store: PS,
        measurer: M,
        display: D,
        config: ReaderConfig,
    ) -> Self {
        let (width, height) = display.dimensions();
        let layout_key = config.layout_key(width, &measurer);
        let page_layout = config.page_layout(height, measurer.font_size());
        let progress = progress_store.load();

        info!(
            "reader: documents={} progress_entries={} display={}x{} font={} size={} lines_per_page={}",
            library.document_count(),
            progress.len(),
            width,
            height,
            layout_key.font,
            layout_key.font_size,
            page_layout.lines_per_page()
        );

        Self {
            library,
            input,
            lines: LineCache::new(line_store),
            progress_store,
            progress,
            measurer,
            display,
            config,
            layout_key,
            page_layout,
            ui: UiState::Library { cursor: 0 },
            open: None,
            last_rendered: None,
        }
    }

    /// Runs one step: the first call paints the initial screen, every later
    /// call blocks for one input event and applies it.
    ///
    /// An input failure terminates the reader (saving the open document's
    /// page) before the error is returned.
    pub fn tick(&mut self) -> TickOutcome<IN, D> {
        if self.ui == UiState::Terminated {
            return Ok(TickResult::Exit);
        }

        if self.last_rendered.is_some() {
            match self.input.next_event() {
                Ok(Some(event)) => self.apply_input_event(event),
                Ok(None) => {
                    info!("input: source closed");
                    self.terminate();
                }
                Err(err) => {
                    warn!("input: provider failed, terminating");
                    self.terminate();
                    return Err(AppError::Input(err));
                }
            }
        }

        if self.ui == UiState::Terminated {
            return Ok(TickResult::Exit);
        }

        self.render_if_changed()
    }

    /// Ticks until the reader terminates.
    pub fn run(&mut self) -> Result<(), AppError<IN::Error, D::Error>> {
        while self.tick()? != TickResult::Exit {}
        Ok(())
    }

    /// Calls `f` with the current screen. Nothing is called once terminated.
    pub fn with_screen<F>(&self, f: F) -> Result<(), PageError>
    where
        F: FnOnce(Screen<'_>),
    {
        compose_screen(
            self.ui,
            &self.library,
            self.open.as_ref(),
            &self.config,
            self.page_layout,
            f,
        )
        .map(|_| ())
    }

    pub fn navigation(&self) -> NavigationState<'_> {
        match self.ui {
            UiState::Library { cursor } => NavigationState::SelectingDocument { cursor },
            UiState::Reading { page, .. } => match self.open.as_ref() {
                Some(open) => NavigationState::ViewingDocument {
                    document: &open.name,
                    current_page: page,
                    total_pages: open.total_pages,
                },
                None => NavigationState::Terminated,
            },
            UiState::Terminated => NavigationState::Terminated,
        }
    }

    pub fn progress(&self) -> &ProgressRecord {
        &self.progress
    }

    pub fn page_layout(&self) -> PageLayout {
        self.page_layout
    }

    pub fn layout_key(&self) -> &LayoutKey {
        &self.layout_key
    }

    pub fn line_store(&self) -> &LS {
        self.lines.store()
    }

    pub fn progress_store(&self) -> &PS {
        &self.progress_store
    }

    pub fn library(&self) -> &DL {
        &self.library
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Blanks and sleeps the display, handing it back to the caller.
    pub fn shutdown(mut self) -> Result<D, D::Error> {
        if self.ui != UiState::Terminated {
            self.terminate();
        }
        self.display.shutdown()?;
        Ok(self.display)
    }

    fn current_view(&self) -> Option<RenderedView> {
        match self.ui {
            UiState::Library { cursor } => Some(RenderedView::Library { cursor }),
            UiState::Reading { cursor, page } => Some(RenderedView::Page {
                document: cursor,
                page,
            }),
            UiState::Terminated => None,
        }
    }

    fn render_if_changed(&mut self) -> TickOutcome<IN, D> {
        let Some(view) = self.current_view() else {
            return Ok(TickResult::NoRender);
        };
        if self.last_rendered == Some(view) {
            debug!("render: unchanged view={:?}, skipping refresh", view);
            return Ok(TickResult::NoRender);
        }

        let display = &mut self.display;
        let shown = compose_screen(
            self.ui,
            &self.library,
            self.open.as_ref(),
            &self.config,
            self.page_layout,
            |screen| display.show(screen),
        );

        match shown {
            Ok(Some(Ok(()))) => {
                debug!("render: view={:?}", view);
                self.last_rendered = Some(view);
                Ok(TickResult::Rendered)
            }
            Ok(Some(Err(err))) => Err(AppError::Display(err)),
            Ok(None) => Ok(TickResult::NoRender),
            Err(err) => Err(AppError::Page(err)),
        }
    }
}
