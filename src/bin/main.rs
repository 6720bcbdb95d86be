use std::{fmt, io};

use anyhow::{Context, anyhow};
use clap::Parser;
use log::{error, info};
use pagewise_core::{
    app::{ReaderApp, ReaderConfig},
    cache::LineStore,
    content::DocumentLibrary,
    input::InputProvider,
    measure::TextMeasurer,
    progress::ProgressStore,
    render::Display,
};
use pagewise_host::{
    input::keys::{KeyConfig, KeyInput},
    platform::{display::PanelDisplay, pbm_panel::PbmPanel},
    render::{
        font::{FONT_NAMES, MonoFontMeasurer},
        page::PageRenderer,
    },
    storage::{
        line_cache::JsonLineStore, progress_file::JsonProgressStore, text_dir::TextDirectory,
    },
};

use settings::{Args, Settings};

#[path = "main/logging.rs"]
mod logging;
#[path = "main/settings.rs"]
mod settings;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_level.into(), args.log_file.as_deref())?;
    let settings = Settings::resolve(&args)?;

    info!(
        "pagewise starting: documents={} font={} panel={}x{}",
        settings.documents.display(),
        settings.font,
        settings.width,
        settings.height
    );

    let measurer = MonoFontMeasurer::by_name(&settings.font).ok_or_else(|| {
        anyhow!(
            "unknown font {:?}; available: {}",
            settings.font,
            FONT_NAMES.join(", ")
        )
    })?;

    let library = TextDirectory::open(&settings.documents).with_context(|| {
        format!(
            "cannot read document directory {}",
            settings.documents.display()
        )
    })?;

    let cache_dir = settings.cache_dir();
    let line_store = JsonLineStore::open(&cache_dir)
        .with_context(|| format!("cannot create cache directory {}", cache_dir.display()))?;
    let progress_store = JsonProgressStore::new(settings.progress_file());

    let frame_path = settings.frame();
    let panel = PbmPanel::new(&frame_path, settings.width, settings.height);
    let mut display = PanelDisplay::new(panel, PageRenderer::new(measurer.font()));
    display
        .init()
        .with_context(|| format!("cannot initialise panel at {}", frame_path.display()))?;

    if library.is_empty() {
        info!("no documents found; shutting down");
        display.shutdown().context("panel shutdown failed")?;
        return Ok(());
    }

    let config = ReaderConfig {
        margin: settings.margin,
        ..ReaderConfig::default()
    };
    let input = KeyInput::new(io::stdin().lock(), KeyConfig::default());
    let app = ReaderApp::new(
        library,
        input,
        line_store,
        progress_store,
        measurer,
        display,
        config,
    );

    run_reader(app)?;

    info!("pagewise finished");
    Ok(())
}

/// Runs the reader to termination and shuts the display down on every path,
/// including an input or display failure.
fn run_reader<DL, IN, LS, PS, M, D>(mut app: ReaderApp<DL, IN, LS, PS, M, D>) -> anyhow::Result<()>
where
    DL: DocumentLibrary,
    IN: InputProvider,
    IN::Error: fmt::Debug,
    LS: LineStore,
    PS: ProgressStore,
    M: TextMeasurer,
    D: Display,
    D::Error: std::error::Error + Send + Sync + 'static,
{
    let outcome = app.run();
    if let Err(err) = &outcome {
        error!("reader stopped early: {err}");
    }

    app.shutdown().context("panel shutdown failed")?;
    outcome.map_err(|err| anyhow!("reader stopped: {err}"))
}
