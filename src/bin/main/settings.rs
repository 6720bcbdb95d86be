use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use simplelog::LevelFilter;

const DEFAULT_WIDTH: u32 = 480;
const DEFAULT_HEIGHT: u32 = 800;
const DEFAULT_FONT: &str = "9x18";
const DEFAULT_MARGIN: u32 = 10;
const CACHE_DIR_NAME: &str = "cache";
const PROGRESS_FILE_NAME: &str = "progress.json";
const FRAME_FILE_NAME: &str = "frame.pbm";

#[derive(Parser, Debug)]
#[command(name = "pagewise", about = "Paginated plain-text reader")]
pub struct Args {
    /// Directory holding the `.txt` documents
    #[arg(short, long)]
    pub documents: Option<PathBuf>,

    /// Directory for wrapped-line cache files [default: <documents>/cache]
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Reading progress file [default: <documents>/progress.json]
    #[arg(long)]
    pub progress_file: Option<PathBuf>,

    /// PBM file that receives every rendered frame
    #[arg(long)]
    pub frame: Option<PathBuf>,

    /// Panel width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Panel height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Mono font name, e.g. 6x10 or 9x18
    #[arg(short, long)]
    pub font: Option<String>,

    /// Page margin in pixels
    #[arg(long)]
    pub margin: Option<u32>,

    /// TOML settings file; command-line flags win over its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value_t, value_enum)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Settings as read from the optional TOML file. Every key may be omitted.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub documents: PathBuf,
    pub cache_dir: Option<PathBuf>,
    pub progress_file: Option<PathBuf>,
    pub frame: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub font: String,
    pub margin: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            documents: PathBuf::from("."),
            cache_dir: None,
            progress_file: None,
            frame: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            font: DEFAULT_FONT.to_string(),
            margin: DEFAULT_MARGIN,
        }
    }
}

impl Settings {
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read settings file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Defaults, then the settings file named by `--config`, then flags.
    pub fn resolve(args: &Args) -> anyhow::Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        settings.apply_args(args);
        Ok(settings)
    }

    fn apply_args(&mut self, args: &Args) {
        if let Some(documents) = &args.documents {
            self.documents = documents.clone();
        }
        if let Some(cache_dir) = &args.cache_dir {
            self.cache_dir = Some(cache_dir.clone());
        }
        if let Some(progress_file) = &args.progress_file {
            self.progress_file = Some(progress_file.clone());
        }
        if let Some(frame) = &args.frame {
            self.frame = Some(frame.clone());
        }
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if let Some(font) = &args.font {
            self.font = font.clone();
        }
        if let Some(margin) = args.margin {
            self.margin = margin;
        }
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir
            .clone()
            .unwrap_or_else(|| self.documents.join(CACHE_DIR_NAME))
    }

    pub fn progress_file(&self) -> PathBuf {
        self.progress_file
            .clone()
            .unwrap_or_else(|| self.documents.join(PROGRESS_FILE_NAME))
    }

    pub fn frame(&self) -> PathBuf {
        self.frame
            .clone()
            .unwrap_or_else(|| self.documents.join(FRAME_FILE_NAME))
    }
}
