use std::{fs::OpenOptions, path::Path};

use anyhow::Context;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};

/// Routes the `log` facade to `log_file` when given, else to stderr at every
/// level.
///
/// Stdout stays silent and stdin carries key commands.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> anyhow::Result<()> {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            WriteLogger::init(level, config, file)?;
        }
        None => TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Never)?,
    }
    Ok(())
}
