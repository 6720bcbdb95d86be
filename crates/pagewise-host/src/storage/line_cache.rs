//! JSON files holding wrapped lines, one per document and layout.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use pagewise_core::{cache::LineStore, measure::LayoutKey, wrap::WrappedLines};
use serde::{Deserialize, Serialize};

use super::{StoreError, atomic_write};

const FILE_SUFFIX: &str = "lines.json";

#[derive(Deserialize)]
struct LineCacheFile {
    document: String,
    layout: LayoutKey,
    lines: WrappedLines,
}

#[derive(Serialize)]
struct LineCacheFileRef<'a> {
    document: &'a str,
    layout: &'a LayoutKey,
    lines: &'a WrappedLines,
}

/// Directory of `<document>.<font>-<size>.w<width>m<margin>.lines.json` files.
///
/// Each file repeats its document name and layout key; a file whose content
/// does not match the requested pair is treated as absent.
#[derive(Clone, Debug)]
pub struct JsonLineStore {
    dir: PathBuf,
}

impl JsonLineStore {
    /// Uses `dir` for cache files, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entry_path(&self, document: &str, key: &LayoutKey) -> PathBuf {
        self.dir.join(format!(
            "{}.{}-{}.w{}m{}.{}",
            file_safe(document),
            file_safe(&key.font),
            key.font_size,
            key.display_width,
            key.margin,
            FILE_SUFFIX
        ))
    }
}

fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl LineStore for JsonLineStore {
    type Error = StoreError;

    fn read(
        &mut self,
        document: &str,
        key: &LayoutKey,
    ) -> Result<Option<WrappedLines>, Self::Error> {
        let path = self.entry_path(document, key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let file: LineCacheFile = serde_json::from_slice(&bytes)?;
        if file.document != document || file.layout != *key {
            debug!(
                "line-cache: {} belongs to document={:?}, treating as absent",
                path.display(),
                file.document
            );
            return Ok(None);
        }

        Ok(Some(file.lines))
    }

    fn write(
        &mut self,
        document: &str,
        key: &LayoutKey,
        lines: &WrappedLines,
    ) -> Result<(), Self::Error> {
        let path = self.entry_path(document, key);
        let json = serde_json::to_vec(&LineCacheFileRef {
            document,
            layout: key,
            lines,
        })?;
        atomic_write(&path, &json)?;
        debug!(
            "line-cache: stored {} line(s) in {}",
            lines.len(),
            path.display()
        );
        Ok(())
    }
}
