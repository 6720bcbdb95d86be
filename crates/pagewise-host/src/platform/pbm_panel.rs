//! Panel that publishes each frame as a PBM image file.
//!
//! Useful wherever the reader runs without a physical panel: an image viewer
//! pointed at the file shows the current page.

use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use log::info;
use monoframe::{FrameBuffer, Panel, pbm};

use crate::storage::atomic_write;

#[derive(Debug)]
pub enum PanelError {
    Io(io::Error),
    /// Frame size differs from the panel's advertised capabilities.
    FrameSize { width: usize, height: usize },
    /// A frame arrived after `sleep`.
    Asleep,
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot write frame: {err}"),
            Self::FrameSize { width, height } => {
                write!(f, "frame is {width}x{height}, panel size differs")
            }
            Self::Asleep => f.write_str("panel is asleep"),
        }
    }
}

impl std::error::Error for PanelError {}

#[derive(Debug)]
pub struct PbmPanel {
    path: PathBuf,
    width: u32,
    height: u32,
    refreshes: usize,
    asleep: bool,
}

impl PbmPanel {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
            refreshes: 0,
            asleep: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Frames written so far, clears included.
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    pub fn is_asleep(&self) -> bool {
        self.asleep
    }

    fn publish(&mut self, frame: &FrameBuffer) -> Result<(), PanelError> {
        if self.asleep {
            return Err(PanelError::Asleep);
        }
        if frame.width() != self.width as usize || frame.height() != self.height as usize {
            return Err(PanelError::FrameSize {
                width: frame.width(),
                height: frame.height(),
            });
        }

        atomic_write(&self.path, &pbm::encode(frame)).map_err(PanelError::Io)?;
        self.refreshes += 1;
        Ok(())
    }
}

impl Panel for PbmPanel {
    type Error = PanelError;

    fn capabilities(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn render(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        self.publish(frame)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        let blank = FrameBuffer::new(self.width as usize, self.height as usize);
        self.publish(&blank)
    }

    fn sleep(&mut self) -> Result<(), Self::Error> {
        self.asleep = true;
        info!(
            "panel: asleep after {} refresh(es), last frame {}",
            self.refreshes,
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use pagewise_core::{
        paginate::PageLayout,
        render::{Display, Screen},
    };

    use super::*;
    use crate::{platform::display::PanelDisplay, render::page::PageRenderer};

    #[test]
    fn frames_are_written_as_pbm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.pbm");
        let mut panel = PbmPanel::new(&path, 16, 4);

        let mut frame = FrameBuffer::new(16, 4);
        frame.set_pixel(0, 0, true);
        panel.render(&frame).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P4\n16 4\n"));
        assert_eq!(bytes.len(), b"P4\n16 4\n".len() + 8);
        assert_eq!(panel.refreshes(), 1);
    }

    #[test]
    fn mismatched_frame_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut panel = PbmPanel::new(dir.path().join("frame.pbm"), 16, 4);

        let result = panel.render(&FrameBuffer::new(8, 4));
        assert!(matches!(
            result,
            Err(PanelError::FrameSize {
                width: 8,
                height: 4
            })
        ));
    }

    #[test]
    fn display_lifecycle_clears_and_sleeps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.pbm");
        let panel = PbmPanel::new(&path, 160, 120);
        let mut display = PanelDisplay::new(panel, PageRenderer::new(&FONT_6X10));

        assert_eq!(display.dimensions(), (160, 120));
        display.init().unwrap();
        display
            .show(Screen::Page {
                title: "doc",
                lines: &["some text".to_string()],
                page_index: 0,
                total_pages: 1,
                layout: PageLayout::for_font(120, 10, 10),
            })
            .unwrap();
        assert!(display.frame().ink_count() > 0);

        display.shutdown().unwrap();
        assert!(display.panel().is_asleep());
        assert_eq!(display.panel().refreshes(), 3);

        let blank = pbm::encode(&FrameBuffer::new(160, 120));
        assert_eq!(fs::read(&path).unwrap(), blank);
        assert!(matches!(
            display.show(Screen::Page {
                title: "doc",
                lines: &[],
                page_index: 0,
                total_pages: 1,
                layout: PageLayout::for_font(120, 10, 10),
            }),
            Err(PanelError::Asleep)
        ));
    }
}
