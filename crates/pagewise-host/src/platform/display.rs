use core::fmt::Debug;

use log::debug;
use monoframe::{FrameBuffer, Panel};
use pagewise_core::render::{Display, Screen};

use crate::render::FrameRenderer;

/// Adapts a frame-level [`Panel`] to the reader's [`Display`] contract by
/// rasterising each screen into one reusable frame buffer.
#[derive(Debug)]
pub struct PanelDisplay<P, R> {
    panel: P,
    renderer: R,
    frame: FrameBuffer,
}

impl<P, R> PanelDisplay<P, R>
where
    P: Panel,
    R: FrameRenderer,
{
    pub fn new(panel: P, renderer: R) -> Self {
        let (width, height) = panel.capabilities();
        Self {
            panel,
            renderer,
            frame: FrameBuffer::new(width as usize, height as usize),
        }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Last frame handed to the panel.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }
}

impl<P, R> Display for PanelDisplay<P, R>
where
    P: Panel,
    P::Error: Debug,
    R: FrameRenderer,
{
    type Error = P::Error;

    fn dimensions(&self) -> (u32, u32) {
        self.panel.capabilities()
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        self.panel.clear()
    }

    fn show(&mut self, screen: Screen<'_>) -> Result<(), Self::Error> {
        self.renderer.render(screen, &mut self.frame);
        debug!("display: flushing frame ink={}", self.frame.ink_count());
        self.panel.render(&self.frame)
    }

    fn shutdown(&mut self) -> Result<(), Self::Error> {
        self.panel.clear()?;
        self.panel.sleep()
    }
}
