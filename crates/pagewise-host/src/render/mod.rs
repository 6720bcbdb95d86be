pub mod font;
pub mod page;

use monoframe::FrameBuffer;
use pagewise_core::render::Screen;

pub trait FrameRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut FrameBuffer);
}
