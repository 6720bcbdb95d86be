//! `embedded-graphics` draw target over [`FrameBuffer`].
//!
//! Pixels outside the frame are dropped. `BinaryColor::On` is ink.

use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    primitives::{PointsIter, Rectangle},
};

use crate::FrameBuffer;

fn frame_coords(point: Point) -> Option<(usize, usize)> {
    Some((usize::try_from(point.x).ok()?, usize::try_from(point.y).ok()?))
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        pixels
            .into_iter()
            .filter_map(|Pixel(point, color)| Some((frame_coords(point)?, color)))
            .for_each(|((x, y), color)| {
                self.set_pixel(x, y, color.is_on());
            });
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let visible = area.intersection(&self.bounding_box());
        for point in visible.points() {
            if let Some((x, y)) = frame_coords(point) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        FrameBuffer::clear(self, color.is_on());
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        let width = u32::try_from(self.width()).unwrap_or(u32::MAX);
        let height = u32::try_from(self.height()).unwrap_or(u32::MAX);
        Size::new(width, height)
    }
}
