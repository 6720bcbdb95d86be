#![cfg_attr(not(test), no_std)]

//! Runtime-sized 1-bit frame buffer and the panel contract it is flushed to.

extern crate alloc;

mod framebuffer;
pub mod pbm;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use framebuffer::FrameBuffer;

/// A monochrome surface that accepts whole frames.
///
/// Width and height are fixed for the lifetime of the panel; callers size
/// their [`FrameBuffer`] from [`Panel::capabilities`].
pub trait Panel {
    type Error;

    /// Panel size as `(width, height)` in pixels.
    fn capabilities(&self) -> (u32, u32);

    /// Pushes a full frame to the surface.
    fn render(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;

    /// Blanks the surface.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Puts the surface into its low-power state. No further frames follow.
    fn sleep(&mut self) -> Result<(), Self::Error>;
}
