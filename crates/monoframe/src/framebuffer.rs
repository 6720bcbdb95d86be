//! In-memory 1bpp framebuffer.

use alloc::{vec, vec::Vec};

/// 1bpp framebuffer sized at construction.
///
/// Bit mapping within one row byte: bit 7 is the first pixel in that byte.
/// A set bit is ink (black), a cleared bit is paper (white).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    row_bytes: usize,
    bytes: Vec<u8>,
}

impl FrameBuffer {
    /// Creates a new white framebuffer.
    pub fn new(width: usize, height: usize) -> Self {
        let row_bytes = width.div_ceil(8);
        Self {
            width,
            height,
            row_bytes,
            bytes: vec![0u8; row_bytes * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per packed row, including padding bits of the last byte.
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// Returns the underlying framebuffer bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Clears framebuffer to white (`on = false`) or black (`on = true`).
    pub fn clear(&mut self, on: bool) {
        self.bytes.fill(if on { 0xFF } else { 0x00 });
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        let byte_index = y * self.row_bytes + (x / 8);
        let bit_mask = 1u8 << (7 - (x % 8));

        if on {
            self.bytes[byte_index] |= bit_mask;
        } else {
            self.bytes[byte_index] &= !bit_mask;
        }

        true
    }

    /// Reads a pixel state.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let byte_index = y * self.row_bytes + (x / 8);
        let bit_mask = 1u8 << (7 - (x % 8));
        Some((self.bytes[byte_index] & bit_mask) != 0)
    }

    /// Returns the packed payload of row `y` (zero-based).
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }

        let start = y * self.row_bytes;
        Some(&self.bytes[start..start + self.row_bytes])
    }

    /// Number of ink pixels in the frame.
    pub fn ink_count(&self) -> usize {
        (0..self.height)
            .map(|y| (0..self.width).filter(|&x| self.pixel(x, y) == Some(true)).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_bit_mapping_is_msb_first_within_byte() {
        let mut fb = FrameBuffer::new(16, 2);

        assert!(fb.set_pixel(0, 0, true));
        assert!(fb.set_pixel(7, 0, true));
        assert!(fb.set_pixel(8, 0, true));

        let row0 = fb.row(0).unwrap();
        assert_eq!(row0[0], 0b1000_0001);
        assert_eq!(row0[1], 0b1000_0000);
    }

    #[test]
    fn odd_width_rows_are_padded_to_whole_bytes() {
        let mut fb = FrameBuffer::new(10, 3);

        assert_eq!(fb.row_bytes(), 2);
        assert_eq!(fb.bytes().len(), 6);

        assert!(fb.set_pixel(9, 2, true));
        assert_eq!(fb.row(2).unwrap(), &[0x00, 0b0100_0000]);
    }

    #[test]
    fn out_of_bounds_pixel_is_ignored() {
        let mut fb = FrameBuffer::new(8, 8);

        assert!(!fb.set_pixel(8, 0, true));
        assert!(!fb.set_pixel(0, 8, true));
        assert_eq!(fb.bytes()[0], 0x00);
        assert_eq!(fb.pixel(8, 8), None);
        assert!(fb.row(8).is_none());
    }

    #[test]
    fn clear_and_ink_count_agree() {
        let mut fb = FrameBuffer::new(12, 4);
        assert_eq!(fb.ink_count(), 0);

        fb.set_pixel(3, 3, true);
        fb.set_pixel(11, 0, true);
        assert_eq!(fb.ink_count(), 2);

        fb.clear(true);
        assert_eq!(fb.ink_count(), 48);
    }
}
