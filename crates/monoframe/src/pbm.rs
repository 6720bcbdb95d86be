//! Binary PBM (`P4`) encoding of a [`FrameBuffer`].
//!
//! P4 rows are packed MSB first with `1` meaning black, which is exactly the
//! in-memory layout, so rows are copied verbatim.

use alloc::{format, vec::Vec};

use crate::FrameBuffer;

/// Encodes the frame as a binary PBM image.
pub fn encode(frame: &FrameBuffer) -> Vec<u8> {
    let header = format!("P4\n{} {}\n", frame.width(), frame.height());
    let mut out = Vec::with_capacity(header.len() + frame.bytes().len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(frame.bytes());
    out
}
