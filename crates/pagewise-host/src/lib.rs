//! Hosted platform layer: file-backed stores, mono-font rendering, a file
//! panel and line-oriented key input.

pub mod input;
pub mod platform;
pub mod render;
pub mod storage;
