#![cfg_attr(not(test), no_std)]

//! Pagination and progress-tracking core for a fixed-size monochrome reader.
//!
//! Raw document text is wrapped into display-width-bounded lines
//! ([`wrap`]), memoised per layout ([`cache`]), split into fixed-size pages
//! ([`paginate`]) and driven by the navigation state machine in [`app`].

extern crate alloc;

pub mod app;
pub mod cache;
pub mod content;
pub mod input;
pub mod measure;
pub mod paginate;
pub mod progress;
pub mod render;
pub mod wrap;
