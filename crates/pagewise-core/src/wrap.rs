//! Greedy word wrapping of raw document text into display-width-bounded lines.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{mem, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::measure::TextMeasurer;

/// Ordered lines of one document wrapped for one layout.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WrappedLines(Vec<String>);

impl WrappedLines {
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for WrappedLines {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for WrappedLines {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

/// Collapses every whitespace run (newlines included) to a single space and
/// trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Packs the words of `text` greedily into lines narrower than `max_width`.
///
/// A line is extended with the next word while the joined candidate measures
/// strictly less than `max_width`. A word that is too wide on its own still
/// gets a line of its own; words are never split.
pub fn wrap_text<M>(text: &str, max_width: u32, measurer: &M) -> WrappedLines
where
    M: TextMeasurer + ?Sized,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let mut candidate = String::with_capacity(current.len() + 1 + word.len());
        candidate.push_str(&current);
        candidate.push(' ');
        candidate.push_str(word);

        if measurer.text_width(&candidate) < max_width {
            current = candidate;
        } else {
            lines.push(mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    WrappedLines(lines)
}
