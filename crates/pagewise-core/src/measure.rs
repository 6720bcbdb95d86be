//! Text measurement contract and layout identity.

use alloc::string::{String, ToString};

use serde::{Deserialize, Serialize};

/// Pixel width of rendered text for one font at one size.
pub trait TextMeasurer {
    /// Stable identity of the font face, e.g. `"8x13"`.
    fn font_id(&self) -> &str;

    /// Nominal font size in pixels.
    fn font_size(&self) -> u32;

    /// Rendered width of `text` in pixels.
    fn text_width(&self, text: &str) -> u32;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn font_id(&self) -> &str {
        (**self).font_id()
    }

    fn font_size(&self) -> u32 {
        (**self).font_size()
    }

    fn text_width(&self, text: &str) -> u32 {
        (**self).text_width(text)
    }
}

/// Measurer where every `char` advances by the same number of pixels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedAdvanceMeasurer {
    font_id: String,
    advance: u32,
    size: u32,
}

impl FixedAdvanceMeasurer {
    pub fn new(font_id: &str, advance: u32, size: u32) -> Self {
        Self {
            font_id: font_id.to_string(),
            advance,
            size,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn font_id(&self) -> &str {
        &self.font_id
    }

    fn font_size(&self) -> u32 {
        self.size
    }

    fn text_width(&self, text: &str) -> u32 {
        (text.chars().count() as u32).saturating_mul(self.advance)
    }
}

/// Every parameter that affects how a document wraps.
///
/// Two layouts with equal keys produce identical wrapped lines for the same
/// text, so the key is what wrapped-line caches are indexed by.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct LayoutKey {
    pub display_width: u32,
    pub margin: u32,
    pub font: String,
    pub font_size: u32,
}

impl LayoutKey {
    pub fn new(display_width: u32, margin: u32, measurer: &impl TextMeasurer) -> Self {
        Self {
            display_width,
            margin,
            font: measurer.font_id().to_string(),
            font_size: measurer.font_size(),
        }
    }

    /// Horizontal space available to a line: the display minus a margin on
    /// each side.
    pub fn wrap_width(&self) -> u32 {
        self.display_width.saturating_sub(self.margin.saturating_mul(2))
    }
}
