//! Built-in mono fonts and their text measurer.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_7X13, FONT_8X13, FONT_9X15, FONT_9X18, FONT_10X20},
    },
    pixelcolor::BinaryColor,
    prelude::Point,
    text::{Baseline, renderer::TextRenderer},
};
use pagewise_core::measure::TextMeasurer;

/// Names accepted by [`mono_font`], smallest first.
pub const FONT_NAMES: [&str; 6] = ["6x10", "7x13", "8x13", "9x15", "9x18", "10x20"];

pub fn mono_font(name: &str) -> Option<&'static MonoFont<'static>> {
    match name {
        "6x10" => Some(&FONT_6X10),
        "7x13" => Some(&FONT_7X13),
        "8x13" => Some(&FONT_8X13),
        "9x15" => Some(&FONT_9X15),
        "9x18" => Some(&FONT_9X18),
        "10x20" => Some(&FONT_10X20),
        _ => None,
    }
}

/// Measures text exactly as [`super::page::PageRenderer`] will draw it.
#[derive(Clone, Copy)]
pub struct MonoFontMeasurer {
    name: &'static str,
    font: &'static MonoFont<'static>,
}

impl MonoFontMeasurer {
    pub fn by_name(name: &str) -> Option<Self> {
        let name = FONT_NAMES.into_iter().find(|known| *known == name)?;
        Some(Self {
            name,
            font: mono_font(name)?,
        })
    }

    pub fn font(&self) -> &'static MonoFont<'static> {
        self.font
    }
}

impl core::fmt::Debug for MonoFontMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MonoFontMeasurer")
            .field("name", &self.name)
            .finish()
    }
}

impl TextMeasurer for MonoFontMeasurer {
    fn font_id(&self) -> &str {
        self.name
    }

    fn font_size(&self) -> u32 {
        self.font.character_size.height
    }

    fn text_width(&self, text: &str) -> u32 {
        MonoTextStyle::new(self.font, BinaryColor::On)
            .measure_string(text, Point::zero(), Baseline::Top)
            .bounding_box
            .size
            .width
    }
}
