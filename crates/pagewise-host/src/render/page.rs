//! Draws library menus and text pages into a frame buffer.

use embedded_graphics::{
    Drawable,
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::Point,
    text::{Baseline, Text},
};
use monoframe::FrameBuffer;
use pagewise_core::{
    paginate::{PageLayout, footer_label},
    render::{MenuItemView, Screen},
};

use super::FrameRenderer;

const MENU_TITLE_Y: usize = 14;
const MENU_LIST_TOP: usize = 50;
const MENU_TEXT_X: usize = 50;
const MENU_ROW_GAP: usize = 10;
const MENU_CURSOR_MARK: &str = "> ";
const MENU_PLAIN_MARK: &str = "  ";

#[derive(Clone, Copy)]
pub struct PageRenderer {
    font: &'static MonoFont<'static>,
}

impl PageRenderer {
    pub const fn new(font: &'static MonoFont<'static>) -> Self {
        Self { font }
    }

    fn draw_text(&self, frame: &mut FrameBuffer, x: usize, y: usize, text: &str) {
        let style = MonoTextStyle::new(self.font, BinaryColor::On);
        let _ = Text::with_baseline(
            text,
            Point::new(x as i32, y as i32),
            style,
            Baseline::Top,
        )
        .draw(frame);
    }

    fn menu_row_pitch(&self) -> usize {
        self.font.character_size.height as usize + MENU_ROW_GAP
    }

    fn draw_library(
        &self,
        frame: &mut FrameBuffer,
        title: &str,
        items: &[MenuItemView<'_>],
        cursor: usize,
    ) {
        self.draw_text(frame, MENU_TEXT_X, MENU_TITLE_Y, title);

        let pitch = self.menu_row_pitch();
        let visible = (frame.height().saturating_sub(MENU_LIST_TOP) / pitch).max(1);
        let cursor = cursor.min(items.len().saturating_sub(1));
        let window_start = (cursor + 1).saturating_sub(visible);

        let mut label = String::new();
        for (row, (index, item)) in items
            .iter()
            .enumerate()
            .skip(window_start)
            .take(visible)
            .enumerate()
        {
            label.clear();
            label.push_str(if index == cursor {
                MENU_CURSOR_MARK
            } else {
                MENU_PLAIN_MARK
            });
            label.push_str(item.label);
            self.draw_text(frame, MENU_TEXT_X, MENU_LIST_TOP + row * pitch, &label);
        }
    }

    fn draw_page(
        &self,
        frame: &mut FrameBuffer,
        lines: &[String],
        page_index: usize,
        total_pages: usize,
        layout: PageLayout,
    ) {
        let x = layout.margin as usize;
        let mut y = layout.body_top() as usize;
        for line in lines {
            self.draw_text(frame, x, y, line);
            y += layout.line_height as usize;
        }

        let footer = footer_label(page_index, total_pages);
        self.draw_text(frame, x, layout.footer_top() as usize, &footer);
    }
}

impl FrameRenderer for PageRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut FrameBuffer) {
        frame.clear(false);

        match screen {
            Screen::Library {
                title,
                items,
                cursor,
            } => self.draw_library(frame, title, items, cursor),
            Screen::Page {
                lines,
                page_index,
                total_pages,
                layout,
                ..
            } => self.draw_page(frame, lines, page_index, total_pages, layout),
        }
    }
}
