use macroquad::prelude::*;

use crate::application::Command;

/// Clickable control drawn over the grid.
/// The rectangle it was drawn with is the rectangle it is hit-tested against.
#[derive(Clone, Debug)]
pub struct Button {
    rect: Rect,
    text: String,
    action: Command,
    color: Color,
    hover_color: Color,
    text_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, action: Command) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            text: text.into(),
            action,
            color: WHITE,
            hover_color: Color::from_rgba(200, 200, 200, 255),
            text_color: BLACK,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn action(&self) -> Command {
        self.action
    }

    /// Half-open hit test: the right and bottom edges belong to the next pixel
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        let Rect { x, y, w, h } = self.rect;
        mouse_pos.0 >= x && mouse_pos.0 < x + w && mouse_pos.1 >= y && mouse_pos.1 < y + h
    }

    /// Draw button with hover effect and a centered label
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, color);

        let text_size = measure_text(&self.text, None, 24, 1.0);
        draw_text(
            &self.text,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            24.0,
            self.text_color,
        );
    }
}
