// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Button widget implementation.

use super::{text_width, Widget};
use crate::base::Result;
use crate::colors::Color;
use crate::events::{Event, Point, Rect};
use crate::render::Renderer;

/// A push button with a text caption.
#[derive(Debug, Clone)]
pub struct Button {
    bbox: Rect,
    text: String,
    font_size: f32,
    background: Color,
    border: Color,
}

impl Button {
    /// Creates a new button with the given text.
    pub fn new(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            bbox: Rect::new(0, 0, 0, 0),
            text: text.into(),
            font_size,
            background: Color::WHITE,
            border: Color::BLACK,
        }
    }

    /// Width that fits the caption plus padding.
    pub fn preferred_width(&self) -> u32 {
        text_width(&self.text, self.font_size) + 24
    }
}

impl Widget for Button {
    fn bbox(&self) -> Rect {
        self.bbox
    }

    fn set_bbox(&mut self, bbox: Rect) {
        self.bbox = bbox;
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let bbox = self.bbox;
        renderer.fill_rect(bbox, self.background)?;
        renderer.stroke_rect(bbox, self.border)?;

        let caption = text_width(&self.text, self.font_size) as i32;
        let text_pos = Point::new(
            bbox.x + bbox.width as i32 / 2 - caption / 2,
            bbox.y + bbox.height as i32 / 2 + (self.font_size / 3.0) as i32,
        );
        renderer.draw_text(&self.text, text_pos, Color::BLACK)
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        event.is_left_click_in(self.bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Key, MouseButton};
    use crate::render::tests::{Call, RecordingRenderer};

    #[test]
    fn clicks_inside_are_handled() {
        let mut button = Button::new("Push Item", 20.0);
        button.set_bbox(Rect::new(100, 5, 120, 30));
        assert!(button.handle_event(&Event::click(Point::new(150, 20), MouseButton::Left)));
        assert!(!button.handle_event(&Event::click(Point::new(50, 20), MouseButton::Left)));
        assert!(!button.handle_event(&Event::key_press(Key::Enter)));
    }

    #[test]
    fn renders_background_border_then_caption() {
        let mut button = Button::new("Pop Item", 20.0);
        button.set_bbox(Rect::new(0, 0, button.preferred_width(), 30));
        let mut renderer = RecordingRenderer::default();
        button.render(&mut renderer).unwrap();
        assert!(matches!(renderer.calls[0], Call::Fill(_, Color::WHITE)));
        assert!(matches!(renderer.calls[1], Call::Stroke(_, Color::BLACK)));
        assert_eq!(renderer.texts(), ["Pop Item"]);
    }
}
