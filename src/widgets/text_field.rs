// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Single-line text input.

use super::Widget;
use crate::base::Result;
use crate::colors::Color;
use crate::events::{Event, EventData, Key, Point, Rect};
use crate::render::Renderer;

/// An always-focused, single-line text field.
#[derive(Debug, Clone)]
pub struct TextField {
    bbox: Rect,
    text: String,
    font_size: f32,
}

impl TextField {
    /// Creates an empty field.
    pub fn new(font_size: f32) -> Self {
        Self {
            bbox: Rect::new(0, 0, 0, 0),
            text: String::new(),
            font_size,
        }
    }

    /// Returns the current contents.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for TextField {
    fn bbox(&self) -> Rect {
        self.bbox
    }

    fn set_bbox(&mut self, bbox: Rect) {
        self.bbox = bbox;
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.fill_rect(self.bbox, Color::WHITE)?;
        renderer.stroke_rect(self.bbox, Color::BLACK)?;
        let baseline = Point::new(
            self.bbox.x + 4,
            self.bbox.y + self.bbox.height as i32 / 2 + (self.font_size / 3.0) as i32,
        );
        renderer.draw_text(&self.text, baseline, Color::BLACK)
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match event.data {
            EventData::Char { ch } if !ch.is_control() => {
                self.text.push(ch);
                true
            }
            EventData::Key {
                key: Key::Backspace,
            } => self.text.pop().is_some(),
            _ => false,
        }
    }
}
