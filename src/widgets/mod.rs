// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Widgets making up the window: input field, buttons and the frame that
//! lays them out around the stack panel.

pub mod button;
pub mod frame;
pub mod text_field;

pub use button::Button;
pub use frame::Frame;
pub use text_field::TextField;

use crate::base::Result;
use crate::events::{Event, Rect};
use crate::render::Renderer;

/// A rectangular piece of the UI.
pub trait Widget {
    /// Returns the area the widget occupies.
    fn bbox(&self) -> Rect;

    /// Moves or resizes the widget.
    fn set_bbox(&mut self, bbox: Rect);

    /// Renders the widget.
    fn render(&self, renderer: &mut dyn Renderer) -> Result<()>;

    /// Handles an event.
    /// Returns true if the event was handled.
    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }
}

/// Rough advance width of `text` at `font_size`, for layout only.
pub(crate) fn text_width(text: &str, font_size: f32) -> u32 {
    (text.chars().count() as f32 * font_size * 0.5).ceil() as u32
}
