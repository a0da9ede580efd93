// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Window layout: a toolbar on top, the stack panel in the middle, the
//! status line at the bottom and, on failures, a modal dialog.

use super::{text_width, Button, TextField, Widget};
use crate::app::{Command, Feedback, Session};
use crate::base::Result;
use crate::colors::Color;
use crate::events::{Event, EventData, Key, Point, Rect, Size};
use crate::render::Renderer;
use crate::settings::Settings;

const TOOLBAR_HEIGHT: u32 = 40;
const STATUS_HEIGHT: u32 = 28;
const GAP: i32 = 5;
const FIELD_WIDTH: u32 = 130;
const CONTROL_HEIGHT: u32 = 30;
const DIALOG_SIZE: Size = Size::new(620, 120);
const INPUT_LABEL: &str = "Enter Number: ";

/// The whole window contents, owning the session.
#[derive(Debug)]
pub struct Frame {
    session: Session,
    size: Size,
    font_size: f32,
    label_origin: Point,
    field: TextField,
    push: Button,
    pop: Button,
    ok: Button,
    panel: Rect,
    dialog: Rect,
}

impl Frame {
    /// Creates a frame of the given window size.
    pub fn new(session: Session, size: Size, font_size: f32) -> Self {
        let mut frame = Self {
            session,
            size,
            font_size,
            label_origin: Point::zero(),
            field: TextField::new(font_size),
            push: Button::new("Push Item", font_size),
            pop: Button::new("Pop Item", font_size),
            ok: Button::new("OK", font_size),
            panel: Rect::new(0, 0, 0, 0),
            dialog: Rect::new(0, 0, 0, 0),
        };
        frame.layout();
        frame
    }

    /// Creates a frame and its session from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Session::from_settings(settings),
            settings.window,
            settings.font_size,
        )
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the area the stack is drawn in.
    pub fn panel(&self) -> Rect {
        self.panel
    }

    /// Updates the layout for a new window size.
    pub fn resize(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.layout();
        }
    }

    fn layout(&mut self) {
        let width = self.size.width;
        let height = self.size.height;

        // Toolbar widgets are centered on one row.
        let label_width = text_width(INPUT_LABEL, self.font_size) as i32;
        let push_width = self.push.preferred_width();
        let pop_width = self.pop.preferred_width();
        let row = label_width + FIELD_WIDTH as i32 + push_width as i32 + pop_width as i32 + GAP * 3;
        let top = (TOOLBAR_HEIGHT - CONTROL_HEIGHT) as i32 / 2;
        let mut x = ((width as i32 - row) / 2).max(GAP);

        self.label_origin = Point::new(x, top + CONTROL_HEIGHT as i32 / 2 + (self.font_size / 3.0) as i32);
        x += label_width;
        self.field.set_bbox(Rect::new(x, top, FIELD_WIDTH, CONTROL_HEIGHT));
        x += FIELD_WIDTH as i32 + GAP;
        self.push.set_bbox(Rect::new(x, top, push_width, CONTROL_HEIGHT));
        x += push_width as i32 + GAP;
        self.pop.set_bbox(Rect::new(x, top, pop_width, CONTROL_HEIGHT));

        self.panel = Rect::new(
            0,
            TOOLBAR_HEIGHT as i32,
            width,
            height.saturating_sub(TOOLBAR_HEIGHT + STATUS_HEIGHT),
        );

        self.dialog = Rect::new(
            (width as i32 - DIALOG_SIZE.width as i32) / 2,
            (height as i32 - DIALOG_SIZE.height as i32) / 2,
            DIALOG_SIZE.width,
            DIALOG_SIZE.height,
        );
        let ok_width = self.ok.preferred_width().max(80);
        self.ok.set_bbox(Rect::new(
            self.dialog.x + DIALOG_SIZE.width.saturating_sub(ok_width) as i32 / 2,
            self.dialog.y + DIALOG_SIZE.height as i32 - CONTROL_HEIGHT as i32 - 15,
            ok_width,
            CONTROL_HEIGHT,
        ));
    }

    /// Routes an input event. Returns true when the window must be redrawn.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if self.session.pending_notification().is_some() {
            let dismissed = self.ok.handle_event(event)
                || matches!(
                    event.data,
                    EventData::Key {
                        key: Key::Enter | Key::Escape
                    }
                );
            if dismissed {
                self.session.acknowledge();
            }
            return dismissed;
        }

        let command = if self.push.handle_event(event) {
            Command::Push(self.field.text().to_owned())
        } else if self.pop.handle_event(event) {
            Command::Pop
        } else {
            return self.field.handle_event(event);
        };

        let feedback = self.session.handle(command);
        if let Feedback::Rejected(notification) = feedback {
            tracing::info!(message = notification.message(), "showing notification");
        }
        true
    }

    /// Draws the window contents.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.clear(Color::LIGHT_GRAY)?;

        renderer.draw_text(INPUT_LABEL, self.label_origin, Color::BLACK)?;
        self.field.render(renderer)?;
        self.push.render(renderer)?;
        self.pop.render(renderer)?;

        self.session
            .render_model(self.panel.size())
            .paint(renderer, self.panel.point())?;

        let status_baseline = Point::new(
            GAP,
            self.size.height as i32 - STATUS_HEIGHT as i32 / 2 + (self.font_size / 3.0) as i32,
        );
        renderer.draw_text(self.session.status(), status_baseline, Color::BLACK)?;

        if let Some(notification) = self.session.pending_notification() {
            renderer.fill_rect(self.dialog, Color::WHITE)?;
            renderer.stroke_rect(self.dialog, Color::BLACK)?;
            renderer.draw_text(
                notification.message(),
                Point::new(self.dialog.x + 20, self.dialog.y + 40),
                Color::BLACK,
            )?;
            self.ok.render(renderer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MouseButton;
    use crate::render::tests::RecordingRenderer;

    fn frame() -> Frame {
        Frame::from_settings(&Settings::default())
    }

    fn click(rect: Rect) -> Event {
        Event::click(
            Point::new(rect.x + rect.width as i32 / 2, rect.y + rect.height as i32 / 2),
            MouseButton::Left,
        )
    }

    fn type_text(frame: &mut Frame, text: &str) {
        for ch in text.chars() {
            frame.handle_event(&Event::char(ch));
        }
    }

    #[test]
    fn layout_fits_the_reference_window() {
        let frame = frame();
        assert_eq!(frame.panel(), Rect::new(0, 40, 1000, 432));
        assert!(frame.field.bbox().x < frame.push.bbox().x);
        assert!(frame.push.bbox().x < frame.pop.bbox().x);
        let pop = frame.pop.bbox();
        assert!(pop.x + pop.width as i32 <= 1000);
    }

    #[test]
    fn typed_number_is_pushed_on_click() {
        let mut frame = frame();
        type_text(&mut frame, "17");
        assert!(frame.handle_event(&click(frame.push.bbox())));
        assert_eq!(frame.session().stack().peek(), Some(&17));
        assert_eq!(frame.field.text(), "17");

        assert!(frame.handle_event(&click(frame.pop.bbox())));
        assert_eq!(frame.session().status(), "Popped Item: 17");
    }

    #[test]
    fn dialog_is_modal_until_dismissed() {
        let mut frame = frame();
        assert!(frame.handle_event(&click(frame.pop.bbox())));
        assert!(frame.session().pending_notification().is_some());

        type_text(&mut frame, "5");
        assert_eq!(frame.field.text(), "");
        assert!(!frame.handle_event(&click(frame.push.bbox())));
        assert!(frame.session().stack().is_empty());

        assert!(frame.handle_event(&click(frame.ok.bbox())));
        assert!(frame.session().pending_notification().is_none());

        frame.handle_event(&Event::click(Point::zero(), MouseButton::Left));
        type_text(&mut frame, "abc");
        frame.handle_event(&click(frame.push.bbox()));
        assert!(frame.session().pending_notification().is_some());
        assert!(frame.handle_event(&Event::key_press(Key::Escape)));
    }

    #[test]
    fn render_draws_toolbar_panel_status_and_dialog() {
        let mut frame = frame();
        type_text(&mut frame, "8");
        frame.handle_event(&click(frame.push.bbox()));

        let mut renderer = RecordingRenderer::default();
        frame.render(&mut renderer).unwrap();
        assert_eq!(
            renderer.texts(),
            ["Enter Number: ", "8", "Push Item", "Pop Item", "Index 0", "8", "Popped Item: "]
        );

        frame.handle_event(&click(frame.pop.bbox()));
        frame.handle_event(&click(frame.pop.bbox()));
        let mut renderer = RecordingRenderer::default();
        frame.render(&mut renderer).unwrap();
        let texts = renderer.texts();
        assert!(texts.contains(&"Stack is empty"));
        assert!(texts.contains(&"Stack is empty. Cannot pop more items."));
        assert_eq!(texts.last(), Some(&"OK"));
    }

    #[test]
    fn resize_moves_the_panel() {
        let mut frame = frame();
        frame.resize(Size::new(800, 600));
        assert_eq!(frame.panel(), Rect::new(0, 40, 800, 532));
        frame.resize(Size::new(10, 10));
        assert_eq!(frame.panel().height, 0);
    }
}
