// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Mapping from stack contents to drawable primitives.
//!
//! [`RenderModel::build`] is a pure function of the stack and the panel
//! size: it is recomputed after every push or pop and then replayed onto a
//! [`Renderer`]. Nothing here touches a real drawing surface, so the layout
//! can be tested on its own.

pub mod raster;

use std::fmt::Display;

use crate::base::{BoundedStack, Result};
use crate::colors::Color;
use crate::events::{Point, Rect, Size};

pub use raster::PixelRenderer;

/// Vertical distance between the origins of two neighbouring slots.
pub const SLOT_PITCH: i32 = 40;
/// Width of a slot rectangle.
pub const SLOT_WIDTH: u32 = 300;
/// Height of a slot rectangle.
pub const SLOT_HEIGHT: u32 = 40;
/// Half-size of the arrow head drawn beside each slot.
pub const ARROW_SIZE: i32 = 10;

/// Decorative framing lines, in panel coordinates.
pub const GUIDE_LINES: [Segment; 3] = [
    Segment::new(Point::new(700, 700), Point::new(700, 230)),
    Segment::new(Point::new(392, 700), Point::new(392, 230)),
    Segment::new(Point::new(700, 645), Point::new(400, 645)),
];

/// How a line is combined with the pixels underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeMode {
    /// The line color replaces the destination.
    Paint,
    /// The destination becomes `dst ^ color ^ alternate`, so drawing twice restores it.
    Xor(Color),
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

impl Segment {
    /// Creates a new segment.
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// A piece of text anchored at its baseline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    /// The text to draw.
    pub text: String,
    /// Left end of the baseline.
    pub position: Point,
}

/// Everything drawn for one stack element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotDescriptor {
    /// Position in the stack, 0 being the bottom.
    pub index: usize,
    /// The element formatted for display.
    pub value: String,
    /// The slot outline.
    pub rect: Rect,
    /// `"Index {i}"`, left of the slot.
    pub index_label: Label,
    /// The value, inside the slot.
    pub value_label: Label,
    /// Closed arrow head pointing right at the index label.
    pub arrow: [Segment; 3],
}

/// A single drawing command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// An outlined rectangle.
    Rect { rect: Rect, color: Color },
    /// Text drawn at a baseline position.
    Text { label: Label, color: Color },
    /// A line segment.
    Line {
        segment: Segment,
        color: Color,
        mode: CompositeMode,
    },
}

/// The full drawing of the stack panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderModel {
    /// One descriptor per stack element, bottom first.
    pub slots: Vec<SlotDescriptor>,
    /// Fixed framing lines, independent of the stack.
    pub guides: [Segment; 3],
    /// Alternate color for the XOR-composited guides.
    pub accent: Color,
}

impl RenderModel {
    /// Lays out the stack inside a panel of the given size.
    pub fn build<T: Display>(stack: &BoundedStack<T>, viewport: Size) -> Self {
        let start_x = viewport.width as i32 / 3 - 30;
        let start_y = viewport.height as i32 - 50;

        let slots = stack
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let top = start_y - index as i32 * SLOT_PITCH;
                let baseline = top + 25;
                let value = item.to_string();
                SlotDescriptor {
                    index,
                    rect: Rect::new(start_x, top, SLOT_WIDTH, SLOT_HEIGHT),
                    index_label: Label {
                        text: format!("Index {index}"),
                        position: Point::new(start_x - 70, baseline),
                    },
                    value_label: Label {
                        text: value.clone(),
                        position: Point::new(start_x + 150, baseline),
                    },
                    arrow: arrow_head(Point::new(start_x - 80, baseline), ARROW_SIZE),
                    value,
                }
            })
            .collect();

        Self {
            slots,
            guides: GUIDE_LINES,
            accent: Color::ORANGE,
        }
    }

    /// Replaces the XOR accent color.
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Flattens the model into drawing order: each slot's outline, labels
    /// and arrow, then the guide lines.
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut out = Vec::with_capacity(self.slots.len() * 6 + self.guides.len());
        for slot in &self.slots {
            out.push(Primitive::Rect {
                rect: slot.rect,
                color: Color::BLACK,
            });
            out.push(Primitive::Text {
                label: slot.index_label.clone(),
                color: Color::BLACK,
            });
            out.push(Primitive::Text {
                label: slot.value_label.clone(),
                color: Color::BLACK,
            });
            out.extend(slot.arrow.iter().map(|&segment| Primitive::Line {
                segment,
                color: Color::BLACK,
                mode: CompositeMode::Paint,
            }));
        }
        out.extend(self.guides.iter().map(|&segment| Primitive::Line {
            segment,
            color: Color::BLACK,
            mode: CompositeMode::Xor(self.accent),
        }));
        out
    }

    /// Draws the model with every coordinate shifted by `origin`.
    pub fn paint(&self, renderer: &mut dyn Renderer, origin: Point) -> Result<()> {
        for primitive in self.primitives() {
            match primitive {
                Primitive::Rect { rect, color } => renderer.stroke_rect(rect.offset(origin), color)?,
                Primitive::Text { label, color } => {
                    renderer.draw_text(&label.text, label.position.offset(origin), color)?
                }
                Primitive::Line {
                    segment,
                    color,
                    mode,
                } => renderer.draw_line(
                    segment.from.offset(origin),
                    segment.to.offset(origin),
                    color,
                    mode,
                )?,
            }
        }
        Ok(())
    }
}

fn arrow_head(tip: Point, size: i32) -> [Segment; 3] {
    let upper = Point::new(tip.x - size, tip.y - size);
    let lower = Point::new(tip.x - size, tip.y + size);
    [
        Segment::new(tip, upper),
        Segment::new(upper, lower),
        Segment::new(lower, tip),
    ]
}

/// A drawing surface.
pub trait Renderer {
    /// Fills a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Draws the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Draws text whose baseline starts at `position`.
    fn draw_text(&mut self, text: &str, position: Point, color: Color) -> Result<()>;

    /// Draws a line segment.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, mode: CompositeMode) -> Result<()>;

    /// Clears the render target.
    fn clear(&mut self, color: Color) -> Result<()>;
}
