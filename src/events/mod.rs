// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Geometry and the input events the window shell feeds into the frame.

use serde::Deserialize;

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the zero point.
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Returns this point shifted by `origin`.
    pub fn offset(self, origin: Point) -> Self {
        Self::new(self.x + origin.x, self.y + origin.y)
    }
}

/// A size in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Creates a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A rectangle in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a point and size.
    pub fn from_point_size(point: Point, size: Size) -> Self {
        Self {
            x: point.x,
            y: point.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Returns the top-left point of the rectangle.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the size of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the rectangle moved by `origin`.
    pub fn offset(self, origin: Point) -> Self {
        Self::from_point_size(self.point().offset(origin), self.size())
    }

    /// Returns true if the point is inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width as i32
            && point.y >= self.y
            && point.y < self.y + self.height as i32
    }
}

/// Types of events the frame reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A mouse button was clicked.
    Click,
    /// A key was pressed.
    KeyPress,
    /// A character was typed.
    Char,
}

/// An input event translated from the windowing backend.
#[derive(Debug, Clone)]
pub struct Event {
    /// The type of event.
    pub event_type: EventType,
    /// The pointer position (zero for keyboard events).
    pub position: Point,
    /// Additional event data.
    pub data: EventData,
}

/// Additional data associated with an event.
#[derive(Debug, Clone)]
pub enum EventData {
    /// Mouse button information.
    Mouse { button: MouseButton },
    /// Keyboard key information.
    Key { key: Key },
    /// Character input.
    Char { ch: char },
}

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keys with an editing or dialog meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Backspace key.
    Backspace,
}

impl Event {
    /// Creates a click event.
    pub fn click(position: Point, button: MouseButton) -> Self {
        Self {
            event_type: EventType::Click,
            position,
            data: EventData::Mouse { button },
        }
    }

    /// Creates a key press event.
    pub fn key_press(key: Key) -> Self {
        Self {
            event_type: EventType::KeyPress,
            position: Point::zero(),
            data: EventData::Key { key },
        }
    }

    /// Creates a typed-character event.
    pub fn char(ch: char) -> Self {
        Self {
            event_type: EventType::Char,
            position: Point::zero(),
            data: EventData::Char { ch },
        }
    }

    /// Returns true for a left click inside `rect`.
    pub fn is_left_click_in(&self, rect: Rect) -> bool {
        matches!(
            self.data,
            EventData::Mouse {
                button: MouseButton::Left
            }
        ) && self.event_type == EventType::Click
            && rect.contains(self.position)
    }
}
