// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! A visual demonstrator for a bounded stack.
//!
//! The user types a number, pushes or pops it, and a panel redraws one
//! outlined slot per element together with its index and an arrow. The
//! stack ([`BoundedStack`]) and the layout ([`RenderModel`]) are plain,
//! testable values; the window shell only translates input events and
//! presents pixels.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod base;
pub mod colors;
pub mod events;
pub mod render;
pub mod settings;
pub mod widgets;

pub use app::{Command, Feedback, Notification, Session};
pub use base::{BoundedStack, Error, Result};
pub use render::{PixelRenderer, RenderModel, Renderer};
pub use settings::Settings;
pub use widgets::Frame;
