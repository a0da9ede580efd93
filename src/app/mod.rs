// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The application session: the stack plus the user-visible feedback.

use crate::base::{BoundedStack, Error, Result};
use crate::colors::Color;
use crate::events::Size;
use crate::render::RenderModel;
use crate::settings::Settings;

/// Status text shown before any pop, and after every successful push.
pub const STATUS_PREFIX: &str = "Popped Item: ";

/// A request coming from the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Push the integer spelled by the entered text.
    Push(String),
    /// Pop the top item.
    Pop,
}

/// A modal message the user has to acknowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// The input was not an integer, or the stack was full.
    PushRejected,
    /// The stack was empty.
    PopRejected,
}

impl Notification {
    /// The dialog message.
    pub fn message(self) -> &'static str {
        match self {
            Notification::PushRejected => {
                "Invalid input or Stack is full. Please enter a valid number."
            }
            Notification::PopRejected => "Stack is empty. Cannot pop more items.",
        }
    }

    /// The status line shown alongside the dialog.
    pub fn status(self) -> &'static str {
        match self {
            Notification::PushRejected => "Invalid Input or Stack is FULL",
            Notification::PopRejected => "Stack is empty",
        }
    }
}

/// What happened in response to a [`Command`].
#[derive(Debug, PartialEq, Eq)]
pub enum Feedback {
    /// The value was pushed.
    Pushed(i32),
    /// The value was popped.
    Popped(i32),
    /// The request failed; the stack is unchanged.
    Rejected(Notification),
    /// A notification is still waiting to be acknowledged.
    Blocked,
}

impl Feedback {
    /// Returns true when the stack changed and the panel must be redrawn.
    pub fn changed_stack(&self) -> bool {
        matches!(self, Feedback::Pushed(_) | Feedback::Popped(_))
    }
}

/// One running instance of the visualizer.
#[derive(Debug, Clone)]
pub struct Session {
    stack: BoundedStack<i32>,
    status: String,
    pending: Option<Notification>,
    accent: Color,
}

impl Session {
    /// Creates a session over an empty stack of the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            stack: BoundedStack::new(capacity),
            status: STATUS_PREFIX.to_owned(),
            pending: None,
            accent: Color::ORANGE,
        }
    }

    /// Creates a session from loaded settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            accent: settings.accent,
            ..Self::new(settings.capacity)
        }
    }

    /// Returns the stack.
    pub fn stack(&self) -> &BoundedStack<i32> {
        &self.stack
    }

    /// Returns the status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the notification waiting for acknowledgement, if any.
    pub fn pending_notification(&self) -> Option<Notification> {
        self.pending
    }

    /// Dismisses the pending notification.
    pub fn acknowledge(&mut self) -> Option<Notification> {
        self.pending.take()
    }

    /// Applies a command, recovering from every stack error.
    ///
    /// Failures leave the stack unchanged, set the status line and raise a
    /// notification. Commands are ignored while a notification is pending.
    pub fn handle(&mut self, command: Command) -> Feedback {
        if self.pending.is_some() {
            tracing::debug!(?command, "ignored while a notification is pending");
            return Feedback::Blocked;
        }
        match command {
            Command::Push(input) => match self.push(&input) {
                Ok(value) => {
                    self.status = STATUS_PREFIX.to_owned();
                    Feedback::Pushed(value)
                }
                Err(err) => self.reject(Notification::PushRejected, err),
            },
            Command::Pop => match self.stack.pop() {
                Ok(value) => {
                    tracing::debug!(value, len = self.stack.len(), "popped");
                    self.status = format!("{STATUS_PREFIX}{value}");
                    Feedback::Popped(value)
                }
                Err(err) => self.reject(Notification::PopRejected, err),
            },
        }
    }

    /// Lays out the current stack for a panel of the given size.
    pub fn render_model(&self, viewport: Size) -> RenderModel {
        RenderModel::build(&self.stack, viewport).with_accent(self.accent)
    }

    fn push(&mut self, input: &str) -> Result<i32> {
        let value = input.parse::<i32>().map_err(|source| Error::Parse {
            input: input.to_owned(),
            source,
        })?;
        self.stack.push(value)?;
        tracing::debug!(value, len = self.stack.len(), "pushed");
        Ok(value)
    }

    fn reject(&mut self, notification: Notification, err: Error) -> Feedback {
        tracing::warn!(%err, "request rejected");
        self.status = notification.status().to_owned();
        self.pending = Some(notification);
        Feedback::Rejected(notification)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
