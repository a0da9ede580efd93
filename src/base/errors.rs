// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Error types for the stack visualizer.

use std::num::ParseIntError;

/// A result type alias for stack visualizer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the stack visualizer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A push was attempted while the stack held `capacity` items.
    #[error("Stack overflow: capacity of {capacity} reached")]
    Overflow {
        /// The fixed capacity of the stack.
        capacity: usize,
    },

    /// A pop was attempted on an empty stack.
    #[error("Stack is empty")]
    EmptyStack,

    /// An element was requested outside `0..len`.
    #[error("Index {index} out of range for stack of size {len}")]
    Index {
        /// The requested index.
        index: usize,
        /// The stack length at the time of the request.
        len: usize,
    },

    /// Push input could not be parsed as an integer.
    #[error("Invalid number {input:?}: {source}")]
    Parse {
        /// The raw text that was entered.
        input: String,
        /// The underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file could not be deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// A settings value was well-formed but out of range.
    #[error("Invalid setting {field}: {reason}")]
    InvalidSetting {
        /// The offending key.
        field: &'static str,
        /// Why the value was refused.
        reason: String,
    },

    /// A rendering error occurred.
    #[error("Rendering error: {0}")]
    Rendering(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_condition() {
        assert_eq!(
            Error::Overflow { capacity: 12 }.to_string(),
            "Stack overflow: capacity of 12 reached"
        );
        assert_eq!(
            Error::Index { index: 3, len: 2 }.to_string(),
            "Index 3 out of range for stack of size 2"
        );
    }

    #[test]
    fn parse_errors_keep_their_source() {
        let source = "abc".parse::<i32>().unwrap_err();
        let err = Error::Parse {
            input: "abc".into(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
