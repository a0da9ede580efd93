// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Application settings, optionally loaded from a TOML file.
//!
//! Every field has a default, and the defaults reproduce the reference
//! application: a 12-slot stack in a 1000x500 window titled "Stack GUI".

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::base::{Error, Result};
use crate::colors::Color;
use crate::events::Size;

/// Largest stack the window can usefully show.
pub const MAX_CAPACITY: usize = 1024;

/// File name looked up in the working directory by the binary.
pub const SETTINGS_FILE: &str = "stack-gui.toml";

/// Runtime settings for a session and its window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Maximum number of items on the stack.
    pub capacity: usize,
    /// Window title.
    pub title: String,
    /// Initial window size.
    pub window: Size,
    /// Text size in pixels.
    pub font_size: f32,
    /// TrueType font to draw text with; a system serif font is used when unset.
    pub font_path: Option<PathBuf>,
    /// Alternate color of the XOR guide lines.
    pub accent: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: 12,
            title: "Stack GUI".to_owned(),
            window: Size::new(1000, 500),
            font_size: 20.0,
            font_path: None,
            accent: Color::ORANGE,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text and checks their ranges.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects values the session or renderer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(Error::InvalidSetting {
                field: "capacity",
                reason: format!("{} is outside 1..={MAX_CAPACITY}", self.capacity),
            });
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(Error::InvalidSetting {
                field: "font_size",
                reason: format!("{} is not a positive size", self.font_size),
            });
        }
        Ok(())
    }

    /// Reads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Reads settings from `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }
}
