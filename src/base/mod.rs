// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Base modules: the bounded stack and the crate error type.

pub mod errors;
pub mod stack;

pub use errors::{Error, Result};
pub use stack::BoundedStack;
