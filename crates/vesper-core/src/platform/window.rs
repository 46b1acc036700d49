// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Window lifecycle event records.
//!
//! Each record is its own event type so consumers subscribe to exactly the
//! transitions they care about; a resize listener never sees focus traffic.

use serde::{Deserialize, Serialize};

/// The window's inner area changed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowResized {
    /// New inner width in physical pixels.
    pub width: u32,
    /// New inner height in physical pixels.
    pub height: u32,
}

/// The window moved on the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowMoved {
    /// New x position of the window's top-left corner, in physical pixels.
    pub x: i32,
    /// New y position of the window's top-left corner, in physical pixels.
    pub y: i32,
}

/// The user asked to close the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowCloseRequested;

/// The window gained or lost keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowFocusChanged {
    /// True when focus was gained.
    pub focused: bool,
}

/// The window was iconified (minimized) or restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowIconified {
    /// True when iconified, false when restored.
    pub iconified: bool,
}

/// The window was maximized or restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowMaximized {
    /// True when maximized, false when restored.
    pub maximized: bool,
}
