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

//! User input event records.

use serde::{Deserialize, Serialize};

/// A backend-neutral user input action.
///
/// High-level enough for gameplay and UI systems to consume without knowing
/// which windowing backend produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A keyboard key was pressed.
    KeyPressed {
        /// String form of the physical key code (layout-independent).
        key_code: String,
    },
    /// A keyboard key was released.
    KeyReleased {
        /// String form of the physical key code (layout-independent).
        key_code: String,
    },
    /// A mouse button was pressed.
    MouseButtonPressed {
        /// The button in question.
        button: MouseButton,
    },
    /// A mouse button was released.
    MouseButtonReleased {
        /// The button in question.
        button: MouseButton,
    },
    /// The mouse cursor moved.
    MouseMoved {
        /// New cursor x, in physical pixels from the window's left edge.
        x: f32,
        /// New cursor y, in physical pixels from the window's top edge.
        y: f32,
    },
    /// The mouse wheel was scrolled.
    MouseWheelScrolled {
        /// Horizontal scroll delta.
        delta_x: f32,
        /// Vertical scroll delta.
        delta_y: f32,
    },
}

/// A backend-neutral mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// The left mouse button.
    Left,
    /// The right mouse button.
    Right,
    /// The middle mouse button.
    Middle,
    /// The back side button.
    Back,
    /// The forward side button.
    Forward,
    /// Any other button, by numeric code.
    Other(u16),
}
