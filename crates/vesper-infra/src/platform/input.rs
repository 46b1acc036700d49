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

//! Translation from winit input events to Vesper's input records.
//!
//! Keeps the rest of the engine decoupled from winit's event vocabulary:
//! everything downstream of this adapter consumes
//! [`InputEvent`](vesper_core::platform::InputEvent) only.

use vesper_core::platform::{InputEvent, MouseButton};
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Translates one winit window event into an input record.
///
/// Returns `None` for events that are not user input (resize, focus, close
/// and so on; see [`forward_window_event`](super::forward_window_event) for
/// those), for key repeats, and for unidentified keys.
pub fn translate_input_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput {
            event: key_event, ..
        } => {
            let PhysicalKey::Code(key_code) = key_event.physical_key else {
                return None;
            };
            match key_event.state {
                ElementState::Pressed if !key_event.repeat => Some(InputEvent::KeyPressed {
                    key_code: key_code_label(key_code),
                }),
                ElementState::Released => Some(InputEvent::KeyReleased {
                    key_code: key_code_label(key_code),
                }),
                _ => None,
            }
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_mouse_button(*button);
            Some(match state {
                ElementState::Pressed => InputEvent::MouseButtonPressed { button },
                ElementState::Released => InputEvent::MouseButtonReleased { button },
            })
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let (delta_x, delta_y) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                MouseScrollDelta::PixelDelta(position) => {
                    (position.x as f32, position.y as f32)
                }
            };
            if delta_x == 0.0 && delta_y == 0.0 {
                return None;
            }
            Some(InputEvent::MouseWheelScrolled { delta_x, delta_y })
        }
        _ => None,
    }
}

/// Layout-independent label for a physical key.
fn key_code_label(key_code: KeyCode) -> String {
    format!("{key_code:?}")
}

fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(code) => MouseButton::Other(code),
    }
}
