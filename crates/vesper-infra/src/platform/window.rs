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

//! Forwarding of winit window events into the event system.

use crate::platform::input::translate_input_event;
use vesper_core::event::EventSystem;
use vesper_core::platform::{
    WindowCloseRequested, WindowFocusChanged, WindowMoved, WindowResized,
};
use winit::event::WindowEvent;

/// Dispatches the Vesper record matching one winit window event.
///
/// Lifecycle events become their dedicated record types; everything else is
/// offered to [`translate_input_event`] and dispatched as an
/// [`InputEvent`](vesper_core::platform::InputEvent) when it is user input.
/// Events with no Vesper counterpart are ignored. winit reports no
/// iconify/maximize transitions, so `WindowIconified`/`WindowMaximized` are
/// left to backends that do.
///
/// The caller owns the event loop; this function is plain sequential glue
/// meant to be called from its window-event callback.
pub fn forward_window_event(events: &EventSystem, event: &WindowEvent) {
    match event {
        WindowEvent::Resized(size) => {
            events.dispatch(&WindowResized {
                width: size.width,
                height: size.height,
            });
        }
        WindowEvent::Moved(position) => {
            events.dispatch(&WindowMoved {
                x: position.x,
                y: position.y,
            });
        }
        WindowEvent::CloseRequested => {
            log::trace!("Window close requested");
            events.dispatch(&WindowCloseRequested);
        }
        WindowEvent::Focused(focused) => {
            events.dispatch(&WindowFocusChanged { focused: *focused });
        }
        other => {
            if let Some(input) = translate_input_event(other) {
                events.dispatch(&input);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use vesper_core::platform::InputEvent;
    use vesper_core::Priority;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{DeviceId, ElementState, MouseButton as WinitMouseButton};

    fn logged_system() -> EventSystem {
        let _ = env_logger::builder().is_test(true).try_init();
        EventSystem::new()
    }

    #[test]
    fn test_resize_reaches_resize_subscribers() {
        let events = logged_system();
        let seen: Arc<Mutex<Vec<WindowResized>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _handle = events.subscribe(Priority::Whenever, move |resize: &WindowResized| {
            sink.lock().unwrap().push(*resize);
        });

        forward_window_event(&events, &WindowEvent::Resized(PhysicalSize::new(1920, 1080)));

        assert_eq!(
            *seen.lock().unwrap(),
            vec![WindowResized {
                width: 1920,
                height: 1080
            }]
        );
    }

    #[test]
    fn test_lifecycle_events_route_to_their_own_types() {
        let events = logged_system();
        let closes = Arc::new(AtomicUsize::new(0));
        let focuses = Arc::new(AtomicUsize::new(0));

        let counted = closes.clone();
        let _close = events.subscribe(Priority::Whenever, move |_: &WindowCloseRequested| {
            counted.fetch_add(1, Ordering::SeqCst);
        });
        let counted = focuses.clone();
        let _focus = events.subscribe(Priority::Whenever, move |_: &WindowFocusChanged| {
            counted.fetch_add(1, Ordering::SeqCst);
        });

        forward_window_event(&events, &WindowEvent::CloseRequested);
        forward_window_event(&events, &WindowEvent::Focused(false));
        forward_window_event(
            &events,
            &WindowEvent::Moved(PhysicalPosition::new(64, 128)),
        );

        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert_eq!(focuses.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_input_events_route_through_translation() {
        let events = logged_system();
        let seen: Arc<Mutex<Vec<InputEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _handle = events.subscribe(Priority::Whenever, move |input: &InputEvent| {
            sink.lock().unwrap().push(input.clone());
        });

        forward_window_event(
            &events,
            &WindowEvent::MouseInput {
                device_id: DeviceId::dummy(),
                state: ElementState::Pressed,
                button: WinitMouseButton::Left,
            },
        );

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0], InputEvent::MouseButtonPressed { .. }));
    }

    #[test]
    fn test_unmapped_events_dispatch_nothing() {
        let events = logged_system();
        forward_window_event(&events, &WindowEvent::HoveredFileCancelled);
        assert_eq!(events.dispatcher_count(), 0);
    }
}
