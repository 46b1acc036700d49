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

//! Backend-agnostic platform event records.
//!
//! These are the plain values the windowing/input backend dispatches through
//! the [`EventSystem`](crate::event::EventSystem). The dispatch core never
//! inspects them; they exist so every producer and consumer in the engine
//! agrees on one backend-neutral vocabulary. Concrete backends (see
//! `vesper-infra`) translate their native events into these records.

pub mod input;
pub mod window;

pub use self::input::{InputEvent, MouseButton};
pub use self::window::{
    WindowCloseRequested, WindowFocusChanged, WindowIconified, WindowMaximized, WindowMoved,
    WindowResized,
};
