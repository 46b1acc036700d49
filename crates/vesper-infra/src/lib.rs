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

//! # Vesper Infra
//!
//! Concrete backend integrations for the Vesper engine. Currently this is
//! the `winit` platform layer: translation from winit's window and input
//! events into the backend-neutral records of `vesper-core`, and the glue
//! that forwards them into an
//! [`EventSystem`](vesper_core::event::EventSystem).

#![warn(missing_docs)]

#[cfg(feature = "platform")]
pub mod platform;
