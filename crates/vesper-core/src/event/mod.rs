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

//! Typed publish/subscribe event dispatch.
//!
//! The entry point is the [`EventSystem`]: a facade routing each event type
//! to its own dispatcher, created lazily on first subscription. Producers
//! call [`EventSystem::dispatch`] with a plain event value; every handler
//! subscribed to that value's type runs synchronously on the calling thread,
//! ordered by [`Priority`] (most urgent first, ties broken by subscription
//! order).
//!
//! Delivery snapshots the handler list before invoking anything, so a
//! handler may freely subscribe, unsubscribe (including its own entry via
//! its [`SubscriptionHandle`]), or dispatch further events while it runs.
//! Mutations made during a pass become visible on the next one.
//!
//! There is no queuing and no cross-type ordering; an `EventSystem` is
//! constructed explicitly and shared by reference (or `Arc`) with whoever
//! produces or consumes events.

mod channel;
mod dispatcher;
mod fault;
mod handle;
mod priority;
mod system;

pub use self::channel::EventChannel;
pub use self::dispatcher::SubscriptionId;
pub use self::fault::{FaultHook, FaultPolicy, HandlerFault};
pub use self::handle::SubscriptionHandle;
pub use self::priority::Priority;
pub use self::system::{EventSystem, LeakRecord};
