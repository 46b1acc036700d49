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

//! Channel-backed consumption of dispatched events.
//!
//! Dispatch is synchronous on the producing thread; a consumer that lives on
//! another thread (the game loop draining input, a tool thread tailing
//! window events) subscribes a relay instead and polls the channel at its
//! own pace.

use crate::event::handle::SubscriptionHandle;
use crate::event::priority::Priority;
use crate::event::system::EventSystem;
use std::time::Duration;

/// A subscription that clones every dispatched `E` into an unbounded
/// channel.
///
/// Created by [`EventSystem::subscribe_channel`]. Dropping the channel
/// releases the underlying subscription.
pub struct EventChannel<E> {
    receiver: flume::Receiver<E>,
    handle: SubscriptionHandle,
}

impl EventSystem {
    /// Subscribes a relay handler that forwards every dispatched `E` into
    /// the returned channel.
    ///
    /// Events arrive in delivery order relative to `priority`: a `RedPanic`
    /// relay sees each event before any `Whenever` handler runs.
    pub fn subscribe_channel<E>(&self, priority: Priority) -> EventChannel<E>
    where
        E: Clone + Send + Sync + 'static,
    {
        let (sender, receiver) = flume::unbounded();
        let handle = self.subscribe(priority, move |event: &E| {
            if sender.send(event.clone()).is_err() {
                // The consumer went away first; the subscription dies with
                // the EventChannel, so this is transient.
                log::debug!(
                    "Dropping {} event: relay receiver disconnected",
                    std::any::type_name::<E>()
                );
            }
        });
        EventChannel { receiver, handle }
    }
}

impl<E> EventChannel<E> {
    /// Takes the next pending event, if any.
    pub fn try_recv(&self) -> Option<E> {
        self.receiver.try_recv().ok()
    }

    /// Blocks up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<E> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Takes every event currently pending, in delivery order.
    pub fn drain(&self) -> Vec<E> {
        self.receiver.drain().collect()
    }

    /// Number of events pending.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// The handle of the relay subscription.
    pub fn handle(&self) -> &SubscriptionHandle {
        &self.handle
    }
}
