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

use crate::event::dispatcher::{ErasedDispatcher, SubscriptionId};
use std::fmt;
use std::sync::Weak;

/// The revocation capability for one subscription.
///
/// Returned by [`EventSystem::subscribe`](crate::event::EventSystem::subscribe).
/// Dropping the handle releases the subscription; [`release`](Self::release)
/// does the same explicitly and is idempotent. The handle holds only a weak
/// back-reference to its dispatcher, so it never keeps the owning
/// [`EventSystem`](crate::event::EventSystem) alive, and releasing after the
/// system has been torn down is a safe no-op.
#[must_use = "dropping a SubscriptionHandle releases its subscription"]
pub struct SubscriptionHandle {
    // Taken on first release; a later call can no longer reach the
    // dispatcher at all.
    dispatcher: Option<Weak<dyn ErasedDispatcher>>,
    id: SubscriptionId,
}

impl SubscriptionHandle {
    pub(crate) fn new(dispatcher: Weak<dyn ErasedDispatcher>, id: SubscriptionId) -> Self {
        Self {
            dispatcher: Some(dispatcher),
            id,
        }
    }

    /// The subscription id this handle controls, unique within its
    /// dispatcher.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// True once [`release`](Self::release) has run.
    pub fn is_released(&self) -> bool {
        self.dispatcher.is_none()
    }

    /// Revokes the subscription.
    ///
    /// Safe to call any number of times, from any thread, and after the
    /// owning event system no longer exists.
    pub fn release(&mut self) {
        if let Some(weak) = self.dispatcher.take() {
            if let Some(dispatcher) = weak.upgrade() {
                dispatcher.unsubscribe(self.id);
            }
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("id", &self.id)
            .field("released", &self.is_released())
            .finish()
    }
}
