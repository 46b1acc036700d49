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

//! The type-indexed event routing facade.

use crate::event::dispatcher::{Dispatcher, ErasedDispatcher};
use crate::event::fault::FaultPolicy;
use crate::event::handle::SubscriptionHandle;
use crate::event::priority::Priority;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// One event type still carrying live subscriptions at teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeakRecord {
    /// Type name of the event type.
    pub event_type: &'static str,
    /// How many handlers were still registered.
    pub live_handlers: usize,
}

/// Routes each event type to its own dispatcher.
///
/// This is the single entry point for producers and subscribers. Dispatchers
/// are created lazily on first subscription and live until the system is
/// dropped, even when their handler list empties; subscription ids are
/// never reused within a type.
///
/// The facade map is guarded separately from each dispatcher's own lock, so
/// traffic on unrelated event types only contends for the brief map lookup.
/// An `EventSystem` has no global access path; construct one and hand it
/// (by reference or `Arc`) to every producer and consumer.
///
/// Dropping the system emits one `log::warn!` line per event type that
/// still has live subscriptions; see [`Self::leaked_subscriptions`].
pub struct EventSystem {
    dispatchers: RwLock<HashMap<TypeId, Arc<dyn ErasedDispatcher>>>,
    faults: Arc<FaultPolicy>,
}

impl EventSystem {
    /// Creates an event system with the default fault policy
    /// ([`FaultPolicy::Log`]).
    pub fn new() -> Self {
        Self::with_fault_policy(FaultPolicy::default())
    }

    /// Creates an event system with an explicit handler-fault policy.
    pub fn with_fault_policy(policy: FaultPolicy) -> Self {
        Self {
            dispatchers: RwLock::new(HashMap::new()),
            faults: Arc::new(policy),
        }
    }

    /// Registers `handler` for every future dispatch of `E`.
    ///
    /// Within one dispatch pass, handlers run most urgent `priority` first;
    /// equal priorities run in subscription order. The returned handle is
    /// the only way to revoke the subscription (dropping it revokes too),
    /// so keep it alive for as long as the handler should fire.
    ///
    /// May be called from any thread, including from inside a running
    /// handler.
    pub fn subscribe<E, F>(&self, priority: Priority, handler: F) -> SubscriptionHandle
    where
        E: Send + Sync + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let erased = self.dispatcher_for::<E>();
        let dispatcher = erased
            .as_any()
            .downcast_ref::<Dispatcher<E>>()
            .expect("dispatcher stored under the TypeId of its event type");
        let id = dispatcher.subscribe(priority, Arc::new(handler));
        SubscriptionHandle::new(Arc::downgrade(&erased), id)
    }

    /// Delivers `event` synchronously to every handler subscribed to `E`.
    ///
    /// Returns once the whole pass has run on the calling thread. A type
    /// nobody has subscribed to is a guaranteed no-op and does not create a
    /// dispatcher as a side effect.
    pub fn dispatch<E: Send + Sync + 'static>(&self, event: &E) {
        let erased = {
            let dispatchers = self.dispatchers.read().unwrap();
            match dispatchers.get(&TypeId::of::<E>()) {
                Some(found) => found.clone(),
                None => return,
            }
        };
        erased
            .as_any()
            .downcast_ref::<Dispatcher<E>>()
            .expect("dispatcher stored under the TypeId of its event type")
            .dispatch(event);
    }

    /// Number of event types that have ever been subscribed to.
    pub fn dispatcher_count(&self) -> usize {
        self.dispatchers.read().unwrap().len()
    }

    /// Event types currently holding live subscriptions.
    ///
    /// `Drop` uses this for the teardown diagnostics; it is public so tests
    /// and tooling can inspect outstanding subscriptions directly.
    pub fn leaked_subscriptions(&self) -> Vec<LeakRecord> {
        self.dispatchers
            .read()
            .unwrap()
            .values()
            .filter(|dispatcher| dispatcher.has_live_handlers())
            .map(|dispatcher| LeakRecord {
                event_type: dispatcher.event_type_name(),
                live_handlers: dispatcher.handler_count(),
            })
            .collect()
    }

    /// Finds or lazily creates the dispatcher for `E`. Double-checked so the
    /// write lock is only taken on the first subscription of a type.
    fn dispatcher_for<E: Send + Sync + 'static>(&self) -> Arc<dyn ErasedDispatcher> {
        let key = TypeId::of::<E>();
        {
            let dispatchers = self.dispatchers.read().unwrap();
            if let Some(existing) = dispatchers.get(&key) {
                return existing.clone();
            }
        }
        let mut dispatchers = self.dispatchers.write().unwrap();
        dispatchers
            .entry(key)
            .or_insert_with(|| {
                log::debug!(
                    "Created dispatcher for event type {}",
                    std::any::type_name::<E>()
                );
                Arc::new(Dispatcher::<E>::new(self.faults.clone()))
            })
            .clone()
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventSystem {
    fn drop(&mut self) {
        for leak in self.leaked_subscriptions() {
            log::warn!(
                "EventSystem torn down with {} live subscription(s) for {}",
                leak.live_handlers,
                leak.event_type
            );
        }
    }
}
