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

//! Per-event-type handler storage and delivery.

use crate::event::fault::{self, FaultPolicy, HandlerFault};
use crate::event::priority::Priority;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

/// Identifier of one subscription within its dispatcher.
///
/// Assigned from 1 upward, never reused for the dispatcher's lifetime.
pub type SubscriptionId = u64;

pub(crate) type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// One registered handler. Entries are cheap to clone so a dispatch pass can
/// snapshot the whole list.
struct HandlerEntry<E> {
    id: SubscriptionId,
    priority: Priority,
    callback: Callback<E>,
}

impl<E> Clone for HandlerEntry<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            priority: self.priority,
            callback: self.callback.clone(),
        }
    }
}

struct HandlerTable<E> {
    next_id: SubscriptionId,
    // Invariant: ordered by (priority desc, id asc) at all times.
    entries: Vec<HandlerEntry<E>>,
}

/// The ordered handler set for exactly one event type.
///
/// All mutation happens under the internal lock; delivery clones the entry
/// list under the lock and invokes the snapshot with the lock released, so
/// handlers can re-enter the dispatcher (subscribe, unsubscribe themselves,
/// dispatch further events) without deadlocking. A mutation made during a
/// pass is invisible to that pass and fully visible to the next.
pub(crate) struct Dispatcher<E> {
    table: Mutex<HandlerTable<E>>,
    faults: Arc<FaultPolicy>,
}

impl<E: Send + Sync + 'static> Dispatcher<E> {
    pub(crate) fn new(faults: Arc<FaultPolicy>) -> Self {
        Self {
            table: Mutex::new(HandlerTable {
                next_id: 1,
                entries: Vec::new(),
            }),
            faults,
        }
    }

    /// Registers `callback` and returns the id assigned to it.
    pub(crate) fn subscribe(&self, priority: Priority, callback: Callback<E>) -> SubscriptionId {
        let mut table = self.table.lock().unwrap();
        let id = table.next_id;
        table.next_id += 1;

        // Insert before the first entry of strictly lower urgency; equal
        // urgency keeps subscription order. Linear, but handler lists stay
        // small in practice.
        let at = table
            .entries
            .iter()
            .position(|entry| entry.priority < priority)
            .unwrap_or(table.entries.len());
        table.entries.insert(
            at,
            HandlerEntry {
                id,
                priority,
                callback,
            },
        );
        id
    }

    /// Removes the entry with `id`. Unknown ids are a no-op; the handle
    /// layer relies on that for idempotent release.
    pub(crate) fn remove(&self, id: SubscriptionId) {
        let mut table = self.table.lock().unwrap();
        if let Some(at) = table.entries.iter().position(|entry| entry.id == id) {
            table.entries.remove(at);
        }
    }

    /// Delivers `event` to every handler registered at the start of the call.
    ///
    /// A panicking handler is routed to the fault policy and the pass moves
    /// on. The lock is never held across handler code, so a fault cannot
    /// poison it.
    pub(crate) fn dispatch(&self, event: &E) {
        let snapshot = self.table.lock().unwrap().entries.clone();
        for entry in &snapshot {
            let outcome = catch_unwind(AssertUnwindSafe(|| (entry.callback)(event)));
            if let Err(payload) = outcome {
                self.faults.notify(HandlerFault {
                    event_type: std::any::type_name::<E>(),
                    subscription_id: entry.id,
                    message: fault::panic_message(payload),
                });
            }
        }
    }
}

/// The type-erased face of a [`Dispatcher`], stored by the facade's
/// type-indexed map. Typed subscribe/dispatch are recovered at the call site
/// by downcasting through [`as_any`](ErasedDispatcher::as_any).
pub(crate) trait ErasedDispatcher: Send + Sync {
    fn unsubscribe(&self, id: SubscriptionId);
    fn has_live_handlers(&self) -> bool;
    fn handler_count(&self) -> usize;
    fn event_type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

impl<E: Send + Sync + 'static> ErasedDispatcher for Dispatcher<E> {
    fn unsubscribe(&self, id: SubscriptionId) {
        self.remove(id);
    }

    fn has_live_handlers(&self) -> bool {
        !self.table.lock().unwrap().entries.is_empty()
    }

    fn handler_count(&self) -> usize {
        self.table.lock().unwrap().entries.len()
    }

    fn event_type_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    struct Ping {
        n: u32,
    }

    fn recorder(
        log: &Arc<Mutex<Vec<&'static str>>>,
        label: &'static str,
    ) -> Callback<Ping> {
        let log = log.clone();
        Arc::new(move |_event: &Ping| log.lock().unwrap().push(label))
    }

    fn plain_dispatcher() -> Dispatcher<Ping> {
        Dispatcher::new(Arc::new(FaultPolicy::Discard))
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let dispatcher = plain_dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        assert_eq!(dispatcher.subscribe(Priority::Whenever, recorder(&log, "a")), 1);
        assert_eq!(dispatcher.subscribe(Priority::RedPanic, recorder(&log, "b")), 2);
        assert_eq!(dispatcher.subscribe(Priority::Whenever, recorder(&log, "c")), 3);
    }

    #[test]
    fn test_delivery_order_priority_then_subscription() {
        let dispatcher = plain_dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        dispatcher.subscribe(Priority::Whenever, recorder(&log, "low"));
        dispatcher.subscribe(Priority::UrgentButCanVibe, recorder(&log, "mid-1"));
        dispatcher.subscribe(Priority::RedPanic, recorder(&log, "top"));
        dispatcher.subscribe(Priority::UrgentButCanVibe, recorder(&log, "mid-2"));

        dispatcher.dispatch(&Ping { n: 0 });

        assert_eq!(
            *log.lock().unwrap(),
            vec!["top", "mid-1", "mid-2", "low"]
        );
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let dispatcher = plain_dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        dispatcher.subscribe(Priority::Whenever, recorder(&log, "a"));
        dispatcher.remove(99);
        assert_eq!(dispatcher.handler_count(), 1);
    }

    #[test]
    fn test_removed_id_is_never_reassigned() {
        let dispatcher = plain_dispatcher();
        let log = Arc::new(Mutex::new(Vec::new()));
        let first = dispatcher.subscribe(Priority::Whenever, recorder(&log, "a"));
        dispatcher.remove(first);
        let second = dispatcher.subscribe(Priority::Whenever, recorder(&log, "b"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_mutation_during_pass_is_invisible_to_it() {
        let dispatcher = Arc::new(plain_dispatcher());
        let calls = Arc::new(AtomicUsize::new(0));

        let inner_calls = calls.clone();
        let reentrant = dispatcher.clone();
        dispatcher.subscribe(
            Priority::Whenever,
            Arc::new(move |_event: &Ping| {
                let late_calls = inner_calls.clone();
                reentrant.subscribe(
                    Priority::RedPanic,
                    Arc::new(move |_event: &Ping| {
                        late_calls.fetch_add(1, Ordering::SeqCst);
                    }),
                );
            }),
        );

        dispatcher.dispatch(&Ping { n: 1 });
        assert_eq!(calls.load(Ordering::SeqCst), 0, "not in this pass");

        dispatcher.dispatch(&Ping { n: 2 });
        assert_eq!(calls.load(Ordering::SeqCst), 1, "visible on the next");
    }

    #[test]
    fn test_panicking_handler_does_not_stop_the_pass() {
        let faults: Arc<Mutex<Vec<HandlerFault>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = faults.clone();
        let dispatcher: Dispatcher<Ping> = Dispatcher::new(Arc::new(FaultPolicy::Hook(
            Arc::new(move |fault| sink.lock().unwrap().push(fault.clone())),
        )));

        let survivors = Arc::new(AtomicUsize::new(0));
        let panicking_id = dispatcher.subscribe(
            Priority::RedPanic,
            Arc::new(|_event: &Ping| {
                panic!("boom");
            }),
        );
        let counted = survivors.clone();
        dispatcher.subscribe(
            Priority::Whenever,
            Arc::new(move |_event: &Ping| {
                counted.fetch_add(1, Ordering::SeqCst);
            }),
        );

        dispatcher.dispatch(&Ping { n: 3 });

        assert_eq!(survivors.load(Ordering::SeqCst), 1);
        let faults = faults.lock().unwrap();
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].subscription_id, panicking_id);
        assert_eq!(faults[0].message, "boom");
        // Dispatcher still usable afterwards.
        assert_eq!(dispatcher.handler_count(), 2);
    }
}
