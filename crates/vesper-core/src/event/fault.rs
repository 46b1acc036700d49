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

//! Policy for panics escaping subscribed handlers.

use crate::event::dispatcher::SubscriptionId;
use std::any::Any;
use std::sync::Arc;

/// Description of one handler panic caught during a dispatch pass.
#[derive(Debug, Clone)]
pub struct HandlerFault {
    /// Type name of the event the faulting handler was subscribed to.
    pub event_type: &'static str,
    /// Id of the faulting subscription within its dispatcher.
    pub subscription_id: SubscriptionId,
    /// Stringified panic payload.
    pub message: String,
}

/// Callback observing handler faults.
pub type FaultHook = Arc<dyn Fn(&HandlerFault) + Send + Sync>;

/// What to do with a panic escaping a subscribed handler.
///
/// The dispatch pass continues either way; a fault never aborts the
/// remaining handlers in the same snapshot and never corrupts dispatcher
/// state. The policy only decides whether anyone hears about it.
#[derive(Default)]
pub enum FaultPolicy {
    /// Swallow the fault.
    Discard,
    /// Emit one `log::error!` line per fault.
    #[default]
    Log,
    /// Forward the fault to a caller-provided hook.
    Hook(FaultHook),
}

impl FaultPolicy {
    pub(crate) fn notify(&self, fault: HandlerFault) {
        match self {
            FaultPolicy::Discard => {}
            FaultPolicy::Log => log::error!(
                "Handler {} for {} panicked: {}",
                fault.subscription_id,
                fault.event_type,
                fault.message
            ),
            FaultPolicy::Hook(hook) => hook(&fault),
        }
    }
}

/// Renders a caught panic payload as text. Payloads that are neither `&str`
/// nor `String` have no portable representation.
pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
