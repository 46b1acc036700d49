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

use serde::{Deserialize, Serialize};

/// Relative delivery urgency of a handler within one event type.
///
/// During a single dispatch pass, handlers run most urgent first; handlers
/// at the same level run in the order they subscribed. `Ord` follows
/// declaration order, so `Whenever < UrgentButCanVibe < RedPanic`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    /// Runs after everything more urgent. The default for subscriptions
    /// that don't care.
    #[default]
    Whenever,
    /// Ahead of `Whenever`, behind `RedPanic`.
    UrgentButCanVibe,
    /// Runs first.
    RedPanic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_ordering() {
        assert!(Priority::Whenever < Priority::UrgentButCanVibe);
        assert!(Priority::UrgentButCanVibe < Priority::RedPanic);
    }

    #[test]
    fn test_default_is_whenever() {
        assert_eq!(Priority::default(), Priority::Whenever);
    }
}
