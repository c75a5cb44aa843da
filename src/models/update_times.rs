//! Scheduled update times for queues and preps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::HookSetKey;

/// Label (`Queue 1`, `Prep 3`, ...) to an HTML time fragment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct UpdateTimes {
    times: HashMap<String, String>,
}

impl UpdateTimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a time for a label, replacing any earlier one.
    pub fn insert(&mut self, label: impl Into<String>, time: impl Into<String>) {
        self.times.insert(label.into(), time.into());
    }

    /// Look up by raw label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.times.get(label).map(String::as_str)
    }

    /// Look up by hook set key.
    pub fn for_key(&self, key: &HookSetKey) -> Option<&str> {
        self.get(&key.to_string())
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UpdateTimes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut times = Self::new();
        for (label, time) in iter {
            times.insert(label, time);
        }
        times
    }
}
