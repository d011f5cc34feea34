//! State and helpers owned by one interactive session at the presentation
//! boundary. Nothing here is process-wide.

pub mod resource;
pub mod route;

pub use resource::ResourceKind;
pub use route::Route;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Raw form values keyed by form control id, as captured before a change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub values: AHashMap<String, String>,
}

impl FieldSnapshot {
    pub fn new(values: AHashMap<String, String>) -> Self {
        Self { values }
    }

    pub fn get(&self, form_id: &str) -> Option<&str> {
        self.values.get(form_id).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldSnapshot {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The form back-stack for one active form.
///
/// Restoring a snapshot writes values back into the form, which in turn fires
/// change events. While `is_restoring` is set those events must not capture
/// new snapshots, otherwise "back" would push the state it just restored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSession {
    pub history_stack: Vec<FieldSnapshot>,
    pub is_restoring: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the form state before a change. Returns `false` when ignored
    /// because a restore is in progress.
    pub fn capture(&mut self, snapshot: FieldSnapshot) -> bool {
        if self.is_restoring {
            tracing::debug!("Snapshot ignored during restore");
            return false;
        }
        self.history_stack.push(snapshot);
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.history_stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.history_stack.len()
    }

    /// Pops the latest snapshot and enters the restoring state. The caller
    /// applies the snapshot and then calls [`FormSession::finish_restore`].
    pub fn pop(&mut self) -> Option<FieldSnapshot> {
        let snapshot = self.history_stack.pop()?;
        self.is_restoring = true;
        Some(snapshot)
    }

    pub fn finish_restore(&mut self) {
        self.is_restoring = false;
    }

    /// Pops the latest snapshot and hands it to `apply` with capture
    /// suppressed. Returns `false` when there was nothing to restore.
    pub fn restore<F: FnOnce(&FieldSnapshot)>(&mut self, apply: F) -> bool {
        let Some(snapshot) = self.pop() else {
            return false;
        };
        apply(&snapshot);
        self.finish_restore();
        true
    }

    pub fn clear(&mut self) {
        self.history_stack.clear();
        self.is_restoring = false;
    }
}
