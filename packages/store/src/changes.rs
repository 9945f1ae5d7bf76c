//! # Modification log: the mock store's durable diff
//!
//! The mock backend never rewrites its seed. All mutation is recorded in a
//! [`ChangeLog`] with three buckets (locally created records, per-id
//! patches, and deleted ids) persisted as one JSON blob under
//! [`CHANGES_STORAGE_KEY`]. The visible list is re-derived on every read by
//! [`apply`], a pure function of (seed, log):
//!
//! ```text
//! effective = (seed minus deleted) ++ created, with patches applied
//! ```
//!
//! Invariant: deleting a record that was itself locally created removes it
//! from `created` instead of adding a tombstone; the real seed never knew
//! about it, so there is nothing to shadow. Its pending patch (if any) is
//! dropped at the same time.
//!
//! A missing or corrupt blob loads as the empty log; the overlay always
//! has a well-defined value.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;
use crate::models::{User, UserPatch};

/// Storage key for the serialized log blob.
pub const CHANGES_STORAGE_KEY: &str = "userdesk.changes";

/// The diff layered over the static seed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChangeLog {
    #[serde(default)]
    pub created: Vec<User>,
    #[serde(default)]
    pub updated: BTreeMap<String, UserPatch>,
    #[serde(default)]
    pub deleted: BTreeSet<String>,
}

impl ChangeLog {
    /// Load the persisted log, falling back to the empty log when the blob
    /// is missing or does not parse.
    pub fn load(kv: &impl KeyValueStore) -> Self {
        let Some(raw) = kv.get(CHANGES_STORAGE_KEY) else {
            return Self::default();
        };
        match serde_json::from_str(&raw) {
            Ok(log) => log,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable modification log");
                Self::default()
            }
        }
    }

    /// Persist the whole log as one blob. No concurrency token; the last
    /// writer wins.
    pub fn save(&self, kv: &impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(raw) => kv.set(CHANGES_STORAGE_KEY, &raw),
            Err(err) => tracing::warn!(error = %err, "failed to serialize modification log"),
        }
    }

    /// Drop all recorded changes.
    pub fn clear(kv: &impl KeyValueStore) {
        kv.remove(CHANGES_STORAGE_KEY);
    }

    pub fn record_create(&mut self, user: User) {
        self.created.push(user);
    }

    /// Shallow-merge `patch` over whatever is already recorded for `id`.
    pub fn record_update(&mut self, id: &str, patch: UserPatch) {
        self.updated.entry(id.to_string()).or_default().merge(patch);
    }

    /// Mark `id` deleted, or un-create it if it only ever existed locally.
    pub fn record_delete(&mut self, id: &str) {
        if let Some(pos) = self.created.iter().position(|u| u.id == id) {
            self.created.remove(pos);
        } else {
            self.deleted.insert(id.to_string());
        }
        self.updated.remove(id);
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }
}

/// Derive the effective list from the seed and a log. Pure: callers own
/// both inputs, storage I/O stays outside.
pub fn apply(seed: &[User], log: &ChangeLog) -> Vec<User> {
    let mut users: Vec<User> = seed
        .iter()
        .filter(|u| !log.deleted.contains(&u.id))
        .cloned()
        .collect();
    users.extend(
        log.created
            .iter()
            .filter(|u| !log.deleted.contains(&u.id))
            .cloned(),
    );
    for user in &mut users {
        if let Some(patch) = log.updated.get(&user.id) {
            user.apply(patch);
        }
    }
    users
}
