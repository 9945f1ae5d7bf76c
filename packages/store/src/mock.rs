//! # Mock user store
//!
//! A [`UserStore`] that simulates the remote user service: a static seed
//! (read-only, handed in at construction) overlaid with the durable
//! [`ChangeLog`]. Every read re-derives the visible list with
//! [`changes::apply`]; every mutation is a read-modify-write of the whole
//! log blob. An artificial latency stands in for network time on the list
//! path and can be skipped per call via [`MockStore::load`].
//!
//! Ids are synthesized locally (current timestamp plus a random suffix)
//! and are unique enough for the single-operator use this store serves.
//! Operations are not queued: two in-flight calls race on the log blob and
//! the last write wins.

use std::time::Duration;

use chrono::Utc;

use crate::backend::UserStore;
use crate::changes::{self, ChangeLog};
use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::models::{NewUser, User, UserPatch};
use crate::validate;

/// Default simulated network latency for the seed fetch.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

#[derive(Clone, Debug)]
pub struct MockStore<K: KeyValueStore> {
    seed: Vec<User>,
    kv: K,
    latency: Option<Duration>,
}

impl<K: KeyValueStore> MockStore<K> {
    pub fn new(seed: Vec<User>, kv: K) -> Self {
        Self {
            seed,
            kv,
            latency: Some(DEFAULT_LATENCY),
        }
    }

    /// Override the simulated latency; `None` disables it (tests).
    pub fn with_latency(mut self, latency: Option<Duration>) -> Self {
        self.latency = latency;
        self
    }

    /// Fetch the merged list. `skip_delay` bypasses the artificial latency.
    pub async fn load(&self, skip_delay: bool) -> Vec<User> {
        if !skip_delay {
            self.sleep_latency().await;
        }
        self.effective()
    }

    /// Clear the modification log and return the pristine seed.
    pub async fn reset_to_defaults(&self) -> Result<Vec<User>, StoreError> {
        ChangeLog::clear(&self.kv);
        Ok(self.load(true).await)
    }

    fn effective(&self) -> Vec<User> {
        changes::apply(&self.seed, &ChangeLog::load(&self.kv))
    }

    fn exists(&self, id: &str) -> bool {
        self.effective().iter().any(|u| u.id == id)
    }

    async fn sleep_latency(&self) {
        let Some(latency) = self.latency else { return };
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(latency).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(latency).await;
    }
}

impl<K: KeyValueStore> UserStore for MockStore<K> {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.load(false).await)
    }

    async fn create(&self, draft: NewUser) -> Result<User, StoreError> {
        validate::validate_new(&draft)?;
        let birthday = draft
            .birthday
            .ok_or_else(|| StoreError::Validation("birthday is required".into()))?;

        let user = User {
            id: fresh_id(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            password: draft.password,
            birthday,
            avatar_url: draft.avatar_url,
            created_at: Some(Utc::now()),
            updated_at: None,
        };

        let mut log = ChangeLog::load(&self.kv);
        log.record_create(user.clone());
        log.save(&self.kv);
        Ok(user)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<User, StoreError> {
        validate::validate_patch(&patch, false)?;
        if !self.exists(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let mut log = ChangeLog::load(&self.kv);
        log.record_update(id, patch);
        log.save(&self.kv);

        changes::apply(&self.seed, &log)
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        if !self.exists(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let mut log = ChangeLog::load(&self.kv);
        log.record_delete(id);
        log.save(&self.kv);
        Ok(())
    }
}

/// Timestamp plus random suffix; unique enough for a single operator.
fn fresh_id() -> String {
    let millis = Utc::now().timestamp_millis();
    format!("u{millis:x}-{:04x}", random_suffix())
}

#[cfg(target_arch = "wasm32")]
fn random_suffix() -> u16 {
    (js_sys::Math::random() * f64::from(u16::MAX)) as u16
}

#[cfg(not(target_arch = "wasm32"))]
fn random_suffix() -> u16 {
    rand::random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;
    use chrono::NaiveDate;

    fn seed_user(id: &str, first: &str, last: &str, email: &str) -> User {
        User {
            id: id.into(),
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            password: None,
            birthday: NaiveDate::from_ymd_opt(1995, 3, 10).unwrap(),
            avatar_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn store(seed: Vec<User>) -> MockStore<MemoryKv> {
        MockStore::new(seed, MemoryKv::new()).with_latency(None)
    }

    fn draft(first: &str, last: &str, email: &str) -> NewUser {
        NewUser {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            password: Some("longenough".into()),
            birthday: NaiveDate::from_ymd_opt(2000, 1, 1),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn created_record_appears_exactly_once_with_a_fresh_id() {
        let store = store(vec![seed_user("1", "Ana", "Ruiz", "ana@x.com")]);

        let bo = store.create(draft("Bo", "Lee", "bo@x.com")).await.unwrap();
        assert!(!bo.id.is_empty());
        assert_ne!(bo.id, "1");
        assert!(bo.created_at.is_some());

        let users = store.list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users.iter().filter(|u| u.id == bo.id).count(), 1);
    }

    #[tokio::test]
    async fn create_validates_before_touching_the_log() {
        let store = store(vec![]);
        let mut bad = draft("Bo", "Lee", "not-an-email");
        assert!(matches!(
            store.create(bad.clone()).await,
            Err(StoreError::Validation(_))
        ));

        bad.email = "bo@x.com".into();
        bad.first_name = String::new();
        assert!(store.create(bad).await.is_err());

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_one_field_and_nothing_else() {
        let store = store(vec![
            seed_user("1", "Ana", "Ruiz", "ana@x.com"),
            seed_user("2", "Ben", "Okafor", "ben@x.com"),
        ]);

        let merged = store
            .update(
                "1",
                UserPatch {
                    last_name: Some("Ruiz-Soler".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(merged.last_name, "Ruiz-Soler");
        assert_eq!(merged.first_name, "Ana");

        let users = store.list().await.unwrap();
        let ana = users.iter().find(|u| u.id == "1").unwrap();
        assert_eq!(ana.last_name, "Ruiz-Soler");
        assert_eq!(ana.email, "ana@x.com");
        let ben = users.iter().find(|u| u.id == "2").unwrap();
        assert_eq!(ben.last_name, "Okafor");
    }

    #[tokio::test]
    async fn mutating_an_unknown_id_fails_and_leaves_state_unchanged() {
        let store = store(vec![seed_user("1", "Ana", "Ruiz", "ana@x.com")]);
        let before = store.list().await.unwrap();

        let err = store
            .update("ghost", UserPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(err.to_string(), "user ghost not found");

        assert!(matches!(
            store.delete("ghost").await,
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn deleted_records_disappear_from_the_list() {
        let store = store(vec![
            seed_user("1", "Ana", "Ruiz", "ana@x.com"),
            seed_user("2", "Ben", "Okafor", "ben@x.com"),
        ]);

        store.delete("1").await.unwrap();
        let users = store.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert!(users.iter().all(|u| u.id != "1"));
    }

    #[tokio::test]
    async fn reset_to_defaults_reproduces_the_seed_exactly() {
        let seed = vec![
            seed_user("1", "Ana", "Ruiz", "ana@x.com"),
            seed_user("2", "Ben", "Okafor", "ben@x.com"),
        ];
        let store = store(seed.clone());

        store.create(draft("Bo", "Lee", "bo@x.com")).await.unwrap();
        store
            .update(
                "1",
                UserPatch {
                    first_name: Some("Anna".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        store.delete("2").await.unwrap();

        assert_eq!(store.reset_to_defaults().await.unwrap(), seed);
        assert_eq!(store.list().await.unwrap(), seed);
    }

    #[tokio::test]
    async fn mutations_survive_across_store_instances_sharing_storage() {
        let kv = MemoryKv::new();
        let seed = vec![seed_user("1", "Ana", "Ruiz", "ana@x.com")];

        let first = MockStore::new(seed.clone(), kv.clone()).with_latency(None);
        let bo = first.create(draft("Bo", "Lee", "bo@x.com")).await.unwrap();

        let second = MockStore::new(seed, kv).with_latency(None);
        let users = second.list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.id == bo.id));
    }

    // The end-to-end walk from the service contract: seed Ana, create Bo,
    // patch Bo, delete Ana.
    #[tokio::test]
    async fn create_update_delete_scenario() {
        let store = store(vec![seed_user("1", "Ana", "Ruiz", "ana@x.com")]);

        let bo = store.create(draft("Bo", "Lee", "bo@x.com")).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 2);

        store
            .update(
                &bo.id,
                UserPatch {
                    last_name: Some("Lee2".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let users = store.list().await.unwrap();
        assert_eq!(
            users.iter().find(|u| u.id == bo.id).unwrap().last_name,
            "Lee2"
        );
        assert_eq!(users.iter().find(|u| u.id == "1").unwrap().last_name, "Ruiz");

        store.delete("1").await.unwrap();
        let users = store.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, bo.id);
    }

    #[tokio::test]
    async fn fresh_ids_are_distinct() {
        let store = store(vec![]);
        let a = store.create(draft("Bo", "Lee", "bo@x.com")).await.unwrap();
        let b = store.create(draft("Cy", "Park", "cy@x.com")).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
