//! User-collection state and operations for the UI.
//!
//! [`use_users`] hands every view the same shape: the in-memory record
//! list, a loading flag, and a single error-message slot, plus the
//! operations that drive them. Mutations patch the list optimistically:
//! the record confirmed by the backend is merged in, no whole-list
//! re-fetch. Operations are independently spawned and never queued;
//! back-to-back calls settle in completion order on the shared list.

use dioxus::prelude::*;
use store::{NewUser, StoreError, User, UserPatch, UserStore};

use crate::backend::make_store;

/// Handle to the shared user-collection state. Cheap to copy; all fields
/// are signals.
#[derive(Clone, Copy)]
pub struct Users {
    pub records: Signal<Vec<User>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

/// Get the user-collection handle from context.
pub fn use_users() -> Users {
    use_context::<Users>()
}

/// Provider component that owns the collection state. Wrap the app with
/// this to enable [`use_users`]; the whole-list fetch runs once on mount.
#[component]
pub fn UsersProvider(children: Element) -> Element {
    let users = Users {
        records: use_signal(Vec::new),
        loading: use_signal(|| true),
        error: use_signal(|| None),
    };

    use_context_provider(|| users);

    let _initial = use_resource(move || async move {
        users.refresh().await;
    });

    rsx! {
        {children}
    }
}

impl Users {
    /// Re-fetch the authoritative list, replacing in-memory state.
    pub async fn refresh(mut self) {
        self.begin();
        match make_store().list().await {
            Ok(list) => self.records.set(list),
            Err(err) => {
                self.fail(err);
            }
        }
        self.loading.set(false);
    }

    /// Create a record. On success the store-assigned record is appended
    /// to the in-memory list and returned.
    pub async fn create(mut self, draft: NewUser) -> Result<User, String> {
        self.begin();
        let outcome = match make_store().create(draft).await {
            Ok(user) => {
                self.records.write().push(user.clone());
                Ok(user)
            }
            Err(err) => Err(self.fail(err)),
        };
        self.loading.set(false);
        outcome
    }

    /// Apply a partial update. On success the merged record replaces the
    /// stale one in place.
    pub async fn update(mut self, id: &str, patch: UserPatch) -> Result<User, String> {
        self.begin();
        let outcome = match make_store().update(id, patch).await {
            Ok(user) => {
                let mut records = self.records.write();
                if let Some(slot) = records.iter_mut().find(|u| u.id == user.id) {
                    *slot = user.clone();
                }
                Ok(user)
            }
            Err(err) => Err(self.fail(err)),
        };
        self.loading.set(false);
        outcome
    }

    /// Delete a record; pruned from the in-memory list after confirmation.
    pub async fn remove(mut self, id: &str) -> Result<(), String> {
        self.begin();
        let outcome = match make_store().delete(id).await {
            Ok(()) => {
                self.records.write().retain(|u| u.id != id);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        };
        self.loading.set(false);
        outcome
    }

    /// Discard every local change and restore the built-in records.
    /// Mock builds only; the live service has no equivalent.
    #[cfg(not(feature = "live-api"))]
    pub async fn reset(mut self) -> Result<(), String> {
        self.begin();
        let outcome = match crate::backend::reset_store_to_defaults().await {
            Ok(list) => {
                self.records.set(list);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        };
        self.loading.set(false);
        outcome
    }

    fn begin(&mut self) {
        self.loading.set(true);
        self.error.set(None);
    }

    fn fail(&mut self, err: StoreError) -> String {
        let message = err.to_string();
        tracing::error!(error = %message, "user store operation failed");
        self.error.set(Some(message.clone()));
        message
    }
}
