//! The capability surface every user-store backend implements.
//!
//! Views never talk to a concrete backend; they go through [`UserStore`],
//! and the composition layer decides whether that is the mock store
//! ([`crate::MockStore`]) or the live REST client ([`crate::RestStore`]).
//! Refreshing is re-running `list`; the in-memory record list the
//! operations feed lives with the caller, which patches it only after a
//! confirmed success.

use crate::error::StoreError;
use crate::models::{NewUser, User, UserPatch};

pub trait UserStore {
    /// Fetch the full record list from the backing source of truth.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<User>, StoreError>>;

    /// Validate and persist a new record; the backend assigns the id.
    fn create(&self, draft: NewUser)
        -> impl std::future::Future<Output = Result<User, StoreError>>;

    /// Apply a partial update to an existing record and return the merged
    /// result. The id is immutable.
    fn update(
        &self,
        id: &str,
        patch: UserPatch,
    ) -> impl std::future::Future<Output = Result<User, StoreError>>;

    /// Remove a record permanently.
    fn delete(&self, id: &str) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
