//! Shared store constructor for all builds.
//!
//! Returns the [`store::UserStore`] backend the build composed in:
//! - **default**: the mock store, an embedded seed plus a modification
//!   log in platform-local storage (localStorage on web, a data-dir file
//!   natively)
//! - **`live-api` feature**: the REST client against the configured
//!   user-service base URL
//!
//! Every operation constructs its own short-lived store; all durable
//! state lives behind it.

use store::UserStore;

#[cfg(not(feature = "live-api"))]
const SEED_JSON: &str = include_str!("../assets/seed_users.json");

#[cfg(not(feature = "live-api"))]
pub fn make_store() -> impl UserStore {
    store::MockStore::new(seed_users(), platform_kv())
}

#[cfg(feature = "live-api")]
pub fn make_store() -> impl UserStore {
    store::RestStore::new(store::ApiConfig::from_env())
}

/// The read-only records the mock store overlays its modification log on.
#[cfg(not(feature = "live-api"))]
pub fn seed_users() -> Vec<store::User> {
    serde_json::from_str(SEED_JSON).unwrap_or_else(|err| {
        tracing::error!(error = %err, "embedded seed does not parse");
        Vec::new()
    })
}

/// Clear the modification log and return the pristine seed.
#[cfg(not(feature = "live-api"))]
pub async fn reset_store_to_defaults() -> Result<Vec<store::User>, store::StoreError> {
    store::MockStore::new(seed_users(), platform_kv())
        .reset_to_defaults()
        .await
}

#[cfg(all(not(feature = "live-api"), target_arch = "wasm32"))]
fn platform_kv() -> store::LocalStorageKv {
    store::LocalStorageKv::new()
}

#[cfg(all(not(feature = "live-api"), not(target_arch = "wasm32")))]
fn platform_kv() -> store::FileKv {
    let base = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("userdesk");
    store::FileKv::new(base)
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "live-api"))]
    #[test]
    fn embedded_seed_parses_and_has_unique_ids() {
        let seed = super::seed_users();
        assert!(!seed.is_empty());
        let mut ids: Vec<_> = seed.iter().map(|u| u.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed.len());
        assert!(seed.iter().all(|u| !u.email.is_empty()));
    }
}
