pub mod backend;
pub mod changes;
pub mod config;
pub mod models;
pub mod validate;

mod error;
pub use error::StoreError;

mod kv;
#[cfg(not(target_arch = "wasm32"))]
pub use kv::FileKv;
#[cfg(target_arch = "wasm32")]
pub use kv::LocalStorageKv;
pub use kv::{KeyValueStore, MemoryKv};

mod mock;
pub use mock::MockStore;

mod rest;
pub use rest::{Envelope, RestStore};

pub use backend::UserStore;
pub use changes::{ChangeLog, CHANGES_STORAGE_KEY};
pub use config::ApiConfig;
pub use models::{NewUser, User, UserPatch};
