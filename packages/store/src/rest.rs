//! # Live REST user store
//!
//! A [`UserStore`] that proxies every operation 1:1 to the remote user
//! service and trusts its responses as the source of truth:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list`    | `GET /users` |
//! | `create`  | `POST /users` |
//! | `update`  | `PUT /users/:id` |
//! | `delete`  | `DELETE /users/:id` |
//!
//! Responses are wrapped in an [`Envelope`]; the `success` flag is
//! authoritative. A non-success envelope (or a non-2xx status) surfaces the
//! server-provided message, defaulting to a generic one when absent. A
//! request that never produced a response is the distinct
//! [`StoreError::Unreachable`] class. Client-side validation runs before
//! any request is sent, so obviously bad input never costs a round trip.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::backend::UserStore;
use crate::config::ApiConfig;
use crate::error::StoreError;
use crate::models::{NewUser, User, UserPatch};
use crate::validate;

/// Fallback when the server reports failure without a message.
const GENERIC_FAILURE: &str = "operation failed";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// The response wrapper every user-service endpoint uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
}

impl RestStore {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: build_client(),
            base_url: config.base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Unwrap an envelope that must carry data on success.
    async fn read<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
        let envelope = Self::read_envelope::<T>(response).await?;
        envelope
            .data
            .ok_or_else(|| StoreError::Api(GENERIC_FAILURE.to_string()))
    }

    /// Unwrap an envelope where success alone is the answer (delete).
    async fn read_unit(response: reqwest::Response) -> Result<(), StoreError> {
        Self::read_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, StoreError> {
        let status = response.status();
        let envelope: Envelope<T> = match response.json().await {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!(%status, error = %err, "unparseable user-service response");
                return Err(StoreError::Api(GENERIC_FAILURE.to_string()));
            }
        };
        if !status.is_success() || !envelope.success {
            return Err(StoreError::Api(
                envelope
                    .message
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            ));
        }
        Ok(envelope)
    }
}

impl UserStore for RestStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let response = self
            .client
            .get(self.url("users"))
            .send()
            .await
            .map_err(unreachable_err)?;
        Self::read(response).await
    }

    async fn create(&self, draft: NewUser) -> Result<User, StoreError> {
        validate::validate_new(&draft)?;
        validate::validate_password(draft.password.as_deref().unwrap_or(""))?;

        let response = self
            .client
            .post(self.url("users"))
            .json(&draft)
            .send()
            .await
            .map_err(unreachable_err)?;
        Self::read(response).await
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<User, StoreError> {
        validate::validate_patch(&patch, true)?;

        let response = self
            .client
            .put(self.url(&format!("users/{id}")))
            .json(&patch)
            .send()
            .await
            .map_err(unreachable_err)?;
        Self::read(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.url(&format!("users/{id}")))
            .send()
            .await
            .map_err(unreachable_err)?;
        Self::read_unit(response).await
    }
}

/// `send()` failed: nothing came back, so this is a transport problem,
/// not a server-reported one.
fn unreachable_err(err: reqwest::Error) -> StoreError {
    tracing::warn!(error = %err, "user service unreachable");
    StoreError::Unreachable
}

fn build_client() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client")
    }
    #[cfg(target_arch = "wasm32")]
    {
        // The browser's fetch owns timeouts on wasm.
        reqwest::Client::new()
    }
}
