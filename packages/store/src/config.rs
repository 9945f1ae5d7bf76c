//! API target configuration.
//!
//! One knob: the base URL of the remote user service. It is supplied
//! externally at build time via the `USERDESK_API_URL` environment
//! variable; absence falls back to the local development default. Backend
//! *selection* is not configured here; that is the `live-api` feature on
//! the ui crate.

/// Local development default for the user service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// The externally supplied base URL, or the local default. Baked in at
    /// compile time so the wasm bundle needs no runtime environment.
    pub fn from_env() -> Self {
        match option_env!("USERDESK_API_URL") {
            Some(url) if !url.trim().is_empty() => Self {
                base_url: url.trim().trim_end_matches('/').to_string(),
            },
            _ => Self::default(),
        }
    }
}
