//! Shared types for cloud payloads and the persisted token.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A printer bound to the cloud account.
///
/// Deserialized from the bound-device listing; unknown payload fields are
/// ignored. Immutable for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub dev_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub dev_product_name: String,

    /// Firmware version as reported by the cloud; may be empty.
    #[serde(default)]
    pub ota_version: String,

    #[serde(default)]
    pub online: bool,
}

/// Per-device streaming credential tuple, fetched fresh each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraCredentials {
    #[serde(default)]
    pub ttcode: String,

    #[serde(default)]
    pub authkey: String,

    #[serde(default)]
    pub passwd: String,

    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "us".to_string()
}

/// Persisted authentication token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,

    #[serde(default)]
    pub refresh_token: String,

    /// Unix seconds after which the access token is stale.
    pub expires_at: i64,
}

impl Token {
    /// Whether the token can still be presented to the API.
    pub fn is_usable(&self) -> bool {
        !self.access_token.is_empty() && self.expires_at > Utc::now().timestamp()
    }
}
