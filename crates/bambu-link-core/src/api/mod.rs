//! Cloud API client for the device registry and streaming credentials.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{ApiError, CoreError};
use crate::types::{CameraCredentials, Device};

/// Default cloud API base.
pub const DEFAULT_BASE_URL: &str = "https://api.bambulab.com";

/// Bound-device listing endpoint.
const BIND_PATH: &str = "/v1/iot-service/api/user/bind";

/// Streaming-credential (ttcode) endpoint.
const TTCODE_PATH: &str = "/v1/iot-service/api/user/ttcode";

/// Request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct BindResponse {
    #[serde(default)]
    devices: Vec<Device>,
}

/// Authenticated cloud API client.
///
/// Every call is attempted exactly once; there are no retries.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl Client {
    /// Create a client against the default cloud endpoint.
    pub fn new(access_token: impl Into<String>) -> Result<Self, CoreError> {
        Self::with_base_url(DEFAULT_BASE_URL, access_token)
    }

    /// Create a client against a specific API base (tests, regional hosts).
    pub fn with_base_url(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CoreError::Other(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            access_token: access_token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// List the printers bound to the account.
    pub async fn list_devices(&self) -> Result<Vec<Device>, CoreError> {
        let resp = self
            .http
            .get(self.url(BIND_PATH))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                endpoint: "user/bind",
                source: e,
            })?;

        let resp = check_status("user/bind", resp).await?;

        let data: BindResponse = resp.json().await.map_err(|e| ApiError::Transport {
            endpoint: "user/bind",
            source: e,
        })?;

        Ok(data.devices)
    }

    /// Fetch the streaming credential tuple for one device.
    pub async fn get_camera_credentials(
        &self,
        dev_id: &str,
    ) -> Result<CameraCredentials, CoreError> {
        let body = serde_json::json!({ "dev_id": dev_id });

        let resp = self
            .http
            .post(self.url(TTCODE_PATH))
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                endpoint: "user/ttcode",
                source: e,
            })?;

        let resp = check_status("user/ttcode", resp).await?;

        let creds: CameraCredentials = resp.json().await.map_err(|e| ApiError::Transport {
            endpoint: "user/ttcode",
            source: e,
        })?;

        Ok(creds)
    }
}

/// Map non-success statuses to API errors, keeping the body for diagnostics.
async fn check_status(
    endpoint: &'static str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, CoreError> {
    let status = resp.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthorized.into());
    }

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            endpoint,
            status: status.as_u16(),
            body,
        }
        .into());
    }

    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_response_parses_device_list() {
        let json = r#"{
            "devices": [
                {"dev_id": "A1", "name": "Shop", "online": true},
                {"dev_id": "B2", "name": "Garage", "online": false}
            ]
        }"#;

        let resp: BindResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.devices.len(), 2);
        assert_eq!(resp.devices[0].dev_id, "A1");
        assert!(!resp.devices[1].online);
    }

    #[test]
    fn test_bind_response_missing_devices_is_empty() {
        let resp: BindResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.devices.is_empty());
    }

    #[test]
    fn test_url_join_trims_trailing_slash() {
        let client = Client::with_base_url("https://api.example.com/", "tok").unwrap();
        assert_eq!(
            client.url(BIND_PATH),
            "https://api.example.com/v1/iot-service/api/user/bind"
        );
    }
}
