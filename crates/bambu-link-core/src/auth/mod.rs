//! Cloud account authentication.
//!
//! Wraps the login endpoint and the persisted-token store behind
//! get-or-create semantics: a run either presents a saved, unexpired token
//! or fails without touching the network.

pub mod token_store;

pub use token_store::TokenStore;

use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;

use crate::error::{AuthError, CoreError};
use crate::types::Token;

/// Cloud login endpoint, relative to the API base.
const LOGIN_PATH: &str = "/v1/user-service/user/login";

/// Request timeout for the login call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(rename = "accessToken", default)]
    access_token: String,

    #[serde(rename = "refreshToken", default)]
    refresh_token: String,

    /// Token lifetime in seconds.
    #[serde(rename = "expiresIn", default)]
    expires_in: i64,
}

/// Account authenticator backed by a token store.
pub struct Authenticator {
    http: reqwest::Client,
    base_url: String,
    store: TokenStore,
}

impl Authenticator {
    pub fn new(base_url: impl Into<String>, store: TokenStore) -> Result<Self, CoreError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CoreError::Other(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            store,
        })
    }

    /// Log in with account credentials and persist the resulting token.
    pub async fn login(&self, account: &str, password: &str) -> Result<Token, CoreError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), LOGIN_PATH);
        let body = serde_json::json!({
            "account": account,
            "password": password,
        });

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CoreError::Other(format!("failed to reach login endpoint: {}", e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(AuthError::LoginRejected {
                message: format!("{}: {}", status, text),
            }
            .into());
        }

        let data: LoginResponse = resp
            .json()
            .await
            .map_err(|_| AuthError::MalformedResponse("body"))?;

        if data.access_token.is_empty() {
            return Err(AuthError::MalformedResponse("accessToken").into());
        }

        let token = Token {
            access_token: data.access_token,
            refresh_token: data.refresh_token,
            expires_at: Utc::now().timestamp() + data.expires_in,
        };

        self.store.save(&token).await?;

        Ok(token)
    }

    /// Return the saved token, or fail when none is usable.
    ///
    /// An absent, unreadable, or expired token is `AuthError::NoSavedToken`,
    /// distinct from a login rejection.
    pub async fn get_or_create_token(&self) -> Result<Token, CoreError> {
        match self.store.load().await? {
            Some(token) if token.is_usable() => Ok(token),
            _ => Err(AuthError::NoSavedToken.into()),
        }
    }
}
