//! Persisted-token storage.
//!
//! Stores the cloud token as a JSON file under the platform data directory.

use std::path::PathBuf;

use tokio::fs;

use crate::error::StorageError;
use crate::types::Token;

/// File name of the persisted token inside the data directory.
const TOKEN_FILE: &str = "token.json";

/// Get the default data directory for bambu-link tools.
///
/// Uses the `directories` crate to find the appropriate platform-specific
/// data directory.
pub fn default_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "bambu-link", "bambu-link")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Token storage service.
///
/// Takes a `PathBuf` in the constructor so consumers (and tests) can provide
/// the storage path.
pub struct TokenStore {
    data_dir: PathBuf,
}

impl TokenStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { data_dir: dir }
    }

    /// Open the store at the platform default location.
    pub fn at_default_location() -> Result<Self, StorageError> {
        let dir = default_data_dir().ok_or(StorageError::DirectoryAccess)?;
        Ok(Self::new(dir))
    }

    fn token_path(&self) -> PathBuf {
        self.data_dir.join(TOKEN_FILE)
    }

    /// Load the persisted token. A missing file is `None`; an unreadable or
    /// corrupt file is an error.
    pub async fn load(&self) -> Result<Option<Token>, StorageError> {
        let path = self.token_path();

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).await.map_err(StorageError::Io)?;
        let token: Token =
            serde_json::from_str(&content).map_err(StorageError::Serialization)?;

        Ok(Some(token))
    }

    /// Save the token, creating the data directory if needed.
    pub async fn save(&self, token: &Token) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(StorageError::Io)?;

        let content =
            serde_json::to_string_pretty(token).map_err(StorageError::Serialization)?;

        fs::write(self.token_path(), content)
            .await
            .map_err(StorageError::Io)?;

        Ok(())
    }
}
