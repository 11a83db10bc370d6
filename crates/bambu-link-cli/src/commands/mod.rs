//! Command implementations.

pub mod discover;
pub mod generate;
pub mod login;

pub use discover::run_discover;
pub use generate::run_generate;
pub use login::run_login;

use bambu_link_core::api::DEFAULT_BASE_URL;
use bambu_link_core::auth::{Authenticator, TokenStore};
use bambu_link_core::types::Token;

use crate::error::Result;

/// Load the persisted token with get-or-create semantics.
pub(crate) async fn saved_token() -> Result<Token> {
    let store = TokenStore::at_default_location()?;
    let auth = Authenticator::new(DEFAULT_BASE_URL, store)?;
    Ok(auth.get_or_create_token().await?)
}
