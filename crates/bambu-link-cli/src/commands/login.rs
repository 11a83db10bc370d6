//! Interactive login flow.

use bambu_link_core::api::DEFAULT_BASE_URL;
use bambu_link_core::auth::{Authenticator, TokenStore};
use colored::*;

use crate::error::{CliError, Result};
use crate::prompt;

/// Prompt for account credentials, log in, persist the token.
pub async fn run_login() -> Result<()> {
    println!("Bambu Lab Interactive Login");
    println!("===========================");

    let account = tokio::task::spawn_blocking(prompt::account)
        .await
        .map_err(|_| CliError::Cancelled)??;

    let password = tokio::task::spawn_blocking(prompt::password)
        .await
        .map_err(|_| CliError::Cancelled)??;

    let store = TokenStore::at_default_location()?;
    let auth = Authenticator::new(DEFAULT_BASE_URL, store)?;
    auth.login(&account, &password).await?;

    println!(
        "{}",
        "Login successful. Token saved for future use.".green()
    );

    Ok(())
}
