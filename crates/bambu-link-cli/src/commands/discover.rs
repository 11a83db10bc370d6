//! Discover command: list printers for scripting.

use bambu_link_core::api::Client;

use crate::commands::saved_token;
use crate::error::Result;

/// Print one `<serial> <name>` line per printer to stdout.
///
/// An account with no printers is a valid, silent success.
pub async fn run_discover() -> Result<()> {
    let token = saved_token().await?;
    let client = Client::new(token.access_token)?;

    for device in client.list_devices().await? {
        println!("{} {}", device.dev_id, device.name);
    }

    Ok(())
}
