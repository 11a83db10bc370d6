//! Generate command: the default mode.
//!
//! Token, device list, selection, credentials, URL. Each step runs exactly
//! once; any failure ends the run.

use bambu_link_core::api::Client;
use bambu_link_core::url::{new_cli_id, stream_url};

use crate::cli::Cli;
use crate::commands::saved_token;
use crate::error::{CliError, Result};
use crate::output;
use crate::select;

pub async fn run_generate(cli: Cli) -> Result<()> {
    let mode = cli.run_mode();

    output::banner(mode, "Bambu Lab Cloud URL Generator");

    let token = saved_token().await?;
    output::note(mode, "Authenticated using saved token.");

    let client = Client::new(token.access_token)?;
    let devices = client.list_devices().await?;
    if devices.is_empty() {
        return Err(CliError::NoDevicesFound);
    }

    let selection = select::resolve(cli.serial.clone(), mode);
    let device = selection.pick(&devices).await?;

    output::note(mode, &format!("\nSelected: {}", device.name));
    output::note(mode, "Fetching camera credentials...");

    let creds = client.get_camera_credentials(&device.dev_id).await?;

    if cli.verbose {
        eprintln!("--- Full camera credentials response ---");
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&creds).unwrap_or_else(|_| "{}".to_string())
        );
        eprintln!("----------------------------------------");
    }

    let url = stream_url(&creds, &device, &new_cli_id())?;
    output::report_url(mode, &url);

    Ok(())
}
